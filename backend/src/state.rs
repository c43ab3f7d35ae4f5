use crate::{config::Config, services::CertificateService};

#[derive(Clone)]
pub struct AppState {
    pub certificates: CertificateService,
    pub config: Config,
}

impl AppState {
    pub fn new(certificates: CertificateService, config: Config) -> Self {
        Self {
            certificates,
            config,
        }
    }
}
