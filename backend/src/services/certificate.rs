use std::sync::Arc;

use crate::error::AppError;
use crate::models::{CertificateOutput, CertificatesResponse};
use crate::repositories::CertificateRepository;

/// Inventory logic over the certificate store: filtering, grouping and
/// display naming.
#[derive(Clone)]
pub struct CertificateService {
    repo: Arc<dyn CertificateRepository>,
}

impl CertificateService {
    pub fn new(repo: Arc<dyn CertificateRepository>) -> Self {
        Self { repo }
    }

    /// All usable certificates, grouped into electronic ID cards and
    /// ordinary signing certificates. Entries without a private key and
    /// self-signed entries are not usable for signing and are dropped.
    pub async fn grouped(&self) -> Result<CertificatesResponse, AppError> {
        let all_certs = self.repo.find_all().await?;

        let mut dni_electronico = Vec::new();
        let mut certificados = Vec::new();

        for cert in &all_certs {
            if !cert.has_private_key || cert.is_self_signed() {
                continue;
            }

            let output = CertificateOutput::from(cert);
            if cert.is_dnie {
                dni_electronico.push(output);
            } else {
                certificados.push(output);
            }
        }

        Ok(CertificatesResponse {
            dni_electronico,
            certificados,
        })
    }

    /// Look a certificate up by its store thumbprint.
    pub async fn find_by_thumbprint(
        &self,
        thumbprint: &str,
    ) -> Result<CertificateOutput, AppError> {
        let all_certs = self.repo.find_all().await?;

        all_certs
            .iter()
            .find(|cert| cert.thumbprint == thumbprint)
            .map(CertificateOutput::from)
            .ok_or_else(|| AppError::NotFound("Certificate not found".to_string()))
    }
}
