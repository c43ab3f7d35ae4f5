#![allow(dead_code)] // Each test binary uses a subset of these helpers.

use std::sync::Arc;

use certifirma_backend::{
    config::Config,
    error::AppError,
    models::Certificate,
    repositories::CertificateRepository,
    services::CertificateService,
    state::AppState,
};
use chrono::{TimeZone, Utc};

pub fn test_config() -> Config {
    Config {
        bind_addr: ([127, 0, 0, 1], 0).into(),
        environment: "test".to_string(),
        cert_store_dir: "./certs".into(),
        allowed_origins: vec!["http://localhost:3000".to_string()],
    }
}

pub fn sample_certificate(thumbprint: &str, owner: &str, is_dnie: bool) -> Certificate {
    Certificate {
        subject: format!("CN={}, O=UNSCH", owner),
        issuer: "CN=RENIEC CA Clase 2, O=RENIEC".to_string(),
        common_name: owner.to_string(),
        owner_name: owner.to_string(),
        organization_name: "UNSCH".to_string(),
        issuer_name: "RENIEC CA Clase 2".to_string(),
        dni: String::new(),
        serial_number: "99".to_string(),
        not_before: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        not_after: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
        has_private_key: true,
        is_dnie,
        thumbprint: thumbprint.to_string(),
        is_valid: true,
        days_until_expiry: 1000,
    }
}

/// Fixed-inventory store used by the API tests.
pub struct StubRepository {
    certs: Vec<Certificate>,
    fail: bool,
}

impl StubRepository {
    pub fn with_certs(certs: Vec<Certificate>) -> Self {
        Self { certs, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            certs: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait::async_trait]
impl CertificateRepository for StubRepository {
    async fn find_all(&self) -> Result<Vec<Certificate>, AppError> {
        if self.fail {
            return Err(AppError::Internal(anyhow::anyhow!("store offline")));
        }
        Ok(self.certs.clone())
    }
}

pub fn test_state(repo: impl CertificateRepository + 'static) -> AppState {
    AppState::new(CertificateService::new(Arc::new(repo)), test_config())
}
