use crate::error::AppError;
use crate::models::Certificate;

/// Read access to the local signing-certificate store.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CertificateRepository: Send + Sync {
    /// Enumerate every unique certificate in the store.
    async fn find_all(&self) -> Result<Vec<Certificate>, AppError>;
}
