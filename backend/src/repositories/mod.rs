//! Certificate store access.
//!
//! The store is modeled as a trait so services can be exercised against
//! fakes; the production implementation scans a directory of certificate
//! files.

mod certificate;
mod file_store;

pub use certificate::CertificateRepository;
pub use file_store::FileStoreRepository;

#[cfg(test)]
pub use certificate::MockCertificateRepository;
