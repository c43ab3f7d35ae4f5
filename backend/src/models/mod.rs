pub mod certificate;

pub use certificate::{Certificate, CertificateOutput, CertificatesResponse};
