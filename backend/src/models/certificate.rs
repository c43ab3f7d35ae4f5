use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A signing certificate as read from the local store.
#[derive(Debug, Clone, PartialEq)]
pub struct Certificate {
    pub subject: String,
    pub issuer: String,
    pub common_name: String,
    pub owner_name: String,
    pub organization_name: String,
    pub issuer_name: String,
    /// 8-digit national ID extracted from a `PNOPE-NNNNNNNN` subject
    /// attribute, empty when absent.
    pub dni: String,
    pub serial_number: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub has_private_key: bool,
    pub is_dnie: bool,
    /// Uppercase hex SHA-1 of the DER encoding.
    pub thumbprint: String,
    pub is_valid: bool,
    pub days_until_expiry: i64,
}

impl Certificate {
    pub fn kind(&self) -> &'static str {
        if self.is_dnie {
            "DNIe"
        } else if self.has_private_key {
            "Certificado"
        } else {
            "CA"
        }
    }

    pub fn is_self_signed(&self) -> bool {
        self.subject == self.issuer
    }

    /// Display name shown in the inventory: the owner plus either the
    /// card marker or the issuing organization.
    pub fn display_name(&self) -> String {
        if self.is_dnie {
            format!("{} - DNIe", self.owner_name)
        } else {
            format!("{} - {}", self.owner_name, self.organization_name)
        }
    }
}

/// Wire representation of a single certificate.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificateOutput {
    pub id: String,
    pub nombre: String,
    pub tipo: String,
    pub issuer: String,
    pub serial_number: String,
    pub valido_desde: DateTime<Utc>,
    pub valido_hasta: DateTime<Utc>,
    pub dias_para_vencer: i64,
    pub requiere_contrasena: bool,
    pub is_valid: bool,
}

impl From<&Certificate> for CertificateOutput {
    fn from(cert: &Certificate) -> Self {
        CertificateOutput {
            id: cert.thumbprint.clone(),
            nombre: cert.display_name(),
            tipo: cert.kind().to_string(),
            issuer: cert.issuer_name.clone(),
            serial_number: cert.serial_number.clone(),
            valido_desde: cert.not_before,
            valido_hasta: cert.not_after,
            dias_para_vencer: cert.days_until_expiry,
            requiere_contrasena: cert.has_private_key,
            is_valid: cert.is_valid,
        }
    }
}

/// Inventory response: electronic ID cards and ordinary certificates,
/// grouped the way the client renders them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificatesResponse {
    pub dni_electronico: Vec<CertificateOutput>,
    pub certificados: Vec<CertificateOutput>,
}
