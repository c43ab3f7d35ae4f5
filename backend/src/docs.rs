#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::models::{CertificateOutput, CertificatesResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(list_certificates_doc, get_certificate_doc, health_doc),
    components(schemas(CertificateOutput, CertificatesResponse)),
    tags(
        (name = "certificates", description = "Signing-certificate inventory"),
        (name = "health", description = "Service liveness")
    ),
    info(
        title = "Certificados Firma API",
        description = "Inventory of local signing certificates (DNIe and software certificates)"
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/api/certificates",
    tag = "certificates",
    responses(
        (status = 200, description = "Usable certificates grouped by kind", body = CertificatesResponse),
        (status = 500, description = "Certificate store could not be read")
    )
)]
async fn list_certificates_doc() {}

#[utoipa::path(
    get,
    path = "/api/certificates/{thumbprint}",
    tag = "certificates",
    params(
        ("thumbprint" = String, Path, description = "Store thumbprint of the certificate")
    ),
    responses(
        (status = 200, description = "The matching certificate", body = CertificateOutput),
        (status = 404, description = "No certificate with that thumbprint")
    )
)]
async fn get_certificate_doc() {}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
async fn health_doc() {}
