use std::path::Path;
use std::sync::Arc;

use certifirma_backend::{
    repositories::{CertificateRepository, FileStoreRepository},
    services::CertificateService,
};

const DNIE_PEM: &[u8] = include_bytes!("fixtures/dnie.pem");
const DNIE_KEY: &[u8] = include_bytes!("fixtures/dnie.key");
const SOFT_PEM: &[u8] = include_bytes!("fixtures/soft.pem");
const SOFT_KEY: &[u8] = include_bytes!("fixtures/soft.key");
const ORPHAN_PEM: &[u8] = include_bytes!("fixtures/orphan.pem");
const CA_PEM: &[u8] = include_bytes!("fixtures/reniec_ca.pem");

fn write(dir: &Path, name: &str, bytes: &[u8]) {
    std::fs::write(dir.join(name), bytes).expect("write fixture");
}

/// A store holding a DNIe card certificate, a software certificate, a
/// certificate without a key, the issuing CA, a duplicate and a garbage
/// file.
fn seed_store(dir: &Path) {
    write(dir, "dnie.pem", DNIE_PEM);
    write(dir, "dnie.key", DNIE_KEY);
    write(dir, "soft.pem", SOFT_PEM);
    write(dir, "soft.key", SOFT_KEY);
    write(dir, "orphan.pem", ORPHAN_PEM);
    write(dir, "reniec_ca.pem", CA_PEM);
    write(dir, "soft_copy.pem", SOFT_PEM);
    write(dir, "garbage.pem", b"this is not a certificate");
}

#[tokio::test]
async fn scan_collapses_duplicates_and_skips_garbage() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed_store(dir.path());

    let repo = FileStoreRepository::new(dir.path());
    let certs = repo.find_all().await.expect("scan");

    // dnie, soft, orphan, ca; the copy shares a thumbprint and the
    // garbage file never parses.
    assert_eq!(certs.len(), 4);

    let thumbprints: Vec<&str> = certs.iter().map(|c| c.thumbprint.as_str()).collect();
    let unique: std::collections::HashSet<&&str> = thumbprints.iter().collect();
    assert_eq!(unique.len(), 4);
}

#[tokio::test]
async fn scan_extracts_x509_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed_store(dir.path());

    let repo = FileStoreRepository::new(dir.path());
    let certs = repo.find_all().await.expect("scan");

    let dnie = certs
        .iter()
        .find(|c| c.common_name == "JUAN PEREZ QUISPE")
        .expect("card certificate present");
    assert!(dnie.is_dnie);
    assert_eq!(dnie.dni, "12345678");
    assert_eq!(dnie.owner_name, "JUAN PEREZ QUISPE");
    assert_eq!(dnie.issuer_name, "RENIEC CA Clase 2");
    assert!(dnie.has_private_key);
    assert!(dnie.is_valid);
    assert!(dnie.days_until_expiry > 0);
    assert_eq!(dnie.kind(), "DNIe");
    // SHA-1 thumbprint, uppercase hex.
    assert_eq!(dnie.thumbprint.len(), 40);
    assert!(dnie
        .thumbprint
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    assert!(!dnie.serial_number.is_empty());

    let soft = certs
        .iter()
        .find(|c| c.common_name.contains("MARIA LOPEZ GARCIA"))
        .expect("software certificate present");
    assert!(!soft.is_dnie);
    assert_eq!(soft.owner_name, "MARIA LOPEZ GARCIA");
    assert_eq!(soft.organization_name, "ACME CERT");
    assert!(soft.has_private_key);
    assert_eq!(soft.kind(), "Certificado");

    let orphan = certs
        .iter()
        .find(|c| c.common_name == "PEDRO RAMIREZ")
        .expect("orphan certificate present");
    assert!(!orphan.has_private_key);
    assert_eq!(orphan.kind(), "CA");

    let ca = certs
        .iter()
        .find(|c| c.common_name == "RENIEC CA Clase 2")
        .expect("ca certificate present");
    assert!(ca.is_self_signed());
}

#[tokio::test]
async fn service_over_real_store_groups_usable_certificates() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed_store(dir.path());

    let service = CertificateService::new(Arc::new(FileStoreRepository::new(dir.path())));
    let response = service.grouped().await.expect("grouped");

    assert_eq!(response.dni_electronico.len(), 1);
    assert_eq!(response.dni_electronico[0].nombre, "JUAN PEREZ QUISPE - DNIe");

    // The orphan (no key) and the self-signed CA are filtered out.
    assert_eq!(response.certificados.len(), 1);
    assert_eq!(
        response.certificados[0].nombre,
        "MARIA LOPEZ GARCIA - ACME CERT"
    );
}

#[tokio::test]
async fn service_finds_store_certificates_by_thumbprint() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed_store(dir.path());

    let repo = Arc::new(FileStoreRepository::new(dir.path()));
    let certs = repo.find_all().await.expect("scan");
    let thumbprint = certs[0].thumbprint.clone();

    let service = CertificateService::new(repo);
    let output = service
        .find_by_thumbprint(&thumbprint)
        .await
        .expect("found");
    assert_eq!(output.id, thumbprint);
}
