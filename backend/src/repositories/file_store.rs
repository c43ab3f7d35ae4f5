use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use sha1::{Digest, Sha1};
use walkdir::WalkDir;
use x509_parser::prelude::*;

use super::CertificateRepository;
use crate::error::AppError;
use crate::models::Certificate;

/// Enumeration stops after this many unique certificates.
const MAX_CERTIFICATES: usize = 100;

/// Organization shown when the subject carries no O attribute.
const DEFAULT_ORGANIZATION: &str = "CertSoft";

const CERT_EXTENSIONS: [&str; 3] = ["pem", "crt", "cer"];
const PEM_MARKER: &str = "-----BEGIN CERTIFICATE-----";

/// Certificate store backed by a directory of PEM/DER files.
///
/// A certificate is considered to have a usable private key when a
/// sibling file with the same stem and a `.key` extension exists.
pub struct FileStoreRepository {
    root: PathBuf,
}

impl FileStoreRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait::async_trait]
impl CertificateRepository for FileStoreRepository {
    async fn find_all(&self) -> Result<Vec<Certificate>, AppError> {
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || scan_store(&root))
            .await
            .map_err(|err| AppError::Internal(err.into()))?
    }
}

fn scan_store(root: &Path) -> Result<Vec<Certificate>, AppError> {
    if !root.is_dir() {
        return Err(AppError::Internal(anyhow::anyhow!(
            "certificate store {} is not a directory",
            root.display()
        )));
    }

    tracing::debug!(store = %root.display(), "Enumerating certificate store");

    let mut certificates: Vec<Certificate> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    'walk: for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("Skipping unreadable store entry: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_file() || !has_cert_extension(entry.path()) {
            continue;
        }

        let blocks = match read_der_blocks(entry.path()) {
            Ok(blocks) => blocks,
            Err(err) => {
                tracing::warn!(
                    file = %entry.path().display(),
                    "Skipping unreadable certificate file: {}",
                    err
                );
                continue;
            }
        };

        let has_private_key = entry.path().with_extension("key").is_file();

        for der in blocks {
            match parse_certificate(&der, has_private_key) {
                Ok(cert) => {
                    if seen.insert(cert.thumbprint.clone()) {
                        tracing::debug!(
                            name = %cert.common_name,
                            kind = cert.kind(),
                            "Found certificate"
                        );
                        certificates.push(cert);
                        if certificates.len() >= MAX_CERTIFICATES {
                            tracing::warn!(
                                "Certificate store cap of {} unique entries reached",
                                MAX_CERTIFICATES
                            );
                            break 'walk;
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        file = %entry.path().display(),
                        "Skipping unparseable certificate: {}",
                        err
                    );
                }
            }
        }
    }

    tracing::debug!(total = certificates.len(), "Certificate store enumeration finished");
    Ok(certificates)
}

fn has_cert_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            CERT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Read one or more DER blocks from a certificate file. PEM bundles may
/// hold several certificates; anything without a PEM marker is treated
/// as a single raw DER blob.
fn read_der_blocks(path: &Path) -> anyhow::Result<Vec<Vec<u8>>> {
    let bytes = std::fs::read(path)?;
    if String::from_utf8_lossy(&bytes).contains(PEM_MARKER) {
        let mut reader = &bytes[..];
        let mut blocks = Vec::new();
        for der in rustls_pemfile::certs(&mut reader) {
            blocks.push(der?.as_ref().to_vec());
        }
        Ok(blocks)
    } else {
        Ok(vec![bytes])
    }
}

fn parse_certificate(der: &[u8], has_private_key: bool) -> anyhow::Result<Certificate> {
    let (_, parsed) =
        parse_x509_certificate(der).map_err(|err| anyhow::anyhow!("X.509 parse failed: {}", err))?;

    let subject = parsed.subject().to_string();
    let issuer = parsed.issuer().to_string();

    let common_name = first_attribute(parsed.subject().iter_common_name());
    let issuer_name = first_attribute(parsed.issuer().iter_common_name());
    let organization_name = {
        let org = first_attribute(parsed.subject().iter_organization());
        if org.is_empty() {
            DEFAULT_ORGANIZATION.to_string()
        } else {
            org
        }
    };

    let serial_number = parsed.tbs_certificate.serial.to_string();

    let not_before = timestamp_to_utc(parsed.validity().not_before.timestamp())?;
    let not_after = timestamp_to_utc(parsed.validity().not_after.timestamp())?;

    let now = Utc::now();
    let is_valid = now > not_before && now < not_after;
    let days_until_expiry = (not_after - now).num_days();

    let thumbprint = hex::encode_upper(Sha1::digest(der));
    let is_dnie = detect_dnie(&subject, &issuer);
    let owner_name = extract_owner_name(&common_name);
    let dni = extract_dni(&subject);

    Ok(Certificate {
        subject,
        issuer,
        common_name,
        owner_name,
        organization_name,
        issuer_name,
        dni,
        serial_number,
        not_before,
        not_after,
        has_private_key,
        is_dnie,
        thumbprint,
        is_valid,
        days_until_expiry,
    })
}

fn first_attribute<'a, I>(mut attrs: I) -> String
where
    I: Iterator<Item = &'a AttributeTypeAndValue<'a>>,
{
    attrs
        .next()
        .and_then(|attr| attr.as_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn timestamp_to_utc(timestamp: i64) -> anyhow::Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .ok_or_else(|| anyhow::anyhow!("certificate validity timestamp out of range"))
}

/// A physical DNIe card certificate: carries a PNOPE subject attribute,
/// is issued by RENIEC, and is neither a software certificate ("soft")
/// nor an authority signature ("FAU").
fn detect_dnie(subject: &str, issuer: &str) -> bool {
    let subject_lower = subject.to_lowercase();
    if subject_lower.contains("soft") {
        return false;
    }

    let has_pnope = subject_lower.contains("pnope-");
    let has_fau = subject_lower.contains("fau");
    let has_reniec = issuer.to_lowercase().contains("reniec");

    has_pnope && has_reniec && !has_fau
}

fn extract_owner_name(common_name: &str) -> String {
    if let Some((before, _)) = common_name.split_once("FAU") {
        return before.trim().to_string();
    }
    let name = common_name.trim();
    name.strip_suffix(" soft").unwrap_or(name).to_string()
}

/// Extract the 8-digit national ID following a `PNOPE-` subject marker.
fn extract_dni(subject: &str) -> String {
    let Some(pos) = subject.find("PNOPE-") else {
        return String::new();
    };
    let digits: String = subject[pos + "PNOPE-".len()..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.len() >= 8 {
        digits[..8].to_string()
    } else {
        String::new()
    }
}
