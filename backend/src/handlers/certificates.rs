use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppError,
    models::{CertificateOutput, CertificatesResponse},
    state::AppState,
};

/// List every usable signing certificate, grouped into electronic ID
/// cards and ordinary certificates.
pub async fn get_certificates(
    State(state): State<AppState>,
) -> Result<Json<CertificatesResponse>, AppError> {
    let response = state.certificates.grouped().await?;
    Ok(Json(response))
}

pub async fn get_certificate_by_thumbprint(
    State(state): State<AppState>,
    Path(thumbprint): Path<String>,
) -> Result<Json<CertificateOutput>, AppError> {
    let output = state.certificates.find_by_thumbprint(&thumbprint).await?;
    Ok(Json(output))
}
