//! # Revalidation Webhook
//!
//! `POST /api/revalidate` receives signed content-change notifications and
//! drops the affected pages from the render cache.

use super::{AppError, AppState};
use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use chrono::Utc;
use kizmet::DocumentType;
use kizmet_sanity::{verify_signature, SIGNATURE_HEADER};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A document slug, as sent by the webhook projection.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Slug {
    pub current: Option<String>,
}

/// The webhook payload. Older webhook projections send `_type`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WebhookPayload {
    #[serde(rename = "documentType", alias = "_type", default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub slug: Option<Slug>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct RevalidateResponse {
    pub revalidated: bool,
    pub paths: Vec<String>,
    /// Unix time in milliseconds.
    pub now: i64,
}

pub async fn revalidate_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<RevalidateResponse>, AppError> {
    let secret = app_state
        .revalidate_secret()
        .ok_or(AppError::NotConfigured("a revalidate secret"))?;

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());
    verify_signature(secret, signature, &body)?;

    let payload: WebhookPayload = serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest("Invalid webhook body"))?;
    let document_type: DocumentType = payload
        .document_type
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(AppError::BadRequest("No document type provided"))?
        .parse()
        .unwrap_or_else(|never| match never {});

    info!(
        document_type = %document_type,
        slug = ?payload.slug.as_ref().and_then(|slug| slug.current.as_deref()),
        "Received revalidation webhook."
    );
    let paths = kizmet::revalidate(app_state.renderer.cache(), &document_type).await?;

    Ok(Json(RevalidateResponse {
        revalidated: true,
        paths: paths.into_iter().map(str::to_string).collect(),
        now: Utc::now().timestamp_millis(),
    }))
}
