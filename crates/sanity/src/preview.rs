//! # Preview URL Secrets
//!
//! The studio opens previews at
//! `/api/draft/enable?sanity-preview-secret=..&sanity-preview-pathname=..`.
//! The secret is a short-lived `sanity.previewUrlSecret` document that only a
//! token-bearing client can read.

use kizmet::{
    documents::DocumentType,
    errors::ContentError,
    query::Query,
    source::{ContentSource, Perspective},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

pub const SECRET_PARAM: &str = "sanity-preview-secret";
pub const PATHNAME_PARAM: &str = "sanity-preview-pathname";
pub const SECRET_DOCUMENT_TYPE: &str = "sanity.previewUrlSecret";
/// Secrets expire one hour after their last update.
pub const SECRET_TTL_SECS: u64 = 3600;

#[derive(Error, Debug, Clone)]
pub enum PreviewError {
    #[error("Missing preview secret")]
    MissingSecret,
    #[error("Invalid secret")]
    InvalidSecret,
    #[error("Preview secrets must be read with the token-bearing drafts client")]
    WrongPerspective,
    #[error("Failed to look up preview secret: {0}")]
    Lookup(#[from] ContentError),
}

/// The preview parameters of an enable request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PreviewRequest {
    #[serde(rename = "sanity-preview-secret")]
    pub secret: Option<String>,
    #[serde(rename = "sanity-preview-pathname")]
    pub pathname: Option<String>,
}

impl PreviewRequest {
    pub fn from_url(url: &Url) -> Self {
        let mut request = Self::default();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                SECRET_PARAM => request.secret = Some(value.into_owned()),
                PATHNAME_PARAM => request.pathname = Some(value.into_owned()),
                _ => {}
            }
        }
        request
    }

    /// The post-enable redirect target. Only same-site absolute paths that fit
    /// in a header are honored; anything else becomes `/`.
    pub fn redirect_to(&self) -> String {
        match self.pathname.as_deref() {
            Some(path)
                if path.starts_with('/')
                    && !path.starts_with("//")
                    && !path.starts_with("/\\")
                    && !path.chars().any(char::is_control) =>
            {
                path.to_string()
            }
            _ => "/".to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct PreviewSecret {
    #[serde(rename = "_id")]
    id: String,
}

/// The lookup for a live secret document.
pub fn secret_query(secret: &str) -> Query {
    Query::first(DocumentType::Other(SECRET_DOCUMENT_TYPE.to_string()))
        .filter(format!(
            "secret == $secret && dateTime(_updatedAt) > dateTime(now()) - {SECRET_TTL_SECS}"
        ))
        .param("secret", secret)
        .project("_id, _updatedAt, secret")
}

/// Validates a preview request and returns the path to redirect to.
pub async fn validate_preview(
    source: &dyn ContentSource,
    request: &PreviewRequest,
) -> Result<String, PreviewError> {
    if source.perspective() != Perspective::Drafts {
        return Err(PreviewError::WrongPerspective);
    }

    let secret = request
        .secret
        .as_deref()
        .filter(|secret| !secret.trim().is_empty())
        .ok_or(PreviewError::MissingSecret)?;

    let result = source.fetch(&secret_query(secret)).await?;
    match serde_json::from_value::<Option<PreviewSecret>>(result) {
        Ok(Some(document)) => {
            info!(secret_id = %document.id, "Preview secret accepted.");
            Ok(request.redirect_to())
        }
        Ok(None) => {
            warn!("Rejected preview request with an unknown or expired secret.");
            Err(PreviewError::InvalidSecret)
        }
        Err(e) => {
            warn!("Preview secret lookup returned an unexpected document: {e}");
            Err(PreviewError::InvalidSecret)
        }
    }
}
