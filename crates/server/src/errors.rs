use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kizmet::CacheError;
use kizmet_icon::IconError;
use kizmet_sanity::{PreviewError, SignatureError};
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// Each variant maps to an HTTP status and a JSON `{"message": ...}` body.
#[derive(Debug)]
pub enum AppError {
    /// The webhook signature was missing or did not verify.
    Signature(SignatureError),
    /// The request was well-formed HTTP but not a usable payload.
    BadRequest(&'static str),
    /// A secret the endpoint depends on is not configured.
    NotConfigured(&'static str),
    Cache(CacheError),
    Preview(PreviewError),
    Icon(IconError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<SignatureError> for AppError {
    fn from(err: SignatureError) -> Self {
        AppError::Signature(err)
    }
}

impl From<CacheError> for AppError {
    fn from(err: CacheError) -> Self {
        AppError::Cache(err)
    }
}

impl From<PreviewError> for AppError {
    fn from(err: PreviewError) -> Self {
        AppError::Preview(err)
    }
}

impl From<IconError> for AppError {
    fn from(err: IconError) -> Self {
        AppError::Icon(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::Signature(err) => {
                warn!("Rejected webhook delivery: {err}");
                (StatusCode::UNAUTHORIZED, "Invalid signature".to_string())
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            AppError::NotConfigured(what) => {
                error!("Request needs {what}, which is not configured.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Server is missing {what}."),
                )
            }
            AppError::Cache(err) => {
                error!("Revalidation failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error revalidating".to_string(),
                )
            }
            AppError::Preview(err) => match err {
                PreviewError::MissingSecret | PreviewError::InvalidSecret => {
                    (StatusCode::UNAUTHORIZED, "Invalid secret".to_string())
                }
                PreviewError::WrongPerspective => {
                    error!("Draft mode requested but no draft client is configured.");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Draft mode is not configured.".to_string(),
                    )
                }
                PreviewError::Lookup(e) => {
                    error!("Preview secret lookup failed: {e}");
                    (
                        StatusCode::BAD_GATEWAY,
                        "Failed to validate preview secret.".to_string(),
                    )
                }
            },
            AppError::Icon(err) => {
                error!("Icon rendering failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render icon.".to_string(),
                )
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        (status_code, Json(json!({ "message": message }))).into_response()
    }
}
