use thiserror::Error;

/// Errors raised while reading from the content store.
///
/// Page rendering never surfaces these to visitors: the typed fetch helpers in
/// [`crate::source`] log them and fall through to the hardcoded defaults.
#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Failed to fetch from the content store: {0}")]
    Fetch(String),
    #[error("Content store returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Failed to deserialize content store response: {0}")]
    Deserialization(String),
    #[error("Content client is misconfigured: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Deserialization(err.to_string())
    }
}

/// Errors raised by a render cache backend.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Render cache is unavailable: {0}")]
    Unavailable(String),
}
