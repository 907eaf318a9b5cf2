//! # Webhook Signatures
//!
//! Sanity signs webhook deliveries with
//! `sanity-webhook-signature: t=<unix-ms>,v1=<sig>`, where `sig` is the
//! unpadded URL-safe base64 of `HMAC-SHA256(secret, "<t>.<body>")`.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "sanity-webhook-signature";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Missing signature header")]
    Missing,
    #[error("Malformed signature header: {0}")]
    Malformed(String),
    #[error("Signature does not match the payload")]
    Mismatch,
    #[error("Webhook secret is empty")]
    EmptySecret,
}

fn mac_for(secret: &str, timestamp: i64, body: &[u8]) -> Result<HmacSha256, SignatureError> {
    if secret.is_empty() {
        return Err(SignatureError::EmptySecret);
    }
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| SignatureError::EmptySecret)?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(body);
    Ok(mac)
}

/// Builds the header value Sanity would send for `body` at `timestamp`.
pub fn encode_signature_header(
    secret: &str,
    timestamp: i64,
    body: &[u8],
) -> Result<String, SignatureError> {
    let signature = mac_for(secret, timestamp, body)?.finalize().into_bytes();
    Ok(format!(
        "t={timestamp},v1={}",
        URL_SAFE_NO_PAD.encode(signature)
    ))
}

struct ParsedHeader {
    timestamp: i64,
    signature: Vec<u8>,
}

fn parse_header(header: &str) -> Result<ParsedHeader, SignatureError> {
    let mut timestamp = None;
    let mut signature = None;
    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => {
                timestamp = Some(value.parse::<i64>().map_err(|_| {
                    SignatureError::Malformed(format!("invalid timestamp '{value}'"))
                })?);
            }
            Some(("v1", value)) => {
                let decoded = URL_SAFE_NO_PAD
                    .decode(value.trim_end_matches('='))
                    .map_err(|e| SignatureError::Malformed(format!("invalid signature: {e}")))?;
                signature = Some(decoded);
            }
            _ => {}
        }
    }

    match (timestamp, signature) {
        (Some(timestamp), Some(signature)) => Ok(ParsedHeader {
            timestamp,
            signature,
        }),
        (None, _) => Err(SignatureError::Malformed("missing timestamp".into())),
        (_, None) => Err(SignatureError::Malformed("missing v1 signature".into())),
    }
}

/// Verifies a delivery. The comparison is constant-time.
pub fn verify_signature(
    secret: &str,
    header: Option<&str>,
    body: &[u8],
) -> Result<(), SignatureError> {
    let header = header
        .filter(|header| !header.trim().is_empty())
        .ok_or(SignatureError::Missing)?;
    let parsed = parse_header(header)?;
    mac_for(secret, parsed.timestamp, body)?
        .verify_slice(&parsed.signature)
        .map_err(|_| SignatureError::Mismatch)
}
