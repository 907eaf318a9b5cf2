//! # `kizmet-sanity`: Sanity Content Lake Client
//!
//! An HTTP [`kizmet::ContentSource`] for the Sanity query API, plus the two
//! Sanity-specific security checks the site relies on: webhook signatures and
//! preview URL secrets.

pub mod client;
pub mod preview;
pub mod webhook;

pub use client::{SanityClient, SanityConfig};
pub use preview::{validate_preview, PreviewError, PreviewRequest};
pub use webhook::{encode_signature_header, verify_signature, SignatureError, SIGNATURE_HEADER};
