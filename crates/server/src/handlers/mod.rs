//! # Route Handlers
//!
//! The Axum handlers for the `kizmet-server`, split by concern: site pages,
//! the revalidation webhook, the draft-mode session and the generated icons.

pub mod draft;
pub mod general;
pub mod icons;
pub mod pages;
pub mod revalidate;

pub use draft::*;
pub use general::*;
pub use icons::*;
pub use pages::*;
pub use revalidate::*;

// Shared items used by multiple handler modules.
use super::{errors::AppError, state::AppState};

/// Name of the signed cookie that carries a draft-mode session.
pub const DRAFT_COOKIE: &str = "__kizmet_draft";
