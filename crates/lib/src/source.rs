//! # Content Sources
//!
//! The [`ContentSource`] trait is the seam between the site and the content
//! store. Two sources exist per deployment, one per [`Perspective`], and the
//! per-request [`RequestContext`] picks between them.

use crate::{
    documents::{sort_by_order, Ordered},
    errors::ContentError,
    query::Query,
};
use async_trait::async_trait;
use dyn_clone::DynClone;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Debug;
use tracing::{debug, warn};

/// Which revision of the content a source reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Perspective {
    /// Finalized documents only. May be served from an edge cache.
    Published,
    /// Includes unpublished edits. Never cached, requires a token.
    Drafts,
}

impl Perspective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Perspective::Published => "published",
            Perspective::Drafts => "drafts",
        }
    }
}

/// A read-only client for the content store.
#[async_trait]
pub trait ContentSource: Send + Sync + Debug + DynClone {
    /// The perspective this source reads from.
    fn perspective(&self) -> Perspective;

    /// Executes a query and returns the raw result: an array for
    /// [`crate::query::Selector::All`], an object or `null` for
    /// [`crate::query::Selector::First`].
    async fn fetch(&self, query: &Query) -> Result<Value, ContentError>;
}

dyn_clone::clone_trait_object!(ContentSource);

/// Per-request rendering context.
///
/// Draft mode is decided once per request (from the signed preview session)
/// and passed down explicitly instead of being read from ambient state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub draft_mode: bool,
}

impl RequestContext {
    pub fn published() -> Self {
        Self { draft_mode: false }
    }

    pub fn draft() -> Self {
        Self { draft_mode: true }
    }
}

/// The published and draft sources of one deployment.
#[derive(Debug, Clone)]
pub struct ContentClients {
    published: Box<dyn ContentSource>,
    draft: Box<dyn ContentSource>,
}

impl ContentClients {
    pub fn new(published: Box<dyn ContentSource>, draft: Box<dyn ContentSource>) -> Self {
        Self { published, draft }
    }

    /// Selects the source for a request. This is a binary switch: every query
    /// of a draft request goes to the draft source.
    pub fn for_request(&self, ctx: &RequestContext) -> &dyn ContentSource {
        if ctx.draft_mode {
            self.draft.as_ref()
        } else {
            self.published.as_ref()
        }
    }

    pub fn published(&self) -> &dyn ContentSource {
        self.published.as_ref()
    }

    pub fn draft(&self) -> &dyn ContentSource {
        self.draft.as_ref()
    }
}

/// Fetches a single document. Fetch failures, `null` results and documents
/// that fail to deserialize all resolve to `None`.
pub async fn fetch_document<T: DeserializeOwned>(
    source: &dyn ContentSource,
    query: &Query,
) -> Option<T> {
    let document_type = query.document_type.as_str();
    match source.fetch(query).await {
        Ok(Value::Null) => {
            debug!(document_type = %document_type, "No document found; using defaults.");
            None
        }
        Ok(value) => match serde_json::from_value(value) {
            Ok(document) => Some(document),
            Err(e) => {
                warn!(document_type = %document_type, "Failed to deserialize document, using defaults: {e}");
                None
            }
        },
        Err(e) => {
            warn!(document_type = %document_type, "Content fetch failed, using defaults: {e}");
            None
        }
    }
}

/// Fetches a collection sorted by display order. Failures resolve to an
/// empty list; items that fail to deserialize are skipped.
pub async fn fetch_collection<T: DeserializeOwned + Ordered>(
    source: &dyn ContentSource,
    query: &Query,
) -> Vec<T> {
    let document_type = query.document_type.as_str();
    let items = match source.fetch(query).await {
        Ok(Value::Array(items)) => items,
        Ok(Value::Null) => Vec::new(),
        Ok(other) => {
            warn!(document_type = %document_type, "Expected an array result, got: {other}");
            Vec::new()
        }
        Err(e) => {
            warn!(document_type = %document_type, "Content fetch failed, using defaults: {e}");
            Vec::new()
        }
    };

    let mut documents: Vec<T> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(document) => Some(document),
            Err(e) => {
                warn!(document_type = %document_type, "Skipping malformed document: {e}");
                None
            }
        })
        .collect();
    sort_by_order(&mut documents);
    documents
}
