//! # Render Cache
//!
//! Published page renders are cached by path with a fixed time-to-live. The
//! cache sits behind [`RenderCache`] so the server and tests can swap the
//! backend.

use crate::{errors::CacheError, site::SitePath};
use async_trait::async_trait;
use dyn_clone::DynClone;
use moka::future::Cache;
use std::{fmt::Debug, time::Duration};
use tracing::debug;

/// Default lifetime of a cached render, also advertised in `Cache-Control`.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);
pub const DEFAULT_CAPACITY: u64 = 256;

/// A rendered page body and its entity tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedPage {
    pub html: String,
    pub etag: String,
}

impl CachedPage {
    pub fn new(html: String) -> Self {
        let etag = format!("\"{:x}\"", md5::compute(html.as_bytes()));
        Self { html, etag }
    }
}

#[async_trait]
pub trait RenderCache: Send + Sync + Debug + DynClone {
    async fn get(&self, path: SitePath) -> Option<CachedPage>;

    async fn insert(&self, path: SitePath, page: CachedPage);

    /// Drops the cached render for `path`. Invalidating an absent entry is
    /// not an error, so repeated calls are harmless.
    async fn invalidate(&self, path: SitePath) -> Result<(), CacheError>;
}

dyn_clone::clone_trait_object!(RenderCache);

/// An in-process [`RenderCache`] backed by `moka`.
#[derive(Debug, Clone)]
pub struct MokaRenderCache {
    inner: Cache<SitePath, CachedPage>,
}

impl MokaRenderCache {
    pub fn new(ttl: Duration, capacity: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();
        Self { inner }
    }
}

impl Default for MokaRenderCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl RenderCache for MokaRenderCache {
    async fn get(&self, path: SitePath) -> Option<CachedPage> {
        let hit = self.inner.get(&path).await;
        debug!(path = %path, hit = hit.is_some(), "Render cache lookup.");
        hit
    }

    async fn insert(&self, path: SitePath, page: CachedPage) {
        self.inner.insert(path, page).await;
    }

    async fn invalidate(&self, path: SitePath) -> Result<(), CacheError> {
        self.inner.invalidate(&path).await;
        Ok(())
    }
}
