//! Shared helpers for the `kizmet` integration tests.

#![allow(dead_code)]

use kizmet::{ContentClients, SiteRenderer};
use kizmet_test_utils::{FakeContentSource, SpyRenderCache};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes tracing once for the whole test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt::init();
    });
}

/// A renderer wired to fake published/draft stores and a spy cache.
pub struct Harness {
    pub published: FakeContentSource,
    pub drafts: FakeContentSource,
    pub cache: SpyRenderCache,
    pub renderer: SiteRenderer,
}

impl Harness {
    pub fn new() -> Self {
        let published = FakeContentSource::published();
        let drafts = FakeContentSource::drafts();
        let cache = SpyRenderCache::new();
        let renderer = SiteRenderer::new(
            ContentClients::new(Box::new(published.clone()), Box::new(drafts.clone())),
            Box::new(cache.clone()),
        );
        Self {
            published,
            drafts,
            cache,
            renderer,
        }
    }
}
