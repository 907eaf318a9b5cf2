//! # Application State
//!
//! The shared state handed to every handler: the site renderer (content
//! clients plus render cache), the webhook secret, the key that signs the
//! draft-mode cookie and the icon renderer.

use crate::config::AppConfig;
use anyhow::Context;
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use kizmet::{
    cache::{MokaRenderCache, RenderCache},
    source::{ContentClients, ContentSource},
    SiteRenderer,
};
use kizmet_icon::IconRenderer;
use kizmet_sanity::SanityClient;
use std::{sync::Arc, time::Duration};
use tracing::{info, warn};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub renderer: Arc<SiteRenderer>,
    /// Whether the draft client can read drafts. Without a token it is the
    /// published client standing in, and draft mode cannot be enabled.
    pub drafts_enabled: bool,
    pub cookie_key: Key,
    pub icons: IconRenderer,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

impl AppState {
    /// Assembles state from already-built parts.
    pub fn new(
        config: AppConfig,
        clients: ContentClients,
        cache: Box<dyn RenderCache>,
        drafts_enabled: bool,
    ) -> anyhow::Result<Self> {
        let cookie_key = cookie_key(config.preview_cookie_secret.as_deref())?;
        let icons = IconRenderer::new(reqwest::Client::new(), config.icon_font_url.clone());
        Ok(Self {
            renderer: Arc::new(SiteRenderer::new(clients, cache)),
            config: Arc::new(config),
            drafts_enabled,
            cookie_key,
            icons,
        })
    }

    pub fn revalidate_secret(&self) -> Option<&str> {
        self.config.revalidate_secret.as_deref()
    }
}

/// The draft-cookie signing key. A random key is generated when none is
/// configured, which invalidates draft sessions on every restart.
fn cookie_key(secret: Option<&str>) -> anyhow::Result<Key> {
    match secret {
        Some(secret) => Key::try_from(secret.as_bytes())
            .context("preview_cookie_secret must be at least 64 bytes"),
        None => {
            warn!("No preview_cookie_secret configured; generating a random cookie key.");
            Ok(Key::generate())
        }
    }
}

/// Builds the shared application state from the configuration.
///
/// - The published client uses the API CDN when configured.
/// - The draft client needs a read token. Without one, draft mode is disabled
///   and the published client serves both perspectives.
/// - Published renders are cached in memory for `revalidate_ttl_secs`.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let sanity = config.sanity.client_config();
    let published: Box<dyn ContentSource> = Box::new(
        SanityClient::published(&sanity).context("Failed to build the published Sanity client")?,
    );

    let (draft, drafts_enabled): (Box<dyn ContentSource>, bool) = if sanity.token.is_some() {
        let client =
            SanityClient::drafts(&sanity).context("Failed to build the draft Sanity client")?;
        (Box::new(client), true)
    } else {
        warn!("No Sanity read token configured; draft mode is disabled.");
        (published.clone(), false)
    };

    let cache = MokaRenderCache::new(
        Duration::from_secs(config.revalidate_ttl_secs),
        config.cache_capacity,
    );
    info!(
        project_id = %sanity.project_id,
        dataset = %sanity.dataset,
        ttl_secs = config.revalidate_ttl_secs,
        "Initialized content clients and render cache."
    );

    AppState::new(
        config,
        ContentClients::new(published, draft),
        Box::new(cache),
        drafts_enabled,
    )
}
