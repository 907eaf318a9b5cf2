//! # Common Test Utilities
//!
//! Test harnesses shared by the `kizmet-server` integration tests:
//!
//! - `TestApp::spawn`: the full server, configured from a temporary YAML file
//!   with the Sanity API pointed at an `httpmock::MockServer`.
//! - `TestApp::spawn_with_fakes`: the server wired to in-memory content
//!   sources and a spy render cache, for precise assertions on content and
//!   cache behavior.

// Not every test binary uses every helper.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use chrono::Utc;
use httpmock::MockServer;
use kizmet::ContentClients;
use kizmet_sanity::encode_signature_header;
use kizmet_server::{
    config::{self, AppConfig},
    router,
    state::{build_app_state, AppState},
};
use kizmet_test_utils::{FakeContentSource, SpyRenderCache};
use reqwest::{redirect::Policy, Client};
use std::{fs::File, io::Write, net::SocketAddr};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

pub const REVALIDATE_SECRET: &str = "test-revalidate-secret";
pub const SANITY_TOKEN: &str = "test-read-token";
pub const COOKIE_SECRET: &str =
    "test-cookie-secret-test-cookie-secret-test-cookie-secret-test-cookie-secret";
/// The query endpoint path the Sanity client calls on the mock server.
pub const QUERY_PATH: &str = "/v2024-01-01/data/query/production";

/// Writes a config file for a server whose external services live on
/// `mock_server`, then loads it through the normal config path.
pub fn test_config(mock_server: &MockServer, token: Option<&str>) -> Result<(AppConfig, TempDir)> {
    let config_dir = tempdir()?;
    let config_path = config_dir.path().join("config.yml");
    let token_line = token
        .map(|token| format!("  token: \"{token}\"\n"))
        .unwrap_or_default();
    let config_content = format!(
        r#"
port: 0
sanity:
  project_id: "test-project"
  use_cdn: false
  api_host_override: "{}"
{token_line}revalidate_secret: "{REVALIDATE_SECRET}"
preview_cookie_secret: "{COOKIE_SECRET}"
icon_font_url: "{}"
"#,
        mock_server.base_url(),
        mock_server.url("/fonts/fraunces.ttf"),
    );
    let mut file = File::create(&config_path)?;
    file.write_all(config_content.as_bytes())?;

    let config = config::get_config(config_path.to_str())?;
    Ok((config, config_dir))
}

/// The in-memory stores behind a `spawn_with_fakes` server.
pub struct FakeStore {
    pub published: FakeContentSource,
    pub drafts: FakeContentSource,
    pub cache: SpyRenderCache,
}

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    /// Does not follow redirects, so tests can inspect them.
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server against a mock Sanity API with a read token.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_token(Some(SANITY_TOKEN)).await
    }

    pub async fn spawn_with_token(token: Option<&str>) -> Result<Self> {
        let mock_server = MockServer::start_async().await;
        let (config, config_dir) = test_config(&mock_server, token)?;
        let app_state = build_app_state(config)?;
        Self::spawn_with_state(app_state, mock_server, config_dir).await
    }

    /// Spawns the server against in-memory content sources and a spy cache.
    pub async fn spawn_with_fakes() -> Result<(Self, FakeStore)> {
        Self::spawn_with_fakes_and(|_| {}).await
    }

    /// Like `spawn_with_fakes`, with a chance to adjust the loaded config.
    pub async fn spawn_with_fakes_and(
        configure: impl FnOnce(&mut AppConfig),
    ) -> Result<(Self, FakeStore)> {
        let mock_server = MockServer::start_async().await;
        let (mut config, config_dir) = test_config(&mock_server, Some(SANITY_TOKEN))?;
        configure(&mut config);
        let store = FakeStore {
            published: FakeContentSource::published(),
            drafts: FakeContentSource::drafts(),
            cache: SpyRenderCache::new(),
        };
        let clients = ContentClients::new(
            Box::new(store.published.clone()),
            Box::new(store.drafts.clone()),
        );
        let app_state = AppState::new(config, clients, Box::new(store.cache.clone()), true)?;
        let app = Self::spawn_with_state(app_state, mock_server, config_dir).await?;
        Ok((app, store))
    }

    async fn spawn_with_state(
        app_state: AppState,
        mock_server: MockServer,
        config_dir: TempDir,
    ) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let app = router::create_router(app_state.clone());
        let server_handle = tokio::spawn(async move {
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::builder().redirect(Policy::none()).build()?,
            mock_server,
            app_state,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.address)
    }

    /// Posts a webhook body signed with the configured secret.
    pub async fn post_webhook(&self, body: &str) -> Result<reqwest::Response> {
        let header = encode_signature_header(
            REVALIDATE_SECRET,
            Utc::now().timestamp_millis(),
            body.as_bytes(),
        )?;
        Ok(self
            .client
            .post(self.url("/api/revalidate"))
            .header("sanity-webhook-signature", header)
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// The `name=value` pair of a `Set-Cookie` header, ready for a `Cookie` header.
pub fn cookie_pair(response: &reqwest::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with(&format!("{name}=")))
        .map(str::to_string)
}
