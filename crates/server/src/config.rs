//! # Application Configuration
//!
//! Defines the configuration of the `kizmet-server` and loads it in layers:
//! programmatic defaults, an optional `config.yml` (with `${VAR}` substitution),
//! plain environment variables, then `KIZMET_`-prefixed overrides.

use config::{
    builder::DefaultState, Config as ConfigBuilder, ConfigBuilder as Builder, Environment, File,
    FileFormat,
};
use kizmet::cache::{DEFAULT_CAPACITY, DEFAULT_TTL};
use kizmet_icon::DEFAULT_FONT_URL;
use kizmet_sanity::SanityConfig;
use regex::Regex;
use serde::Deserialize;
use std::{env, fs, path::Path, sync::LazyLock};
use thiserror::Error;
use tracing::info;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}").expect("env var pattern is valid")
});

/// A custom error type for configuration issues.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    #[error("Configuration error: {0}")]
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    #[error("{0}")]
    NotFound(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// Connection settings for the Sanity Content Lake.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SanitySettings {
    #[serde(default)]
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    /// Read token for draft content and preview secrets.
    #[serde(default)]
    pub token: Option<String>,
    /// Points the clients at another origin, e.g. a local mock.
    #[serde(default)]
    pub api_host_override: Option<String>,
}

impl SanitySettings {
    pub fn client_config(&self) -> SanityConfig {
        SanityConfig {
            project_id: self.project_id.clone(),
            dataset: self.dataset.clone(),
            api_version: self.api_version.clone(),
            use_cdn: self.use_cdn,
            token: self.token.clone(),
            api_host_override: self.api_host_override.clone(),
        }
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    pub port: u16,
    pub sanity: SanitySettings,
    /// Shared secret for webhook signatures. The webhook answers 500 without it.
    #[serde(default)]
    pub revalidate_secret: Option<String>,
    /// Signing key material for the draft-mode cookie (at least 64 bytes).
    #[serde(default)]
    pub preview_cookie_secret: Option<String>,
    /// How long a published render stays cached.
    pub revalidate_ttl_secs: u64,
    pub cache_capacity: u64,
    /// Where the wordmark font is fetched from.
    pub icon_font_url: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("project_id", &self.sanity.project_id)
            .field("dataset", &self.sanity.dataset)
            .field("api_version", &self.sanity.api_version)
            .field("use_cdn", &self.sanity.use_cdn)
            .field("token", &redacted(&self.sanity.token))
            .field("api_host_override", &self.sanity.api_host_override)
            .field("revalidate_secret", &redacted(&self.revalidate_secret))
            .field("preview_cookie_secret", &redacted(&self.preview_cookie_secret))
            .field("revalidate_ttl_secs", &self.revalidate_ttl_secs)
            .field("cache_capacity", &self.cache_capacity)
            .field("icon_font_url", &self.icon_font_url)
            .finish()
    }
}

/// Layer 1: programmatic defaults.
fn with_defaults(builder: Builder<DefaultState>) -> Result<Builder<DefaultState>, ConfigError> {
    let sanity = SanityConfig::default();
    Ok(builder
        .set_default("port", 3000)?
        .set_default("sanity.dataset", sanity.dataset)?
        .set_default("sanity.api_version", sanity.api_version)?
        .set_default("sanity.use_cdn", sanity.use_cdn)?
        .set_default("revalidate_ttl_secs", DEFAULT_TTL.as_secs() as i64)?
        .set_default("cache_capacity", DEFAULT_CAPACITY as i64)?
        .set_default("icon_font_url", DEFAULT_FONT_URL)?)
}

/// Replaces `${VAR}` references with the variable's value, or nothing.
pub fn substitute_env_vars(content: &str) -> String {
    ENV_VAR_PATTERN
        .replace_all(content, |caps: &regex::Captures| {
            env::var(&caps["var"]).unwrap_or_default()
        })
        .into_owned()
}

// Returns Ok(None) if the file does not exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;
    Ok(Some(substitute_env_vars(&content)))
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Loads the application configuration.
///
/// - With `config_path_override`, that file must exist.
/// - Otherwise `config.yml` next to the crate manifest is used when present.
/// - Top-level keys like `port` are overridden by `PORT`.
/// - Nested keys are overridden by `KIZMET_...` variables
///   (e.g. `KIZMET_SANITY__PROJECT_ID`).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = with_defaults(ConfigBuilder::builder())?;

    // Layer 2: the config file.
    let content = match config_path_override {
        Some(path) => Some(read_and_substitute(path)?.ok_or_else(|| {
            ConfigError::NotFound(format!("Config file not found at '{path}'."))
        })?),
        None => {
            let default_path = format!("{}/config.yml", env!("CARGO_MANIFEST_DIR"));
            let content = read_and_substitute(&default_path)?;
            if content.is_some() {
                info!("Loading configuration from '{default_path}'.");
            }
            content
        }
    };
    if let Some(content) = content {
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder
        // Layer 3: top-level keys like PORT.
        .add_source(Environment::default())
        // Layer 4: prefixed variables for nested overrides.
        .add_source(
            Environment::with_prefix("KIZMET")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // Unset `${VAR}` references substitute to empty strings.
    config.sanity.token = blank_to_none(config.sanity.token);
    config.sanity.api_host_override = blank_to_none(config.sanity.api_host_override);
    config.revalidate_secret = blank_to_none(config.revalidate_secret);
    config.preview_cookie_secret = blank_to_none(config.preview_cookie_secret);

    Ok(config)
}
