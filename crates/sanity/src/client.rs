use async_trait::async_trait;
use kizmet::{
    errors::ContentError,
    query::Query,
    source::{ContentSource, Perspective},
};
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings shared by the published and draft clients.
#[derive(Debug, Clone, PartialEq)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    /// Dated API version, e.g. `2024-01-01`.
    pub api_version: String,
    /// Whether published reads may go through the API CDN.
    pub use_cdn: bool,
    /// Read token. Required for draft reads.
    pub token: Option<String>,
    /// Replaces the `https://<project>.api(cdn).sanity.io` origin. Used to
    /// point the client at a local mock.
    pub api_host_override: Option<String>,
}

impl Default for SanityConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            use_cdn: true,
            token: None,
            api_host_override: None,
        }
    }
}

impl SanityConfig {
    fn origin(&self, cdn: bool) -> String {
        match &self.api_host_override {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => {
                let host = if cdn { "apicdn" } else { "api" };
                format!("https://{}.{host}.sanity.io", self.project_id)
            }
        }
    }

    /// The query endpoint, e.g.
    /// `https://abc.api.sanity.io/v2024-01-01/data/query/production`.
    pub fn query_url(&self, cdn: bool) -> Result<Url, ContentError> {
        let version = self.api_version.trim_start_matches('v');
        let raw = format!(
            "{}/v{version}/data/query/{}",
            self.origin(cdn),
            self.dataset
        );
        Url::parse(&raw).map_err(|e| ContentError::Config(format!("Invalid query URL '{raw}': {e}")))
    }
}

#[derive(Deserialize, Debug)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
}

/// A read-only client for one perspective of a Sanity dataset.
#[derive(Clone, Debug)]
pub struct SanityClient {
    http: ReqwestClient,
    endpoint: Url,
    token: Option<String>,
    perspective: Perspective,
}

impl SanityClient {
    /// Creates a client. Draft clients bypass the CDN and must have a token.
    pub fn new(config: &SanityConfig, perspective: Perspective) -> Result<Self, ContentError> {
        if config.project_id.trim().is_empty() && config.api_host_override.is_none() {
            return Err(ContentError::Config("Sanity project id is not set".into()));
        }

        let token = config
            .token
            .clone()
            .filter(|token| !token.trim().is_empty());
        let use_cdn = match perspective {
            Perspective::Published => config.use_cdn,
            Perspective::Drafts => {
                if token.is_none() {
                    return Err(ContentError::Config(
                        "A read token is required for the drafts perspective".into(),
                    ));
                }
                false
            }
        };

        let http = ReqwestClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ContentError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.query_url(use_cdn)?,
            token,
            perspective,
        })
    }

    pub fn published(config: &SanityConfig) -> Result<Self, ContentError> {
        Self::new(config, Perspective::Published)
    }

    pub fn drafts(config: &SanityConfig) -> Result<Self, ContentError> {
        Self::new(config, Perspective::Drafts)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The full request URL for a query, parameters included.
    pub fn request_url(&self, query: &Query) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", &query.to_groq());
            pairs.append_pair("perspective", self.perspective.as_str());
            for (name, value) in &query.params {
                pairs.append_pair(&format!("${name}"), &value.to_string());
            }
        }
        url
    }
}

#[async_trait]
impl ContentSource for SanityClient {
    fn perspective(&self) -> Perspective {
        self.perspective
    }

    async fn fetch(&self, query: &Query) -> Result<Value, ContentError> {
        let url = self.request_url(query);
        debug!(perspective = self.perspective.as_str(), document_type = %query.document_type, "Querying Sanity.");

        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ContentError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| ContentError::Deserialization(e.to_string()))?;
        Ok(body.result)
    }
}
