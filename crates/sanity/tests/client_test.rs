//! # Sanity Client Tests
//!
//! Exercises the HTTP client against a `wiremock` server standing in for the
//! Sanity query API.

use kizmet::{
    documents::{DocumentType, SiteSettings},
    errors::ContentError,
    query::Query,
    source::{fetch_document, ContentSource, Perspective},
};
use kizmet_sanity::{SanityClient, SanityConfig};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn config_for(server: &MockServer, token: Option<&str>) -> SanityConfig {
    SanityConfig {
        project_id: "testproj".into(),
        api_host_override: Some(server.uri()),
        token: token.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn test_endpoint_hosts() {
    let config = SanityConfig {
        project_id: "abc123".into(),
        ..Default::default()
    };

    let published = SanityClient::published(&config).unwrap();
    assert_eq!(
        published.endpoint().as_str(),
        "https://abc123.apicdn.sanity.io/v2024-01-01/data/query/production"
    );

    let drafts = SanityClient::drafts(&SanityConfig {
        token: Some("secret-token".into()),
        ..config.clone()
    })
    .unwrap();
    assert_eq!(
        drafts.endpoint().as_str(),
        "https://abc123.api.sanity.io/v2024-01-01/data/query/production"
    );
}

#[test]
fn test_drafts_client_requires_token() {
    let config = SanityConfig {
        project_id: "abc123".into(),
        ..Default::default()
    };
    let err = SanityClient::drafts(&config).unwrap_err();
    assert!(matches!(err, ContentError::Config(_)));
}

#[tokio::test]
async fn test_published_fetch_sends_query_and_perspective() {
    // --- 1. Arrange ---
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2024-01-01/data/query/production"))
        .and(query_param("perspective", "published"))
        .and(query_param("query", Query::site_settings().to_groq()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "...",
            "result": { "brandName": "Kizmet", "tagline": null },
            "ms": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SanityClient::published(&config_for(&server, None)).unwrap();

    // --- 2. Act ---
    let settings: Option<SiteSettings> = fetch_document(&client, &Query::site_settings()).await;

    // --- 3. Assert ---
    let settings = settings.expect("document should deserialize");
    assert_eq!(settings.brand_name.as_deref(), Some("Kizmet"));
    assert_eq!(settings.tagline, None);
}

#[tokio::test]
async fn test_drafts_fetch_sends_bearer_token_and_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("perspective", "drafts"))
        .and(query_param("$secret", "\"abc\""))
        .and(header("authorization", "Bearer read-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": null })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SanityClient::drafts(&config_for(&server, Some("read-token"))).unwrap();
    assert_eq!(client.perspective(), Perspective::Drafts);

    let query = Query::first(DocumentType::Other("sanity.previewUrlSecret".into()))
        .filter("secret == $secret")
        .param("secret", "abc");
    let result = client.fetch(&query).await.unwrap();
    assert!(result.is_null());
}

#[tokio::test]
async fn test_api_errors_are_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let client = SanityClient::published(&config_for(&server, None)).unwrap();
    let err = client.fetch(&Query::all_services()).await.unwrap_err();
    match err {
        ContentError::Api { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "forbidden");
        }
        other => panic!("Expected an API error, got {other:?}"),
    }

    // The typed helper swallows the failure and yields an empty collection.
    let services: Vec<kizmet::documents::Service> =
        kizmet::source::fetch_collection(&client, &Query::all_services()).await;
    assert!(services.is_empty());
}
