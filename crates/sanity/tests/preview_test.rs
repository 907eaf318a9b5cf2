//! # Preview Secret Tests

use kizmet::documents::DocumentType;
use kizmet_sanity::{
    preview::{secret_query, SECRET_DOCUMENT_TYPE},
    validate_preview, PreviewError, PreviewRequest,
};
use kizmet_test_utils::FakeContentSource;
use serde_json::json;
use url::Url;

fn request(secret: Option<&str>, pathname: Option<&str>) -> PreviewRequest {
    PreviewRequest {
        secret: secret.map(str::to_string),
        pathname: pathname.map(str::to_string),
    }
}

fn store_with_secret() -> FakeContentSource {
    let drafts = FakeContentSource::drafts();
    drafts.set(
        DocumentType::Other(SECRET_DOCUMENT_TYPE.into()),
        json!({ "_id": "secret-1", "_updatedAt": "2026-01-01T00:00:00Z", "secret": "s3cret" }),
    );
    drafts
}

#[tokio::test]
async fn test_valid_secret_redirects_to_pathname() {
    let drafts = store_with_secret();
    let redirect = validate_preview(&drafts, &request(Some("s3cret"), Some("/services")))
        .await
        .unwrap();
    assert_eq!(redirect, "/services");

    let call = &drafts.get_calls()[0];
    assert!(call.groq.contains("sanity.previewUrlSecret"));
    assert!(call.groq.contains("- 3600"));
}

#[tokio::test]
async fn test_unknown_secret_is_rejected() {
    let drafts = FakeContentSource::drafts();
    let err = validate_preview(&drafts, &request(Some("nope"), Some("/")))
        .await
        .unwrap_err();
    assert!(matches!(err, PreviewError::InvalidSecret));

    let err = validate_preview(&drafts, &request(None, Some("/")))
        .await
        .unwrap_err();
    assert!(matches!(err, PreviewError::MissingSecret));
}

#[tokio::test]
async fn test_published_client_cannot_validate() {
    let published = FakeContentSource::published();
    let err = validate_preview(&published, &request(Some("s3cret"), None))
        .await
        .unwrap_err();
    assert!(matches!(err, PreviewError::WrongPerspective));
}

#[tokio::test]
async fn test_lookup_failure_is_an_error() {
    let drafts = FakeContentSource::drafts();
    drafts.fail(DocumentType::Other(SECRET_DOCUMENT_TYPE.into()));
    let err = validate_preview(&drafts, &request(Some("s3cret"), None))
        .await
        .unwrap_err();
    assert!(matches!(err, PreviewError::Lookup(_)));
}

#[test]
fn test_redirect_only_to_local_paths() {
    assert_eq!(request(None, Some("/about")).redirect_to(), "/about");
    assert_eq!(request(None, None).redirect_to(), "/");
    assert_eq!(request(None, Some("https://evil.test")).redirect_to(), "/");
    assert_eq!(request(None, Some("//evil.test/x")).redirect_to(), "/");
    assert_eq!(request(None, Some("about")).redirect_to(), "/");
    assert_eq!(request(None, Some("/a\nb")).redirect_to(), "/");
    assert_eq!(request(None, Some("/a\u{7f}b")).redirect_to(), "/");
}

#[test]
fn test_request_from_url_and_query_params() {
    let url = Url::parse(
        "https://kizmet.test/api/draft/enable?sanity-preview-secret=abc&sanity-preview-pathname=%2Fbook",
    )
    .unwrap();
    let parsed = PreviewRequest::from_url(&url);
    assert_eq!(parsed, request(Some("abc"), Some("/book")));

    let query = secret_query("abc");
    assert_eq!(query.params.get("secret"), Some(&json!("abc")));
}
