//! # Site Renderer Tests
//!
//! End-to-end rendering against the in-memory content store: fallbacks,
//! ordering, caching and the draft gate.

mod common;

use crate::common::{setup_tracing, Harness};
use kizmet::{
    documents::DocumentType,
    pages::{book, current_year, services}, site::SitePath, PageStatus, Perspective,
    RequestContext,
};
use kizmet_test_utils::fixtures;
use serde_json::json;

#[tokio::test]
async fn test_empty_store_renders_every_page_from_fallbacks() {
    setup_tracing();
    let harness = Harness::new();

    for page in SitePath::ALL {
        let rendered = harness
            .renderer
            .render(page.as_str(), &RequestContext::published())
            .await;
        assert_eq!(rendered.status, PageStatus::Ok, "{page} should render");
        assert!(rendered.html.contains("<title>"), "{page} has a title");
        assert!(!rendered.html.contains("null"), "{page} leaked a null");
        assert!(
            rendered.html.contains("application/ld+json"),
            "{page} carries structured data"
        );
    }

    let home = harness.renderer.render("/", &RequestContext::published()).await;
    assert!(home.html.contains("Signature Services"));
    assert!(home.html.contains("Relaxation Massage"));
    assert!(!home.html.contains("class=\"testimonials\""));
    assert!(home
        .html
        .contains(&format!("© {} Kizmet Massage &amp; Wellness", current_year())));
}

#[tokio::test]
async fn test_services_render_in_display_order_with_json_ld() {
    let harness = Harness::new();
    harness
        .published
        .set(DocumentType::Service, fixtures::services());

    let html = harness
        .renderer
        .render("/services", &RequestContext::published())
        .await
        .html;

    let cupping = html.find("<h3>Cupping</h3>").unwrap();
    let stone = html.find("<h3>Hot Stone</h3>").unwrap();
    let chair = html.find("<h3>Chair Massage</h3>").unwrap();
    assert!(cupping < stone && stone < chair, "Sorted by order, missing last");
    assert!(!html.contains("30 Minute Session"), "Fallback list replaced");
    assert!(html.contains("\"price\":\"120\""));
}

#[tokio::test]
async fn test_blank_page_strings_use_page_meta_defaults() {
    let harness = Harness::new();
    harness.published.set(
        DocumentType::ServicesPageSettings,
        json!({"title": "", "description": "  "}),
    );
    harness
        .published
        .set(DocumentType::BookPage, json!({"description": ""}));

    let services_html = harness
        .renderer
        .render("/services", &RequestContext::published())
        .await
        .html;
    assert!(services_html.contains("<title>Services &amp; Pricing | Kizmet Massage</title>"));
    assert!(services_html.contains(services::META_DESCRIPTION));

    let book_html = harness
        .renderer
        .render("/book", &RequestContext::published())
        .await
        .html;
    assert!(book_html.contains("<title>Book an Appointment | Kizmet Massage</title>"));
    assert!(book_html.contains(book::META_DESCRIPTION));
}

#[tokio::test]
async fn test_published_renders_are_cached() {
    // --- 1. Arrange ---
    let harness = Harness::new();
    let ctx = RequestContext::published();

    // --- 2. Act ---
    let first = harness.renderer.render("/about", &ctx).await;
    let fetches_after_first = harness.published.get_calls().len();
    let second = harness.renderer.render("/about", &ctx).await;

    // --- 3. Assert ---
    assert!(!first.cache_hit);
    assert!(second.cache_hit);
    assert_eq!(first.html, second.html);
    assert_eq!(first.etag, second.etag);
    assert_eq!(harness.published.get_calls().len(), fetches_after_first);
    assert_eq!(harness.cache.inserts(), vec![SitePath::About]);
}

#[tokio::test]
async fn test_draft_requests_read_drafts_and_bypass_cache() {
    // --- 1. Arrange ---
    let harness = Harness::new();
    harness.cache.seed(SitePath::Home, "<p>stale published</p>");
    harness.drafts.set(
        DocumentType::HomepageSettings,
        json!({ "heroHeadline": "Unpublished Headline" }),
    );

    // --- 2. Act ---
    let rendered = harness.renderer.render("/", &RequestContext::draft()).await;

    // --- 3. Assert ---
    assert!(rendered.html.contains("Unpublished Headline"));
    assert!(!rendered.cache_hit);
    assert!(!rendered.cacheable);
    assert!(harness.published.get_calls().is_empty());
    assert!(harness
        .drafts
        .get_calls()
        .iter()
        .all(|call| call.perspective == Perspective::Drafts));
    assert!(harness.cache.inserts().is_empty(), "Drafts are never cached");
}

#[tokio::test]
async fn test_unknown_path_renders_uncached_404() {
    let harness = Harness::new();
    let rendered = harness
        .renderer
        .render("/gallery", &RequestContext::published())
        .await;

    assert_eq!(rendered.status, PageStatus::NotFound);
    assert!(!rendered.cacheable);
    assert!(rendered.html.contains("Page not found"));
    assert!(rendered.html.contains("noindex, nofollow"));
    assert!(harness.cache.inserts().is_empty());
}

#[tokio::test]
async fn test_fetch_failures_fall_back_to_defaults() {
    let harness = Harness::new();
    harness.published.fail(DocumentType::PoliciesPage);
    harness.published.fail(DocumentType::SiteSettings);

    let rendered = harness
        .renderer
        .render("/policies", &RequestContext::published())
        .await;

    assert_eq!(rendered.status, PageStatus::Ok);
    assert!(rendered.html.contains("Cancellation Policy"));
    assert!(rendered.html.contains("hello@kizmetwellness.com"));
}

#[tokio::test]
async fn test_homepage_testimonials_and_site_settings() {
    let harness = Harness::new();
    harness
        .published
        .set(DocumentType::SiteSettings, fixtures::site_settings())
        .set(DocumentType::Testimonial, fixtures::testimonials());

    let html = harness
        .renderer
        .render("/", &RequestContext::published())
        .await
        .html;

    assert!(html.contains("Kizmet Test"));
    assert!(html.contains("tel:3605550100"));
    assert!(html.contains("<span class=\"initials\">SM</span>"));
    assert!(html.contains("<link rel=\"canonical\" href=\"https://kizmet.test\">"));
}
