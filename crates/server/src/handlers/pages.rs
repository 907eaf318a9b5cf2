//! # Page Handlers
//!
//! Serves the site pages. Published responses are cacheable by shared caches
//! and answer conditional requests; draft responses are private.

use super::{AppState, DRAFT_COOKIE};
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use axum_extra::extract::SignedCookieJar;
use kizmet::{PageStatus, RenderedPage, RequestContext};
use tracing::debug;

/// Reports where a page body came from.
pub const CACHE_STATUS_HEADER: &str = "x-kizmet-cache";

pub const DRAFT_CACHE_CONTROL: &str = "private, no-store";

/// Reads draft mode from the signed session cookie. A tampered cookie fails
/// verification and counts as absent.
pub fn request_context(jar: &SignedCookieJar) -> RequestContext {
    if jar.get(DRAFT_COOKIE).is_some() {
        RequestContext::draft()
    } else {
        RequestContext::published()
    }
}

fn cache_control_for(page: &RenderedPage, ttl_secs: u64) -> String {
    if page.cacheable {
        format!("public, s-maxage={ttl_secs}, stale-while-revalidate")
    } else {
        DRAFT_CACHE_CONTROL.to_string()
    }
}

fn cache_status(page: &RenderedPage, ctx: &RequestContext) -> &'static str {
    match (ctx.draft_mode, page.cache_hit) {
        (true, _) => "BYPASS",
        (false, true) => "HIT",
        (false, false) => "MISS",
    }
}

fn not_modified(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.split(',').any(|tag| tag.trim() == etag || tag.trim() == "*"))
}

/// Renders the page at the request path: one of the five site pages, or the
/// 404 page for anything else.
pub async fn page_handler(
    State(app_state): State<AppState>,
    jar: SignedCookieJar,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let ctx = request_context(&jar);
    let page = app_state.renderer.render(uri.path(), &ctx).await;

    let status = match page.status {
        PageStatus::Ok => StatusCode::OK,
        PageStatus::NotFound => StatusCode::NOT_FOUND,
    };
    let cache_control =
        HeaderValue::from_str(&cache_control_for(&page, app_state.config.revalidate_ttl_secs))
            .unwrap_or(HeaderValue::from_static(DRAFT_CACHE_CONTROL));
    let etag = HeaderValue::from_str(&page.etag).unwrap_or(HeaderValue::from_static("\"\""));

    if status == StatusCode::OK && page.cacheable && not_modified(&headers, &page.etag) {
        debug!(path = %uri.path(), "ETag matched; answering 304.");
        return (
            StatusCode::NOT_MODIFIED,
            [(header::ETAG, etag), (header::CACHE_CONTROL, cache_control)],
        )
            .into_response();
    }

    (
        status,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            ),
            (header::ETAG, etag),
            (header::CACHE_CONTROL, cache_control),
            (
                HeaderName::from_static(CACHE_STATUS_HEADER),
                HeaderValue::from_static(cache_status(&page, &ctx)),
            ),
        ],
        page.html,
    )
        .into_response()
}
