//! # Draft Mode
//!
//! Preview sessions are a signed cookie. The studio enables one by opening
//! `/api/draft/enable` with a short-lived preview secret.

use super::{AppError, AppState, DRAFT_COOKIE};
use axum::{
    extract::{Query, State},
    response::Redirect,
};
use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    SignedCookieJar,
};
use kizmet_sanity::{validate_preview, PreviewError, PreviewRequest};
use tracing::info;

fn draft_cookie(value: &'static str) -> Cookie<'static> {
    Cookie::build((DRAFT_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Validates the preview secret, starts a draft session and redirects (303)
/// to the requested local path.
pub async fn enable_draft_handler(
    State(app_state): State<AppState>,
    jar: SignedCookieJar,
    Query(request): Query<PreviewRequest>,
) -> Result<(SignedCookieJar, Redirect), AppError> {
    if !app_state.drafts_enabled {
        return Err(PreviewError::WrongPerspective.into());
    }

    let redirect_to = validate_preview(app_state.renderer.clients().draft(), &request).await?;
    info!(redirect_to = %redirect_to, "Draft mode enabled.");
    Ok((jar.add(draft_cookie("1")), Redirect::to(&redirect_to)))
}

/// Ends the draft session and returns to the home page.
pub async fn disable_draft_handler(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    info!("Draft mode disabled.");
    (jar.remove(draft_cookie("")), Redirect::to("/"))
}
