//! # Icon Handlers
//!
//! The favicon and Apple touch icon, rendered on request.

use super::{AppError, AppState};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use kizmet_icon::IconVariant;

const ICON_CACHE_CONTROL: &str = "public, max-age=86400";

async fn render(app_state: &AppState, variant: IconVariant) -> Result<Response, AppError> {
    let png = app_state.icons.render(variant).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, ICON_CACHE_CONTROL),
        ],
        png,
    )
        .into_response())
}

/// `GET /icon`: the 32x32 favicon.
pub async fn icon_handler(State(app_state): State<AppState>) -> Result<Response, AppError> {
    render(&app_state, IconVariant::FAVICON).await
}

/// `GET /apple-icon`: the 180x180 touch icon.
pub async fn apple_icon_handler(State(app_state): State<AppState>) -> Result<Response, AppError> {
    render(&app_state, IconVariant::APPLE).await
}
