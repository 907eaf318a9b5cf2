use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes. Paths without a
/// route fall through to the page handler, which renders the 404 page.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page_handler))
        .route("/about", get(handlers::page_handler))
        .route("/services", get(handlers::page_handler))
        .route("/book", get(handlers::page_handler))
        .route("/policies", get(handlers::page_handler))
        .route("/health", get(handlers::health_check))
        .route("/icon", get(handlers::icon_handler))
        .route("/apple-icon", get(handlers::apple_icon_handler))
        .route("/api/revalidate", post(handlers::revalidate_handler))
        .route("/api/draft/enable", get(handlers::enable_draft_handler))
        .route("/api/draft/disable", get(handlers::disable_draft_handler))
        .fallback(handlers::page_handler)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
