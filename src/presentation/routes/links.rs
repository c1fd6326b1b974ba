use crate::infrastructure::state::AppState;
use crate::presentation::handlers::links;
use axum::{Router, routing::get};

/// Link routes - creation and management of the caller's links
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(links::list_links).post(links::create_link))
        .route("/{key}", get(links::get_link).delete(links::disable_link))
        .route("/{key}/stats", get(links::link_stats))
}
