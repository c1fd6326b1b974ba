use crate::infrastructure::state::AppState;
use crate::presentation::handlers::users;
use axum::{
    Router,
    routing::{get, post},
};

/// User routes - registration and current-user management
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(users::register_user))
        .route("/me", get(users::get_me).delete(users::disable_me))
}
