use crate::application::links::resolve::ResolveLinkUseCase;
use crate::domain::links::LinkRepository;
use crate::infrastructure::repositories::links::PostgresLinkRepository;
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use std::sync::Arc;

/// Public redirect endpoint. No authentication: anyone holding a short key
/// may follow it. Each hit counts as a view.
#[utoipa::path(
    get,
    path = "/r/{key}",
    params(("key" = String, Path, description = "Short key")),
    responses(
        (status = 307, description = "Redirect to the original URL"),
        (status = 404, description = "Unknown or disabled key", body = ErrorResponse)
    ),
    tag = "redirect"
)]
pub async fn resolve(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Redirect, AppError> {
    let link_repo =
        Arc::new(PostgresLinkRepository::new(state.pool.clone())) as Arc<dyn LinkRepository>;
    let use_case = ResolveLinkUseCase::new(link_repo);

    let link = use_case.execute(&key).await?;

    Ok(Redirect::temporary(&link.original_url))
}
