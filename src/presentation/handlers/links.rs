use crate::application::links::create::{CreateLinkRequest, CreateLinkUseCase};
use crate::application::links::disable::DisableLinkUseCase;
use crate::application::links::get::GetLinkUseCase;
use crate::application::links::list::ListLinksUseCase;
use crate::domain::links::{Link, LinkRepository};
use crate::infrastructure::repositories::links::PostgresLinkRepository;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::AuthUser;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::ApiResponse;
use crate::shared::validation::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use std::sync::Arc;
use time::OffsetDateTime;
use utoipa::ToSchema;

/// View statistics for a single link.
#[derive(Debug, Serialize, ToSchema)]
pub struct LinkStats {
    pub short_key: String,
    pub view_count: i64,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub last_access_at: OffsetDateTime,
}

impl From<Link> for LinkStats {
    fn from(link: Link) -> Self {
        Self {
            short_key: link.short_key,
            view_count: link.view_count,
            created_at: link.created_at,
            last_access_at: link.last_access_at,
        }
    }
}

/// Shorten a URL
#[utoipa::path(
    post,
    path = "/links",
    request_body = CreateLinkRequest,
    responses(
        (status = 201, description = "Link created", body = ApiResponse<Link>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Key generation exhausted", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "links"
)]
pub async fn create_link(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(req): ValidatedJson<CreateLinkRequest>,
) -> Result<impl IntoResponse, AppError> {
    let link_repo =
        Arc::new(PostgresLinkRepository::new(state.pool.clone())) as Arc<dyn LinkRepository>;
    let use_case = CreateLinkUseCase::new(link_repo, state.keys.clone());

    let link = use_case.execute(req, user.id).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(link))))
}

/// List the current user's links
#[utoipa::path(
    get,
    path = "/links",
    responses(
        (status = 200, description = "Links owned by the caller", body = ApiResponse<Vec<Link>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "links"
)]
pub async fn list_links(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let link_repo =
        Arc::new(PostgresLinkRepository::new(state.pool.clone())) as Arc<dyn LinkRepository>;
    let use_case = ListLinksUseCase::new(link_repo);

    let links = use_case.execute(user.id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(links))))
}

/// Get one of the current user's links by key
#[utoipa::path(
    get,
    path = "/links/{key}",
    params(("key" = String, Path, description = "Short key")),
    responses(
        (status = 200, description = "Link", body = ApiResponse<Link>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "links"
)]
pub async fn get_link(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let link_repo =
        Arc::new(PostgresLinkRepository::new(state.pool.clone())) as Arc<dyn LinkRepository>;
    let use_case = GetLinkUseCase::new(link_repo);

    let link = use_case.execute(&key, user.id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(link))))
}

/// Disable one of the current user's links
#[utoipa::path(
    delete,
    path = "/links/{key}",
    params(("key" = String, Path, description = "Short key")),
    responses(
        (status = 204, description = "Link disabled"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "links"
)]
pub async fn disable_link(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let link_repo =
        Arc::new(PostgresLinkRepository::new(state.pool.clone())) as Arc<dyn LinkRepository>;
    let use_case = DisableLinkUseCase::new(link_repo);

    use_case.execute(&key, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// View statistics for one of the current user's links
#[utoipa::path(
    get,
    path = "/links/{key}/stats",
    params(("key" = String, Path, description = "Short key")),
    responses(
        (status = 200, description = "Link statistics", body = ApiResponse<LinkStats>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "links"
)]
pub async fn link_stats(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let link_repo =
        Arc::new(PostgresLinkRepository::new(state.pool.clone())) as Arc<dyn LinkRepository>;
    let use_case = GetLinkUseCase::new(link_repo);

    let link = use_case.execute(&key, user.id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(LinkStats::from(link)))))
}
