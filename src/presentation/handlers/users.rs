use crate::application::users::create::{RegisterUserRequest, RegisterUserUseCase};
use crate::application::users::disable::DisableUserUseCase;
use crate::domain::users::{User, UserRepository};
use crate::infrastructure::repositories::users::PostgresUserRepository;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::AuthUser;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::ApiResponse;
use crate::shared::validation::ValidatedJson;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<User>),
        (status = 400, description = "Login already taken", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_repo =
        Arc::new(PostgresUserRepository::new(state.pool.clone())) as Arc<dyn UserRepository>;
    let use_case = RegisterUserUseCase::new(user_repo, state.password.clone());

    let user = use_case.execute(req).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(user))))
}

/// Get the current user
#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<User>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn get_me(AuthUser(user): AuthUser) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(ApiResponse::new(user))))
}

/// Disable the current user
#[utoipa::path(
    delete,
    path = "/users/me",
    responses(
        (status = 204, description = "User disabled"),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn disable_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user_repo =
        Arc::new(PostgresUserRepository::new(state.pool.clone())) as Arc<dyn UserRepository>;
    let use_case = DisableUserUseCase::new(user_repo);

    use_case.execute(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
