use crate::application::auth::login::{LoginRequest, LoginResponse, LoginUseCase};
use crate::application::auth::refresh::{
    RefreshTokenRequest, RefreshTokenResponse, RefreshTokenUseCase,
};
use crate::domain::users::UserRepository;
use crate::infrastructure::repositories::users::PostgresUserRepository;
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::ApiResponse;
use crate::shared::validation::ValidatedJson;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Login handler
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_repo =
        Arc::new(PostgresUserRepository::new(state.pool.clone())) as Arc<dyn UserRepository>;

    let use_case = LoginUseCase::new(
        user_repo,
        state.tokens.clone(),
        state.password.clone(),
        state.config.access_token_expiry,
        state.config.refresh_token_expiry,
    );

    let response = use_case.execute(req).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(response))))
}

/// Refresh token handler
#[utoipa::path(
    post,
    path = "/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Token refreshed successfully", body = ApiResponse<RefreshTokenResponse>),
        (status = 400, description = "Wrong token type or stale refresh token", body = ErrorResponse),
        (status = 401, description = "Invalid refresh token", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshTokenRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_repo =
        Arc::new(PostgresUserRepository::new(state.pool.clone())) as Arc<dyn UserRepository>;

    let use_case = RefreshTokenUseCase::new(
        user_repo,
        state.tokens.clone(),
        state.config.access_token_expiry,
        state.config.refresh_token_expiry,
    );

    let response = use_case.execute(req).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(response))))
}
