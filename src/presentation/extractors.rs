use crate::application::auth::authenticate::AuthenticateUseCase;
use crate::domain::users::{User, UserRepository};
use crate::infrastructure::repositories::users::PostgresUserRepository;
use crate::infrastructure::state::AppState;
use crate::shared::error::AppError;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

/// Authenticated user extractor.
///
/// Validates the bearer access token from the Authorization header and
/// resolves it to a live user record.
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::MissingCredential)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::MissingCredential)?;

        let user_repo =
            Arc::new(PostgresUserRepository::new(state.pool.clone())) as Arc<dyn UserRepository>;
        let use_case = AuthenticateUseCase::new(user_repo, state.tokens.clone());

        let user = use_case.execute(token).await?;

        Ok(AuthUser(user))
    }
}
