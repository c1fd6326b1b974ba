use crate::application::auth::token_utils::{TokenResponse, issue_tokens};
use crate::domain::password::PasswordHasher;
use crate::domain::tokens::TokenCodec;
use crate::domain::users::UserRepository;
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Login is required"))]
    pub login: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

pub type LoginResponse = TokenResponse;

pub struct LoginUseCase {
    user_repo: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenCodec>,
    password: Arc<dyn PasswordHasher>,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
}

impl LoginUseCase {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenCodec>,
        password: Arc<dyn PasswordHasher>,
        access_token_expiry: i64,
        refresh_token_expiry: i64,
    ) -> Self {
        Self {
            user_repo,
            tokens,
            password,
            access_token_expiry,
            refresh_token_expiry,
        }
    }

    #[tracing::instrument(skip(self, req), fields(login = %req.login))]
    pub async fn execute(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        // Unknown and disabled users fall out here; the outcome is the same
        // as a wrong password so login cannot enumerate accounts.
        let user = self
            .user_repo
            .find_by_login(&req.login)
            .await
            .map_err(AppError::Internal)?
            .ok_or(AppError::InvalidCredentials)?;

        // Argon2 is deliberately slow; keep it off the async workers.
        let hasher = self.password.clone();
        let password = req.password;
        let hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("verify task failed: {e}")))?
            .map_err(AppError::Internal)?;

        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        issue_tokens(
            user.id,
            &self.tokens,
            &self.user_repo,
            self.access_token_expiry,
            self.refresh_token_expiry,
        )
        .await
    }
}
