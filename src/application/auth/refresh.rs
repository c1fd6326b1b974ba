use crate::application::auth::token_utils::{TokenResponse, hash_token, issue_tokens};
use crate::domain::tokens::{TokenCodec, TokenType};
use crate::domain::users::UserRepository;
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
pub struct RefreshTokenRequest {
    // An empty string is a missing credential, not a validation problem;
    // the use case rejects it before decoding.
    #[serde(default)]
    pub refresh_token: String,
}

pub type RefreshTokenResponse = TokenResponse;

pub struct RefreshTokenUseCase {
    user_repo: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenCodec>,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
}

impl RefreshTokenUseCase {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenCodec>,
        access_token_expiry: i64,
        refresh_token_expiry: i64,
    ) -> Self {
        Self {
            user_repo,
            tokens,
            access_token_expiry,
            refresh_token_expiry,
        }
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn execute(
        &self,
        req: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, AppError> {
        if req.refresh_token.is_empty() {
            return Err(AppError::MissingCredential);
        }

        let claims = self.tokens.decode(&req.refresh_token)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AppError::TokenTypeMismatch);
        }

        let user = self
            .user_repo
            .find_by_id(claims.user_id()?)
            .await
            .map_err(AppError::Internal)?
            .ok_or(AppError::InvalidCredentials)?;

        // Store cross-check: only the most recently issued refresh token is
        // live. A superseded one fails here even while its signature and
        // expiry are still valid.
        if user.refresh_token != hash_token(&req.refresh_token) {
            return Err(AppError::RefreshTokenStale);
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
