use crate::domain::tokens::{TokenCodec, TokenType};
use crate::domain::users::{User, UserRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

/// Resolves a bearer access token to its user.
///
/// Access tokens are self-certifying within their validity window; the only
/// store access here is the existence lookup, which re-evaluates the
/// disabled flag so a disable takes effect before the token expires.
pub struct AuthenticateUseCase {
    user_repo: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenCodec>,
}

impl AuthenticateUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, tokens: Arc<dyn TokenCodec>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, access_token: &str) -> Result<User, AppError> {
        if access_token.is_empty() {
            return Err(AppError::MissingCredential);
        }

        let claims = self.tokens.decode(access_token)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::TokenTypeMismatch);
        }

        self.user_repo
            .find_by_id(claims.user_id()?)
            .await
            .map_err(AppError::Internal)?
            .ok_or(AppError::InvalidCredentials)
    }
}
