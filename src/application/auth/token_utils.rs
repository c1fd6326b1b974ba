use crate::domain::tokens::{TokenCodec, TokenType};
use crate::domain::users::UserRepository;
use crate::shared::error::AppError;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use utoipa::ToSchema;

/// Common response structure for token operations
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Generate SHA-256 hash of a token string
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Mint a fresh access/refresh pair and persist the refresh token's digest
/// on the user record. Overwriting the stored digest is the sole revocation
/// mechanism: whatever refresh token was live before dies here.
pub async fn issue_tokens(
    user_id: i64,
    codec: &Arc<dyn TokenCodec>,
    user_repo: &Arc<dyn UserRepository>,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
) -> Result<TokenResponse, AppError> {
    let access_token = codec.encode(TokenType::Access, user_id, access_token_expiry)?;
    let refresh_token = codec.encode(TokenType::Refresh, user_id, refresh_token_expiry)?;

    let updated = user_repo
        .update_refresh_token(user_id, &hash_token(&refresh_token))
        .await
        .map_err(AppError::Internal)?;
    if !updated {
        // The user vanished or was disabled between lookup and update.
        return Err(AppError::InvalidCredentials);
    }

    Ok(TokenResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
    })
}
