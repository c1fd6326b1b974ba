use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

/// Token kind carried in the `type` claim. The tag is the only structural
/// difference between an access and a refresh token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT Claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

impl Claims {
    pub fn new(token_type: TokenType, user_id: i64, expires_in: i64) -> Self {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        Self {
            sub: user_id.to_string(),
            iat: now,
            exp: now + expires_in,
            token_type,
        }
    }

    /// Parses the subject back into a user id. A subject that is not a
    /// number counts as a malformed payload, not a signature problem.
    pub fn user_id(&self) -> Result<i64, TokenError> {
        self.sub.parse().map_err(|_| TokenError::MalformedPayload)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("could not validate token")]
    Invalid,
    #[error("invalid payload in token")]
    MalformedPayload,
    #[error("token encoding failed")]
    EncodingFailure,
}

/// Signs and verifies token payloads. Verification is stateless: no store
/// lookup happens here, which is what keeps access-token checks cheap.
pub trait TokenCodec: Send + Sync {
    /// Build and sign a payload with `iat = now` and `exp = now + expires_in`
    /// (seconds).
    fn encode(
        &self,
        token_type: TokenType,
        user_id: i64,
        expires_in: i64,
    ) -> Result<String, TokenError>;

    /// Verify signature and expiry, then parse the claims.
    fn decode(&self, token: &str) -> Result<Claims, TokenError>;
}
