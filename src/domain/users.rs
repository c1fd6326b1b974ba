use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub login: String,
    #[serde(skip)]
    pub password_hash: String,
    /// SHA-256 digest of the currently live refresh token, empty when none
    /// has been issued. Never leaves the server.
    #[serde(skip)]
    pub refresh_token: String,
    pub disabled: bool,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub login: String,
    pub password_hash: String,
}

#[derive(Debug, Error)]
pub enum CreateUserError {
    #[error("user with this login already exists")]
    LoginTaken,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Repository for user records. Reads only see enabled users; disabled rows
/// stay in place for audit history.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, new_user: NewUser) -> Result<User, CreateUserError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, anyhow::Error>;

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, anyhow::Error>;

    /// Overwrite the stored refresh-token digest. Returns `false` when the
    /// user is absent or disabled.
    async fn update_refresh_token(&self, id: i64, token_hash: &str)
    -> Result<bool, anyhow::Error>;

    /// Soft-disable the user and clear the stored refresh token. Returns
    /// `false` when the user is absent or already disabled.
    async fn disable(&self, id: i64) -> Result<bool, anyhow::Error>;
}
