use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Link {
    pub id: i64,
    pub short_key: String,
    pub original_url: String,
    pub user_id: i64,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub last_access_at: OffsetDateTime,
    pub view_count: i64,
    pub disabled: bool,
}

#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_key: String,
    pub original_url: String,
    pub user_id: i64,
}

#[derive(Debug, Error)]
pub enum InsertLinkError {
    /// The store rejected the candidate key on its uniqueness constraint.
    /// Expected and recoverable: the caller retries with a fresh key.
    #[error("short key already taken")]
    DuplicateKey,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Produces candidate short keys. Collision resistance comes from the size
/// of the key space, not from unpredictability; uniqueness is enforced by
/// the store on insert.
pub trait KeyGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Repository for link records. Reads only see enabled links; disabled rows
/// stay in place for audit history.
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Optimistic insert: no pre-check on the key, the unique constraint
    /// reports collisions as [`InsertLinkError::DuplicateKey`].
    async fn insert(&self, new_link: NewLink) -> Result<Link, InsertLinkError>;

    async fn find_by_key_for_user(
        &self,
        key: &str,
        user_id: i64,
    ) -> Result<Option<Link>, anyhow::Error>;

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Link>, anyhow::Error>;

    /// Soft-disable a link owned by `user_id`, stamping `last_access_at`.
    /// Returns `false` when no matching enabled link exists.
    async fn disable(&self, key: &str, user_id: i64) -> Result<bool, anyhow::Error>;

    /// Resolve a key for redirection, atomically bumping the view counter
    /// and `last_access_at`. Returns `None` for unknown or disabled keys.
    async fn record_view(&self, key: &str) -> Result<Option<Link>, anyhow::Error>;
}
