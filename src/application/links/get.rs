use crate::domain::links::{Link, LinkRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

/// Fetch a single link by short key, scoped to its owner. Disabled links
/// are indistinguishable from absent ones.
pub struct GetLinkUseCase {
    link_repo: Arc<dyn LinkRepository>,
}

impl GetLinkUseCase {
    pub fn new(link_repo: Arc<dyn LinkRepository>) -> Self {
        Self { link_repo }
    }

    pub async fn execute(&self, key: &str, user_id: i64) -> Result<Link, AppError> {
        self.link_repo
            .find_by_key_for_user(key, user_id)
            .await
            .map_err(AppError::Internal)?
            .ok_or(AppError::NotFound)
    }
}
