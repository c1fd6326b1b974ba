use crate::domain::links::{Link, LinkRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

/// Resolves a short key for redirection. Each successful resolution counts
/// as a view and refreshes the last-access timestamp.
pub struct ResolveLinkUseCase {
    link_repo: Arc<dyn LinkRepository>,
}

impl ResolveLinkUseCase {
    pub fn new(link_repo: Arc<dyn LinkRepository>) -> Self {
        Self { link_repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, key: &str) -> Result<Link, AppError> {
        self.link_repo
            .record_view(key)
            .await
            .map_err(AppError::Internal)?
            .ok_or(AppError::NotFound)
    }
}
