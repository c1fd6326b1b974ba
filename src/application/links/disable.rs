use crate::domain::links::LinkRepository;
use crate::shared::error::AppError;
use std::sync::Arc;

/// Soft-disables a link owned by the caller. Disable is the only deletion
/// semantics; the row and its counters stay behind.
pub struct DisableLinkUseCase {
    link_repo: Arc<dyn LinkRepository>,
}

impl DisableLinkUseCase {
    pub fn new(link_repo: Arc<dyn LinkRepository>) -> Self {
        Self { link_repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, key: &str, user_id: i64) -> Result<(), AppError> {
        let disabled = self
            .link_repo
            .disable(key, user_id)
            .await
            .map_err(AppError::Internal)?;

        if !disabled {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
