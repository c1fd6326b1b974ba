use crate::domain::links::{Link, LinkRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct ListLinksUseCase {
    link_repo: Arc<dyn LinkRepository>,
}

impl ListLinksUseCase {
    pub fn new(link_repo: Arc<dyn LinkRepository>) -> Self {
        Self { link_repo }
    }

    pub async fn execute(&self, user_id: i64) -> Result<Vec<Link>, AppError> {
        self.link_repo
            .list_for_user(user_id)
            .await
            .map_err(AppError::Internal)
    }
}
