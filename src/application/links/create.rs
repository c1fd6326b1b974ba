use crate::domain::links::{InsertLinkError, KeyGenerator, Link, LinkRepository, NewLink};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

/// How many candidate keys to try before giving up. A policy knob, not a
/// correctness requirement: the key space is large relative to any
/// realistic table size.
const MAX_KEY_ATTEMPTS: u32 = 5;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLinkRequest {
    #[validate(url(message = "Original URL must be a valid URL"))]
    #[schema(example = "https://example.com/some/long/path")]
    pub original_url: String,
}

pub struct CreateLinkUseCase {
    link_repo: Arc<dyn LinkRepository>,
    keys: Arc<dyn KeyGenerator>,
}

impl CreateLinkUseCase {
    pub fn new(link_repo: Arc<dyn LinkRepository>, keys: Arc<dyn KeyGenerator>) -> Self {
        Self { link_repo, keys }
    }

    /// Optimistic insert-and-retry: no existence pre-check, the store's
    /// uniqueness constraint reports collisions and we retry with a fresh
    /// candidate until the budget runs out.
    #[tracing::instrument(skip(self, req))]
    pub async fn execute(&self, req: CreateLinkRequest, user_id: i64) -> Result<Link, AppError> {
        let mut attempts = MAX_KEY_ATTEMPTS;

        loop {
            let key = self.keys.generate();
            let new_link = NewLink {
                short_key: key,
                original_url: req.original_url.clone(),
                user_id,
            };

            match self.link_repo.insert(new_link).await {
                Ok(link) => return Ok(link),
                Err(InsertLinkError::DuplicateKey) => {
                    attempts -= 1;
                    if attempts == 0 {
                        return Err(AppError::KeyGenerationFailed);
                    }
                    tracing::debug!(attempts_left = attempts, "short key collision, retrying");
                }
                Err(InsertLinkError::Other(e)) => return Err(AppError::Internal(e)),
            }
        }
    }
}
