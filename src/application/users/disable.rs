use crate::domain::users::UserRepository;
use crate::shared::error::AppError;
use std::sync::Arc;

/// Soft-disables a user. The row stays for audit history; the cleared
/// refresh token and the disabled flag make every credential dead from the
/// next store lookup on.
pub struct DisableUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl DisableUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, user_id: i64) -> Result<(), AppError> {
        let disabled = self
            .user_repo
            .disable(user_id)
            .await
            .map_err(AppError::Internal)?;

        if !disabled {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
