use crate::domain::password::PasswordHasher;
use crate::domain::users::{CreateUserError, NewUser, User, UserRepository};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    #[validate(length(min = 3, message = "Login must be at least 3 characters"))]
    #[schema(example = "alice", min_length = 3)]
    pub login: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "p@ss1234", min_length = 6)]
    pub password: String,
}

pub struct RegisterUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    password: Arc<dyn PasswordHasher>,
}

impl RegisterUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, password: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_repo,
            password,
        }
    }

    #[tracing::instrument(skip(self, req), fields(login = %req.login))]
    pub async fn execute(&self, req: RegisterUserRequest) -> Result<User, AppError> {
        if self
            .user_repo
            .find_by_login(&req.login)
            .await
            .map_err(AppError::Internal)?
            .is_some()
        {
            return Err(AppError::LoginTaken);
        }

        let hasher = self.password.clone();
        let password = req.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("hash task failed: {e}")))?
            .map_err(AppError::Internal)?;

        let new_user = NewUser {
            login: req.login,
            password_hash,
        };

        // The pre-check above races with concurrent registration; the unique
        // constraint has the final word.
        self.user_repo.create(new_user).await.map_err(|e| match e {
            CreateUserError::LoginTaken => AppError::LoginTaken,
            CreateUserError::Other(e) => AppError::Internal(e),
        })
    }
}
