use crate::common;
use crate::setup_test_db_or_skip;
use kurz::application::users::create::{RegisterUserRequest, RegisterUserUseCase};
use kurz::infrastructure::password::Argon2PasswordHasher;
use kurz::infrastructure::repositories::users::PostgresUserRepository;
use kurz::shared::error::AppError;
use serial_test::serial;
use std::sync::Arc;

#[tokio::test]
#[serial]
async fn test_register_user() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let use_case = RegisterUserUseCase::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(Argon2PasswordHasher::new()),
    );

    let user = use_case
        .execute(RegisterUserRequest {
            login: "new_user".to_string(),
            password: "password123".to_string(),
        })
        .await
        .expect("Failed to register user");

    assert_eq!(user.login, "new_user");
    assert!(!user.disabled);
    assert!(user.refresh_token.is_empty());
    assert!(user.password_hash.starts_with("$argon2"));
}

#[tokio::test]
#[serial]
async fn test_register_duplicate_login() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let use_case = RegisterUserUseCase::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(Argon2PasswordHasher::new()),
    );

    let req = || RegisterUserRequest {
        login: "new_user".to_string(),
        password: "password123".to_string(),
    };
    use_case.execute(req()).await.expect("First registration failed");

    let result = use_case.execute(req()).await;
    assert!(matches!(result, Err(AppError::LoginTaken)));
}
