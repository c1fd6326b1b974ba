use crate::common;
use crate::setup_test_db_or_skip;
use kurz::application::auth::login::{LoginRequest, LoginUseCase};
use kurz::application::auth::token_utils::hash_token;
use kurz::domain::users::UserRepository;
use kurz::infrastructure::password::Argon2PasswordHasher;
use kurz::infrastructure::repositories::users::PostgresUserRepository;
use kurz::shared::error::AppError;
use serial_test::serial;
use std::sync::Arc;

#[tokio::test]
#[serial]
async fn test_login_success() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let user = common::register_test_user(&pool, "login_user", "password123").await;

    let user_repo = Arc::new(PostgresUserRepository::new(pool.clone()));
    let use_case = LoginUseCase::new(
        user_repo.clone(),
        common::create_test_codec(),
        Arc::new(Argon2PasswordHasher::new()),
        900,
        172800,
    );

    let response = use_case
        .execute(LoginRequest {
            login: "login_user".to_string(),
            password: "password123".to_string(),
        })
        .await
        .expect("Login failed");

    assert!(!response.access_token.is_empty());
    assert!(!response.refresh_token.is_empty());
    assert_eq!(response.token_type, "Bearer");

    // The refresh token digest landed on the user row
    let stored = user_repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.refresh_token, hash_token(&response.refresh_token));
}

#[tokio::test]
#[serial]
async fn test_login_invalid_credentials() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let use_case = LoginUseCase::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        common::create_test_codec(),
        Arc::new(Argon2PasswordHasher::new()),
        900,
        172800,
    );

    let result = use_case
        .execute(LoginRequest {
            login: "nonexistent".to_string(),
            password: "password123".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
#[serial]
async fn test_login_wrong_password_matches_unknown_user() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    common::register_test_user(&pool, "login_user", "password123").await;

    let use_case = LoginUseCase::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        common::create_test_codec(),
        Arc::new(Argon2PasswordHasher::new()),
        900,
        172800,
    );

    let wrong_password = use_case
        .execute(LoginRequest {
            login: "login_user".to_string(),
            password: "wrong".to_string(),
        })
        .await;
    let unknown_user = use_case
        .execute(LoginRequest {
            login: "who".to_string(),
            password: "password123".to_string(),
        })
        .await;

    // Same outcome either way, so login cannot enumerate accounts
    assert!(matches!(wrong_password, Err(AppError::InvalidCredentials)));
    assert!(matches!(unknown_user, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
#[serial]
async fn test_login_disabled_user() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let user = common::register_test_user(&pool, "login_user", "password123").await;
    let user_repo = Arc::new(PostgresUserRepository::new(pool.clone()));
    user_repo.disable(user.id).await.unwrap();

    let use_case = LoginUseCase::new(
        user_repo,
        common::create_test_codec(),
        Arc::new(Argon2PasswordHasher::new()),
        900,
        172800,
    );

    let result = use_case
        .execute(LoginRequest {
            login: "login_user".to_string(),
            password: "password123".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}
