use crate::common;
use crate::setup_test_db_or_skip;
use kurz::application::auth::login::{LoginRequest, LoginUseCase};
use kurz::application::auth::refresh::{RefreshTokenRequest, RefreshTokenUseCase};
use kurz::application::auth::token_utils::TokenResponse;
use kurz::infrastructure::password::Argon2PasswordHasher;
use kurz::infrastructure::repositories::users::PostgresUserRepository;
use kurz::shared::error::AppError;
use serial_test::serial;
use sqlx::PgPool;
use std::sync::Arc;

async fn login(pool: &PgPool, login: &str, password: &str) -> TokenResponse {
    LoginUseCase::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        common::create_test_codec(),
        Arc::new(Argon2PasswordHasher::new()),
        900,
        172800,
    )
    .execute(LoginRequest {
        login: login.to_string(),
        password: password.to_string(),
    })
    .await
    .expect("Login failed")
}

fn refresh_use_case(pool: &PgPool) -> RefreshTokenUseCase {
    RefreshTokenUseCase::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        common::create_test_codec(),
        900,
        172800,
    )
}

#[tokio::test]
#[serial]
async fn test_refresh_rotates_and_invalidates_predecessor() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    common::register_test_user(&pool, "refresh_user", "password123").await;
    let t1 = login(&pool, "refresh_user", "password123").await;

    let use_case = refresh_use_case(&pool);

    let t2 = use_case
        .execute(RefreshTokenRequest {
            refresh_token: t1.refresh_token.clone(),
        })
        .await
        .expect("First refresh failed");
    assert_ne!(t2.refresh_token, t1.refresh_token);

    // Replaying the superseded token is stale, not merely invalid
    let replay = use_case
        .execute(RefreshTokenRequest {
            refresh_token: t1.refresh_token,
        })
        .await;
    assert!(matches!(replay, Err(AppError::RefreshTokenStale)));

    // The fresh one still works
    let t3 = use_case
        .execute(RefreshTokenRequest {
            refresh_token: t2.refresh_token,
        })
        .await;
    assert!(t3.is_ok());
}

#[tokio::test]
#[serial]
async fn test_login_supersedes_outstanding_refresh_token() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    common::register_test_user(&pool, "refresh_user", "password123").await;
    let t1 = login(&pool, "refresh_user", "password123").await;
    // A second login rotates the stored digest as well
    let _t2 = login(&pool, "refresh_user", "password123").await;

    let result = refresh_use_case(&pool)
        .execute(RefreshTokenRequest {
            refresh_token: t1.refresh_token,
        })
        .await;
    assert!(matches!(result, Err(AppError::RefreshTokenStale)));
}

#[tokio::test]
#[serial]
async fn test_refresh_rejects_access_token() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    common::register_test_user(&pool, "refresh_user", "password123").await;
    let t1 = login(&pool, "refresh_user", "password123").await;

    let result = refresh_use_case(&pool)
        .execute(RefreshTokenRequest {
            refresh_token: t1.access_token,
        })
        .await;
    assert!(matches!(result, Err(AppError::TokenTypeMismatch)));
}

#[tokio::test]
#[serial]
async fn test_refresh_rejects_empty_token() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let result = refresh_use_case(&pool)
        .execute(RefreshTokenRequest {
            refresh_token: String::new(),
        })
        .await;
    assert!(matches!(result, Err(AppError::MissingCredential)));
}
