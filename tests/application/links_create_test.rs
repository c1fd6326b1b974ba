use crate::common;
use crate::setup_test_db_or_skip;
use kurz::application::links::create::{CreateLinkRequest, CreateLinkUseCase};
use kurz::application::links::resolve::ResolveLinkUseCase;
use kurz::domain::links::LinkRepository;
use kurz::infrastructure::keygen::RandomKeyGenerator;
use kurz::infrastructure::repositories::links::PostgresLinkRepository;
use kurz::infrastructure::repositories::mock::SequenceKeyGenerator;
use kurz::shared::error::AppError;
use serial_test::serial;
use std::sync::Arc;

fn request() -> CreateLinkRequest {
    CreateLinkRequest {
        original_url: "https://example.com/some/page".to_string(),
    }
}

#[tokio::test]
#[serial]
async fn test_create_link() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let user = common::register_test_user(&pool, "link_user", "password123").await;

    let use_case = CreateLinkUseCase::new(
        Arc::new(PostgresLinkRepository::new(pool.clone())),
        Arc::new(RandomKeyGenerator::new()),
    );

    let link = use_case
        .execute(request(), user.id)
        .await
        .expect("Failed to create link");

    assert_eq!(link.short_key.len(), 7);
    assert_eq!(link.original_url, "https://example.com/some/page");
    assert_eq!(link.user_id, user.id);
    assert_eq!(link.view_count, 0);
    assert!(!link.disabled);
}

#[tokio::test]
#[serial]
async fn test_collision_against_database_constraint() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let user = common::register_test_user(&pool, "link_user", "password123").await;
    let repo = Arc::new(PostgresLinkRepository::new(pool.clone()));

    // Occupy the only key the first generator position yields; the retry
    // must pick up the second candidate.
    let taken = CreateLinkUseCase::new(
        repo.clone(),
        Arc::new(SequenceKeyGenerator::new(&["collide"])),
    )
    .execute(request(), user.id)
    .await
    .expect("Seeding link failed");
    assert_eq!(taken.short_key, "collide");

    let link = CreateLinkUseCase::new(
        repo.clone(),
        Arc::new(SequenceKeyGenerator::new(&["collide", "fresh01"])),
    )
    .execute(request(), user.id)
    .await
    .expect("Retry should have found a free key");
    assert_eq!(link.short_key, "fresh01");
}

#[tokio::test]
#[serial]
async fn test_saturated_key_space_exhausts_budget() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let user = common::register_test_user(&pool, "link_user", "password123").await;
    let repo = Arc::new(PostgresLinkRepository::new(pool.clone()));

    CreateLinkUseCase::new(
        repo.clone(),
        Arc::new(SequenceKeyGenerator::new(&["onlykey"])),
    )
    .execute(request(), user.id)
    .await
    .expect("Seeding link failed");

    // The generator can only ever repeat the taken key
    let result = CreateLinkUseCase::new(
        repo,
        Arc::new(SequenceKeyGenerator::new(&["onlykey"])),
    )
    .execute(request(), user.id)
    .await;

    assert!(matches!(result, Err(AppError::KeyGenerationFailed)));
}

#[tokio::test]
#[serial]
async fn test_resolve_bumps_view_count() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;

    let user = common::register_test_user(&pool, "link_user", "password123").await;
    let repo = Arc::new(PostgresLinkRepository::new(pool.clone()));

    let link = CreateLinkUseCase::new(repo.clone(), Arc::new(RandomKeyGenerator::new()))
        .execute(request(), user.id)
        .await
        .expect("Failed to create link");

    let resolve = ResolveLinkUseCase::new(repo.clone());
    let viewed = resolve.execute(&link.short_key).await.unwrap();
    assert_eq!(viewed.view_count, 1);
    assert!(viewed.last_access_at >= link.last_access_at);

    let viewed = resolve.execute(&link.short_key).await.unwrap();
    assert_eq!(viewed.view_count, 2);

    // Disabled links stop resolving
    repo.disable(&link.short_key, user.id).await.unwrap();
    let result = resolve.execute(&link.short_key).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}
