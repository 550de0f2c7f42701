mod common;

use sqlx::PgPool;
use std::sync::Arc;

use shortly::domain::repositories::{ClickRepository, StoreError};
use shortly::infrastructure::persistence::PgClickRepository;

#[sqlx::test]
async fn test_append_and_aggregate(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool.clone()));
    common::create_test_user(&pool, "owner0000001").await;
    common::create_test_alias(&pool, "abc12345", "https://x.test", "owner0000001").await;

    for _ in 0..3 {
        repo.append("abc12345").await.unwrap();
    }

    let counts = repo
        .daily_counts("abc12345", "owner0000001")
        .await
        .unwrap();

    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].count, 3);
}

#[sqlx::test]
async fn test_append_missing_alias(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool.clone()));

    let result = repo.append("missing1").await;

    assert!(matches!(result.unwrap_err(), StoreError::ForeignKeyViolation));
}

#[sqlx::test]
async fn test_daily_counts_group_by_day_ascending(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool.clone()));
    common::create_test_user(&pool, "owner0000001").await;
    common::create_test_alias(&pool, "abc12345", "https://x.test", "owner0000001").await;

    common::create_test_click(&pool, "abc12345", 2).await;
    common::create_test_click(&pool, "abc12345", 1).await;
    common::create_test_click(&pool, "abc12345", 1).await;
    common::create_test_click(&pool, "abc12345", 0).await;

    let counts = repo
        .daily_counts("abc12345", "owner0000001")
        .await
        .unwrap();

    assert_eq!(counts.len(), 3);
    assert!(counts.windows(2).all(|pair| pair[0].day < pair[1].day));
    assert_eq!(
        counts.iter().map(|c| c.count).collect::<Vec<_>>(),
        vec![1, 2, 1]
    );
}

#[sqlx::test]
async fn test_daily_counts_scoped_to_owner(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool.clone()));
    common::create_test_user(&pool, "owner0000001").await;
    common::create_test_user(&pool, "owner0000002").await;
    common::create_test_alias(&pool, "abc12345", "https://x.test", "owner0000001").await;
    common::create_test_click(&pool, "abc12345", 0).await;

    // The owner sees the count; anyone else sees nothing.
    let own = repo
        .daily_counts("abc12345", "owner0000001")
        .await
        .unwrap();
    assert_eq!(own.len(), 1);

    let foreign = repo
        .daily_counts("abc12345", "owner0000002")
        .await
        .unwrap();
    assert!(foreign.is_empty());
}

#[sqlx::test]
async fn test_purge_removes_only_stale_events(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool.clone()));
    common::create_test_user(&pool, "owner0000001").await;
    common::create_test_alias(&pool, "abc12345", "https://x.test", "owner0000001").await;

    common::create_test_click(&pool, "abc12345", 45).await;
    common::create_test_click(&pool, "abc12345", 31).await;
    common::create_test_click(&pool, "abc12345", 5).await;
    common::create_test_click(&pool, "abc12345", 0).await;

    let removed = repo.purge_older_than(30).await.unwrap();
    assert_eq!(removed, 2);

    let counts = repo
        .daily_counts("abc12345", "owner0000001")
        .await
        .unwrap();
    assert_eq!(counts.iter().map(|c| c.count).sum::<i64>(), 2);
}

#[sqlx::test]
async fn test_purge_with_nothing_stale(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool.clone()));
    common::create_test_user(&pool, "owner0000001").await;
    common::create_test_alias(&pool, "abc12345", "https://x.test", "owner0000001").await;
    common::create_test_click(&pool, "abc12345", 0).await;

    assert_eq!(repo.purge_older_than(30).await.unwrap(), 0);
}
