#![allow(dead_code)]

use sqlx::PgPool;

pub async fn create_test_user(pool: &PgPool, id: &str) {
    sqlx::query("INSERT INTO users (id, email, password) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(format!("{id}@example.com"))
        .bind("$2a$10$AAAAAAAAAAAAAAAAAAAAAA")
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_alias(pool: &PgPool, id: &str, link: &str, owner_id: &str) {
    sqlx::query("INSERT INTO aliases (id, link, owner_id) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(link)
        .bind(owner_id)
        .execute(pool)
        .await
        .unwrap();
}

/// Inserts a click event backdated by `days_back` whole days.
pub async fn create_test_click(pool: &PgPool, alias_id: &str, days_back: i32) {
    sqlx::query(
        "INSERT INTO click_events (alias_id, created_at)
         VALUES ($1, now() - make_interval(days => $2))",
    )
    .bind(alias_id)
    .bind(days_back)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn total_hits(pool: &PgPool, alias_id: &str) -> i64 {
    sqlx::query_scalar("SELECT total_hits FROM aliases WHERE id = $1")
        .bind(alias_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
