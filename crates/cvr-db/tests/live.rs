//! Live round-trip tests against a real Postgres instance.
//!
//! Require `DATABASE_URL` in the environment and a migrated schema.
//! Run with: `cargo test -p cvr-db --test live -- --ignored`

use serde_json::json;

use cvr_core::Platform;
use cvr_db::{
    connect_pool, get_creator, insert_creator, record_scrape_outcome, run_migrations, PoolConfig,
    ScrapeOutcome,
};

async fn live_pool() -> sqlx::PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL not set");
    let pool = connect_pool(&url, PoolConfig::default())
        .await
        .expect("failed to connect");
    run_migrations(&pool).await.expect("migrations failed");
    pool
}

#[tokio::test]
#[ignore]
async fn creator_scrape_round_trip() {
    let pool = live_pool().await;

    let created = insert_creator(
        &pool,
        "https://www.instagram.com/cvr-live-test",
        Platform::Instagram,
    )
    .await
    .expect("insert failed");
    assert_eq!(created.platform, "instagram");
    assert!(created.profile_data.is_none());
    assert!(created.scraped_at.is_none());

    let outcome = ScrapeOutcome {
        profile_data: Some(json!({"user": {"username": "cvr-live-test"}})),
        posts_data: Some(json!({"items": [{"like_count": 10, "view_count": 100}]})),
        profile_score: Some(42),
        profile_error: None,
        posts_error: Some("posts endpoint timed out".to_string()),
    };
    record_scrape_outcome(&pool, created.id, &outcome)
        .await
        .expect("update failed");

    let fetched = get_creator(&pool, created.id)
        .await
        .expect("get failed")
        .expect("row vanished");
    assert_eq!(fetched.profile_score, Some(42));
    assert_eq!(
        fetched.posts_error.as_deref(),
        Some("posts endpoint timed out")
    );
    assert!(fetched.scraped_at.is_some());
    assert_eq!(
        fetched.profile_data.unwrap()["user"]["username"],
        "cvr-live-test"
    );
}

#[tokio::test]
#[ignore]
async fn duplicate_urls_create_independent_rows() {
    let pool = live_pool().await;
    let url = "https://www.tiktok.com/@cvr-dup-test";

    let first = insert_creator(&pool, url, Platform::TikTok)
        .await
        .expect("first insert failed");
    let second = insert_creator(&pool, url, Platform::TikTok)
        .await
        .expect("second insert failed");

    assert_ne!(first.id, second.id, "duplicate submissions must not dedup");
}

#[tokio::test]
#[ignore]
async fn get_creator_returns_none_for_unknown_id() {
    let pool = live_pool().await;
    let row = get_creator(&pool, i64::MAX).await.expect("query failed");
    assert!(row.is_none());
}
