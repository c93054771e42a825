//! Database operations for the `creators` table.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;

use cvr_core::Platform;

use crate::DbError;

/// A row from the `creators` table.
///
/// `profile_data` and `posts_data` hold the raw provider JSON exactly as
/// fetched; reports are recomputed from them on read. `profile_score` is
/// computed once per ingestion and never recomputed incrementally.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CreatorRow {
    pub id: i64,
    pub url: String,
    pub platform: String,
    pub profile_data: Option<Value>,
    pub posts_data: Option<Value>,
    pub profile_score: Option<i16>,
    pub profile_error: Option<String>,
    pub posts_error: Option<String>,
    pub scraped_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const CREATOR_COLUMNS: &str = "id, url, platform, profile_data, posts_data, profile_score, \
     profile_error, posts_error, scraped_at, created_at, updated_at";

/// What one scrape-and-score pass produced for a creator.
///
/// Each section is independent: a failed profile fetch leaves
/// `profile_data` as `None` and carries the error string instead.
#[derive(Debug, Clone, Default)]
pub struct ScrapeOutcome {
    pub profile_data: Option<Value>,
    pub posts_data: Option<Value>,
    pub profile_score: Option<i16>,
    pub profile_error: Option<String>,
    pub posts_error: Option<String>,
}

/// Inserts a newly submitted creator and returns the full row.
///
/// Duplicate URLs are allowed by design; each submission gets its own row
/// and its own subsequent scrape.
///
/// # Errors
///
/// Returns [`DbError`] on database query failure.
pub async fn insert_creator(
    pool: &PgPool,
    url: &str,
    platform: Platform,
) -> Result<CreatorRow, DbError> {
    let query = format!(
        "INSERT INTO creators (url, platform) VALUES ($1, $2) RETURNING {CREATOR_COLUMNS}"
    );
    Ok(sqlx::query_as::<_, CreatorRow>(&query)
        .bind(url.trim())
        .bind(platform.as_str())
        .fetch_one(pool)
        .await?)
}

/// Gets a creator row by id, if it exists.
///
/// # Errors
///
/// Returns [`DbError`] on database query failure.
pub async fn get_creator(pool: &PgPool, id: i64) -> Result<Option<CreatorRow>, DbError> {
    let query = format!("SELECT {CREATOR_COLUMNS} FROM creators WHERE id = $1");
    Ok(sqlx::query_as::<_, CreatorRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?)
}

/// Records the result of one scrape-and-score pass against an existing row.
///
/// Overwrites all scrape fields and stamps `scraped_at`/`updated_at`; a
/// section that failed upstream is stored as NULL data plus its error
/// string.
///
/// # Errors
///
/// Returns [`DbError`] on database query failure.
pub async fn record_scrape_outcome(
    pool: &PgPool,
    id: i64,
    outcome: &ScrapeOutcome,
) -> Result<(), DbError> {
    sqlx::query(
        "UPDATE creators \
         SET profile_data = $2, posts_data = $3, profile_score = $4, \
             profile_error = $5, posts_error = $6, \
             scraped_at = now(), updated_at = now() \
         WHERE id = $1",
    )
    .bind(id)
    .bind(&outcome.profile_data)
    .bind(&outcome.posts_data)
    .bind(outcome.profile_score)
    .bind(&outcome.profile_error)
    .bind(&outcome.posts_error)
    .execute(pool)
    .await?;
    Ok(())
}
