//! Creator submission and retrieval.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cvr_core::Platform;

use super::reports::{ReportData, ReportStatus};
use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::ingest::scrape_and_score;
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct SubmitCreatorRequest {
    pub url: String,
}

/// Stored creator row summary, without the raw payload blobs.
#[derive(Debug, Serialize)]
pub(super) struct CreatorData {
    pub id: i64,
    pub url: String,
    pub platform: String,
    pub profile_score: Option<i16>,
    pub profile_error: Option<String>,
    pub posts_error: Option<String>,
    pub scraped_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<cvr_db::CreatorRow> for CreatorData {
    fn from(row: cvr_db::CreatorRow) -> Self {
        Self {
            id: row.id,
            url: row.url,
            platform: row.platform,
            profile_score: row.profile_score,
            profile_error: row.profile_error,
            posts_error: row.posts_error,
            scraped_at: row.scraped_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// `POST /api/v1/creators` — submit a profile URL and run the whole
/// scrape-and-score pass inline: create record, fetch profile, fetch posts,
/// compute the report, persist, respond.
///
/// Resubmitting a URL creates a fresh record and a fresh scrape; nothing is
/// deduplicated. A persist failure after a successful scrape is logged and
/// the computed report is still returned.
pub(super) async fn submit_creator(
    State(state): State<AppState>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    Json(body): Json<SubmitCreatorRequest>,
) -> Result<Json<ApiResponse<ReportData>>, ApiError> {
    let url = body.url.trim();
    let Some(platform) = Platform::from_profile_url(url) else {
        return Err(ApiError::new(
            request_id,
            "validation_error",
            "URL must be an Instagram, TikTok, or YouTube profile URL",
        ));
    };

    let row = cvr_db::insert_creator(&state.pool, url, platform)
        .await
        .map_err(|e| map_db_error(request_id.clone(), &e))?;
    tracing::info!(creator_id = row.id, %platform, url, "creator submitted");

    let result = scrape_and_score(
        &state.scrape,
        platform,
        url,
        state.config.scrape_posts_count,
    )
    .await;

    if let Err(e) = cvr_db::record_scrape_outcome(&state.pool, row.id, &result.outcome).await {
        tracing::error!(creator_id = row.id, error = %e, "failed to persist scrape outcome");
    }

    Ok(Json(ApiResponse {
        data: ReportData {
            id: row.id,
            url: row.url,
            platform: row.platform,
            status: ReportStatus::Completed,
            report: result.report,
            profile_error: result.outcome.profile_error,
            posts_error: result.outcome.posts_error,
        },
        meta: ResponseMeta::new(request_id),
    }))
}

/// `GET /api/v1/creators/{id}` — stored record summary.
pub(super) async fn get_creator(
    State(state): State<AppState>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<CreatorData>>, ApiError> {
    let row = cvr_db::get_creator(&state.pool, id)
        .await
        .map_err(|e| map_db_error(request_id.clone(), &e))?
        .ok_or_else(|| ApiError::new(request_id.clone(), "not_found", "creator not found"))?;

    Ok(Json(ApiResponse {
        data: CreatorData::from(row),
        meta: ResponseMeta::new(request_id),
    }))
}
