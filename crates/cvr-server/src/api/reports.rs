//! Report retrieval: recompute the virality report from stored payloads.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use cvr_analysis::CreatorReport;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// Lifecycle of a report as rendered to the caller.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(super) enum ReportStatus {
    /// The creator row exists but no scrape has completed yet.
    Analyzing,
    Completed,
}

/// The full report body shared by submission and retrieval responses.
#[derive(Debug, Serialize)]
pub(super) struct ReportData {
    pub id: i64,
    pub url: String,
    pub platform: String,
    pub status: ReportStatus,
    #[serde(flatten)]
    pub report: CreatorReport,
    pub profile_error: Option<String>,
    pub posts_error: Option<String>,
}

/// `GET /api/v1/reports/{id}` — rebuild the report from the stored raw
/// payloads. The normalization layer is deterministic, so a recompute
/// always matches what the submission response returned.
pub(super) async fn get_report(
    State(state): State<AppState>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ReportData>>, ApiError> {
    let row = cvr_db::get_creator(&state.pool, id)
        .await
        .map_err(|e| map_db_error(request_id.clone(), &e))?
        .ok_or_else(|| ApiError::new(request_id.clone(), "not_found", "creator not found"))?;

    let status = if row.scraped_at.is_some() {
        ReportStatus::Completed
    } else {
        ReportStatus::Analyzing
    };
    let report = cvr_analysis::build_report(row.profile_data.as_ref(), row.posts_data.as_ref());

    Ok(Json(ApiResponse {
        data: ReportData {
            id: row.id,
            url: row.url,
            platform: row.platform,
            status,
            report,
            profile_error: row.profile_error,
            posts_error: row.posts_error,
        },
        meta: ResponseMeta::new(request_id),
    }))
}
