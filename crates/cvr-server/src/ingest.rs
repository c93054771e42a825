//! The scrape-and-score pass for one submitted creator.
//!
//! Strictly sequential: fetch profile, fetch posts, build the report,
//! record the outcome. The two fetches are the only suspension points and
//! each failure degrades its own report section rather than failing the
//! request.

use serde_json::Value;

use cvr_analysis::{build_report, CreatorReport};
use cvr_core::Platform;
use cvr_db::ScrapeOutcome;
use cvr_scraper::ScrapeClient;

pub struct IngestResult {
    pub outcome: ScrapeOutcome,
    pub report: CreatorReport,
}

/// Runs the full pipeline for one creator URL and returns both the report
/// (for the response) and the outcome (for persistence). Never fails:
/// upstream errors are folded into the outcome's error fields.
pub async fn scrape_and_score(
    client: &ScrapeClient,
    platform: Platform,
    url: &str,
    posts_count: u32,
) -> IngestResult {
    let (profile_data, profile_error) = fold_fetch(
        client.fetch_profile(platform, url).await,
        platform,
        url,
        "profile",
    );
    let (posts_data, posts_error) = fold_fetch(
        client.fetch_posts(platform, url, posts_count).await,
        platform,
        url,
        "posts",
    );

    let report = build_report(profile_data.as_ref(), posts_data.as_ref());

    let outcome = ScrapeOutcome {
        profile_data,
        posts_data,
        profile_score: report.profile_score.map(i16::from),
        profile_error,
        posts_error,
    };

    IngestResult { outcome, report }
}

fn fold_fetch(
    result: Result<Value, cvr_scraper::ScrapeError>,
    platform: Platform,
    url: &str,
    section: &str,
) -> (Option<Value>, Option<String>) {
    match result {
        Ok(value) => (Some(value), None),
        Err(e) => {
            tracing::warn!(%platform, url, section, error = %e, "scrape fetch failed");
            (None, Some(e.to_string()))
        }
    }
}
