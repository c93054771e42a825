//! Full report assembly from raw payload blobs.
//!
//! This is the composition the HTTP surface and the CLI both render: shape
//! normalization, per-post extraction, aggregation, ranking, quality
//! scoring, and the static recommendations, in one pass.

use serde::Serialize;
use serde_json::Value;

use cvr_core::{AggregateMetrics, ProfileOverview, RankedPost};

use crate::fields::extract_post;
use crate::metrics::aggregate;
use crate::profile::extract_overview;
use crate::quality::profile_quality_score;
use crate::rank::{top_posts, DEFAULT_TOP_POSTS};
use crate::recommend::growth_recommendations;
use crate::shape::normalize_posts;

/// Everything the report page renders for one creator.
#[derive(Debug, Clone, Serialize)]
pub struct CreatorReport {
    /// `None` when no profile payload was available at all; an empty
    /// overview means the payload was present but unrecognized.
    pub profile: Option<ProfileOverview>,
    pub metrics: AggregateMetrics,
    pub top_posts: Vec<RankedPost>,
    /// `None` renders as "N/A", never as a zero score.
    pub profile_score: Option<u8>,
    pub recommendations: Vec<String>,
}

/// Builds the report from whatever payloads the scrape produced.
///
/// Either blob may be absent (its fetch failed or has not happened yet);
/// the corresponding report sections degrade per the usual fallbacks and
/// the rest still compute.
#[must_use]
pub fn build_report(profile_data: Option<&Value>, posts_data: Option<&Value>) -> CreatorReport {
    let posts_raw = posts_data.map(normalize_posts).unwrap_or_default();
    let normalized: Vec<_> = posts_raw.iter().map(extract_post).collect();

    let profile_score =
        profile_quality_score(profile_data.unwrap_or(&Value::Null), &posts_raw);

    CreatorReport {
        profile: profile_data.map(extract_overview),
        metrics: aggregate(&normalized),
        top_posts: top_posts(&normalized, DEFAULT_TOP_POSTS),
        profile_score,
        recommendations: growth_recommendations()
            .iter()
            .map(ToString::to_string)
            .collect(),
    }
}
