//! Profile quality scoring.
//!
//! Blends three normalized signals — engagement rate against follower
//! count, posting cadence, and comment ratio — into a single 0–100
//! integer. Every division is guarded and every non-finite intermediate
//! collapses to 0, so the function is total: the only `None` outcomes are
//! an empty post list or a blend that cannot be computed.

use serde_json::Value;

use crate::fields::{comments_of, likes_of};
use crate::profile::unwrap_user;
use crate::value::first_finite;

/// How many leading posts feed the engagement window.
const ENGAGEMENT_WINDOW: usize = 30;

/// Linear normalization thresholds for the follower-relative engagement rate.
const ENGAGEMENT_LOW: f64 = 0.002;
const ENGAGEMENT_HIGH: f64 = 0.06;

/// Linear normalization thresholds for the comment-to-like ratio.
const COMMENT_RATIO_LOW: f64 = 0.02;
const COMMENT_RATIO_HIGH: f64 = 0.25;

/// Cadence window length and the triangular peak/cutoff in posts per week.
const CADENCE_WINDOW_WEEKS: f64 = 12.0;
const CADENCE_PEAK_PER_WEEK: f64 = 3.0;
const CADENCE_MAX_PER_WEEK: f64 = 7.0;

const WEEK_SECS: i64 = 7 * 24 * 60 * 60;

/// Follower-count candidates across the provider payload families, applied
/// to the unwrapped user object. First positive finite number wins.
const FOLLOWER_POINTERS: &[&str] = &[
    "/follower_count",
    "/edge_followed_by/count",
    "/followers_count",
    "/stats/followerCount",
    "/subscriber_count",
    "/subscriberCount",
    "/followers",
];

/// Epoch-second timestamp candidates tried before any string date parse.
const EPOCH_POINTERS: &[&str] = &[
    "/taken_at_timestamp",
    "/taken_at",
    "/create_time",
    "/createTime",
    "/created_time",
    "/node/taken_at_timestamp",
    "/timestamp",
];

/// String timestamp candidates, parsed as RFC 3339 or a bare date.
const DATE_POINTERS: &[&str] = &[
    "/timestamp",
    "/published_at",
    "/publishedAt",
    "/created_at",
    "/date",
];

/// Computes the 0–100 profile quality score from the raw profile payload
/// and the (already shape-normalized) raw post list.
///
/// Returns `None` when `posts` is empty. The score is deterministic: the
/// cadence window is anchored at the newest post timestamp, never at the
/// current clock.
///
/// The engagement window takes the first [`ENGAGEMENT_WINDOW`] posts in
/// their given order; the cadence math assumes the feed is newest-first.
#[must_use]
pub fn profile_quality_score(profile: &Value, posts: &[Value]) -> Option<u8> {
    if posts.is_empty() {
        return None;
    }

    let window = &posts[..posts.len().min(ENGAGEMENT_WINDOW)];

    let mut likes_sum: u64 = 0;
    let mut comments_sum: u64 = 0;
    for post in window {
        likes_sum += likes_of(post);
        comments_sum += comments_of(post);
    }
    let likes_sum = likes_sum as f64;
    let comments_sum = comments_sum as f64;

    let per_post = (likes_sum + 3.0 * comments_sum) / window.len() as f64;

    // When the follower count is unknown the rate self-normalizes, which
    // saturates at 1 for any nonzero engagement. Known weakness, kept for
    // parity with the shipped behavior.
    let e_raw = match resolve_followers(profile) {
        Some(followers) => per_post / followers,
        None => per_post / per_post.max(1.0),
    };
    let e_norm = normalize_linear(e_raw, ENGAGEMENT_LOW, ENGAGEMENT_HIGH);

    let c_raw = if likes_sum > 0.0 {
        comments_sum / likes_sum
    } else {
        0.0
    };
    let c_norm = normalize_linear(c_raw, COMMENT_RATIO_LOW, COMMENT_RATIO_HIGH);

    let f_norm = cadence_norm(window);

    let blended = 0.5 * e_norm + 0.3 * f_norm + 0.2 * c_norm;
    let score = clamp01(finite_or_zero(blended) / 100.0) * 100.0;
    Some(score.round() as u8)
}

/// Resolves the follower count from the profile payload.
///
/// Zero and negative candidates fall through — a provider that reports
/// `followers: 0` is indistinguishable from one that omits the field.
fn resolve_followers(profile: &Value) -> Option<f64> {
    let user = unwrap_user(profile);
    FOLLOWER_POINTERS
        .iter()
        .filter_map(|ptr| user.pointer(ptr))
        .filter_map(crate::value::finite_f64)
        .find(|&count| count > 0.0)
}

/// Posting-cadence signal in 0–100.
///
/// Needs at least two timestamped posts; the rate is posts per week over
/// the 12-week window ending at the newest timestamp, mapped through a
/// triangular curve that peaks at 3/week and dies past 7/week.
fn cadence_norm(posts: &[Value]) -> f64 {
    let stamps: Vec<i64> = posts.iter().filter_map(post_timestamp).collect();
    if stamps.len() < 2 {
        return 0.0;
    }

    let newest = stamps.iter().copied().max().unwrap_or(0);
    let window_start = newest - (CADENCE_WINDOW_WEEKS as i64) * WEEK_SECS;
    let in_window = stamps.iter().filter(|&&t| t >= window_start).count();

    let per_week = finite_or_zero(in_window as f64 / CADENCE_WINDOW_WEEKS);
    triangular(per_week) * 100.0
}

/// Maps posts-per-week to [0,1]: a linear ramp up to the peak, a linear
/// ramp down to the cutoff, zero beyond.
fn triangular(per_week: f64) -> f64 {
    if per_week <= 0.0 {
        0.0
    } else if per_week <= CADENCE_PEAK_PER_WEEK {
        per_week / CADENCE_PEAK_PER_WEEK
    } else if per_week <= CADENCE_MAX_PER_WEEK {
        1.0 - (per_week - CADENCE_PEAK_PER_WEEK) / (CADENCE_MAX_PER_WEEK - CADENCE_PEAK_PER_WEEK)
    } else {
        0.0
    }
}

/// Extracts one post's timestamp as epoch seconds.
///
/// Numeric candidates win over string dates; epochs that are clearly in
/// milliseconds are scaled down.
fn post_timestamp(post: &Value) -> Option<i64> {
    if let Some(epoch) = first_finite(post, EPOCH_POINTERS) {
        let secs = if epoch.abs() >= 1e12 {
            epoch / 1000.0
        } else {
            epoch
        };
        return Some(secs as i64);
    }

    DATE_POINTERS
        .iter()
        .filter_map(|ptr| post.pointer(ptr))
        .filter_map(Value::as_str)
        .find_map(parse_date_str)
}

fn parse_date_str(raw: &str) -> Option<i64> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
}

fn normalize_linear(value: f64, low: f64, high: f64) -> f64 {
    clamp01(finite_or_zero((value - low) / (high - low))) * 100.0
}

fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
