use serde::{Deserialize, Serialize};

/// A single post reduced to the stable metrics model, regardless of which
/// provider payload shape it came from.
///
/// Field names double as the canonical wire form: running a serialized
/// `NormalizedPost` back through the field extractor yields the same record,
/// because `views`, `likes`, `caption`, `thumbnail_url`, etc. all appear in
/// the extractor's fallback tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPost {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub bookmarks: u64,
    pub caption: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl NormalizedPost {
    /// Interaction count used for engagement-rate math: likes + comments +
    /// bookmarks. Shares are tracked but excluded from this sum.
    #[must_use]
    pub fn engagement(&self) -> u64 {
        self.likes + self.comments + self.bookmarks
    }
}

/// Totals across all posts of one profile, plus the derived engagement rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Count of all posts, view-bearing or not.
    pub total_publications: u64,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub total_shares: u64,
    /// `None` only when there were zero posts. Otherwise exactly one of two
    /// formulas applies: engagement / views * 100 when any views exist, else
    /// engagement / post count.
    pub engagement_rate_pct: Option<f64>,
}

impl AggregateMetrics {
    /// The all-zero metrics for an empty post list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_publications: 0,
            total_views: 0,
            total_likes: 0,
            total_comments: 0,
            total_shares: 0,
            engagement_rate_pct: None,
        }
    }
}

/// A top-performing post: the normalized record plus its 1-based rank and
/// per-post engagement percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPost {
    #[serde(flatten)]
    pub post: NormalizedPost,
    pub rank: usize,
    /// `(likes + 3 * comments) / views * 100`; only view-bearing posts are
    /// ever ranked, so the denominator is always positive.
    pub engagement_pct: f64,
}

/// Profile header data extracted defensively from the raw provider payload.
///
/// Every field is best-effort; a payload that yields none of them still
/// produces a valid (empty) overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileOverview {
    pub avatar_url: Option<String>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub is_verified: bool,
}
