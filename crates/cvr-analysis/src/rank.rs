//! Top-post ranking by weighted per-post engagement.

use std::cmp::Ordering;

use cvr_core::{NormalizedPost, RankedPost};

/// Default number of posts a report surfaces.
pub const DEFAULT_TOP_POSTS: usize = 5;

/// Ranks the `n` highest-engagement posts.
///
/// Only view-bearing posts are eligible; each is scored as
/// `(likes + 3 * comments) / views * 100` and sorted descending. The sort
/// is stable, so tied posts keep their input order. Returns fewer than `n`
/// records (possibly none) when fewer qualify — an empty result means "no
/// data", not an error.
#[must_use]
pub fn top_posts(posts: &[NormalizedPost], n: usize) -> Vec<RankedPost> {
    let mut scored: Vec<(&NormalizedPost, f64)> = posts
        .iter()
        .filter(|post| post.views > 0)
        .map(|post| (post, engagement_pct(post)))
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(idx, (post, pct))| RankedPost {
            post: post.clone(),
            rank: idx + 1,
            engagement_pct: pct,
        })
        .collect()
}

fn engagement_pct(post: &NormalizedPost) -> f64 {
    (post.likes as f64 + 3.0 * post.comments as f64) / post.views as f64 * 100.0
}
