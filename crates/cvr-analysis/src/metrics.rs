//! Aggregation of normalized posts into profile-level totals.

use cvr_core::{AggregateMetrics, NormalizedPost};

/// Sums all posts into [`AggregateMetrics`].
///
/// Every post counts toward `total_publications`, view-bearing or not.
/// Engagement is likes + comments + bookmarks; shares are totaled but do
/// not feed the rate. Exactly one rate formula applies: engagement over
/// views when any views exist, else engagement per post; zero posts yield
/// `None` so callers can render "N/A" instead of a fake zero.
#[must_use]
pub fn aggregate(posts: &[NormalizedPost]) -> AggregateMetrics {
    let mut metrics = AggregateMetrics::empty();
    let mut total_bookmarks: u64 = 0;

    for post in posts {
        metrics.total_publications += 1;
        metrics.total_views += post.views;
        metrics.total_likes += post.likes;
        metrics.total_comments += post.comments;
        metrics.total_shares += post.shares;
        total_bookmarks += post.bookmarks;
    }

    let total_engagement = metrics.total_likes + metrics.total_comments + total_bookmarks;

    metrics.engagement_rate_pct = if metrics.total_views > 0 {
        Some(total_engagement as f64 / metrics.total_views as f64 * 100.0)
    } else if posts.is_empty() {
        None
    } else {
        let per_post = total_engagement as f64 / posts.len() as f64;
        Some(if per_post.is_finite() { per_post } else { 0.0 })
    };

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(views: u64, likes: u64, comments: u64, bookmarks: u64, shares: u64) -> NormalizedPost {
        NormalizedPost {
            views,
            likes,
            comments,
            shares,
            bookmarks,
            caption: None,
            thumbnail_url: None,
        }
    }

    #[test]
    fn empty_input_yields_zero_totals_and_null_rate() {
        let metrics = aggregate(&[]);
        assert_eq!(metrics, AggregateMetrics::empty());
    }

    #[test]
    fn view_based_rate() {
        let metrics = aggregate(&[post(100, 5, 2, 0, 0)]);
        assert_eq!(metrics.total_publications, 1);
        assert_eq!(metrics.total_views, 100);
        assert_eq!(metrics.engagement_rate_pct, Some(7.0));
    }

    #[test]
    fn post_count_fallback_when_no_views() {
        let metrics = aggregate(&[post(0, 5, 0, 0, 0)]);
        assert_eq!(metrics.engagement_rate_pct, Some(5.0));
    }

    #[test]
    fn formulas_are_mutually_exclusive() {
        // One view-bearing post forces the view-based formula even when most
        // posts have no views.
        let metrics = aggregate(&[post(0, 50, 0, 0, 0), post(10, 1, 0, 0, 0)]);
        assert_eq!(metrics.engagement_rate_pct, Some(51.0 / 10.0 * 100.0));
    }

    #[test]
    fn bookmarks_feed_the_rate_but_shares_do_not() {
        let metrics = aggregate(&[post(200, 10, 0, 6, 1000)]);
        assert_eq!(metrics.total_shares, 1000);
        assert_eq!(metrics.engagement_rate_pct, Some(16.0 / 200.0 * 100.0));
    }

    #[test]
    fn publications_count_zero_view_posts() {
        let metrics = aggregate(&[post(0, 0, 0, 0, 0), post(50, 1, 0, 0, 0)]);
        assert_eq!(metrics.total_publications, 2);
    }

    #[test]
    fn totals_sum_across_posts() {
        let metrics = aggregate(&[post(100, 10, 3, 1, 2), post(300, 20, 7, 0, 4)]);
        assert_eq!(metrics.total_views, 400);
        assert_eq!(metrics.total_likes, 30);
        assert_eq!(metrics.total_comments, 10);
        assert_eq!(metrics.total_shares, 6);
        assert_eq!(metrics.engagement_rate_pct, Some(41.0 / 400.0 * 100.0));
    }
}
