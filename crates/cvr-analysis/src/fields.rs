//! Per-post field extraction across provider-specific key names.
//!
//! Each metric resolves through a fixed-priority pointer table; the first
//! candidate that parses to a finite number wins and everything else
//! defaults to 0. Caption and thumbnail resolve through their own ordered
//! tables, degrading to absent. The tables cover the Instagram
//! (`edge_*` GraphQL and `*_count` v1), TikTok (`play_count`, `stats.*`),
//! and YouTube (`video_view_count`, `title`) payload families.

use serde_json::Value;

use cvr_core::NormalizedPost;

use crate::value::{count_from, first_finite, first_non_empty_string};

const VIEW_POINTERS: &[&str] = &["/view_count", "/play_count", "/video_view_count", "/views"];

const LIKE_POINTERS: &[&str] = &["/like_count", "/edge_liked_by/count", "/likes"];

const COMMENT_POINTERS: &[&str] = &["/comment_count", "/edge_media_to_comment/count", "/comments"];

const BOOKMARK_POINTERS: &[&str] = &["/saved_count", "/save_count", "/bookmark_count", "/bookmarks"];

const SHARE_POINTERS: &[&str] = &[
    "/share_count",
    "/shares",
    "/reshare_count",
    "/repost_count",
    "/stats/shareCount",
    "/shareCount",
];

const CAPTION_POINTERS: &[&str] = &[
    "/caption",
    "/title",
    "/edge_media_to_caption/edges/0/node/text",
    "/node/edge_media_to_caption/edges/0/node/text",
    "/caption_text",
    "/text",
];

const THUMBNAIL_POINTERS: &[&str] = &[
    "/thumbnail_url",
    "/thumbnail_src",
    "/display_url",
    "/image_versions2/candidates/0/url",
    "/node/display_url",
    "/thumbnail_resources/0/src",
    "/video/cover",
    "/video/dynamic_cover",
    "/cover_url",
    "/thumbnail",
];

/// Reduces one raw provider post to the stable [`NormalizedPost`] model.
///
/// Total: any missing or malformed field degrades to 0/absent without
/// affecting the other fields. Feeding a serialized `NormalizedPost` back
/// through this function is a no-op.
#[must_use]
pub fn extract_post(post: &Value) -> NormalizedPost {
    NormalizedPost {
        views: count_from(first_finite(post, VIEW_POINTERS)),
        likes: likes_of(post),
        comments: comments_of(post),
        shares: count_from(first_finite(post, SHARE_POINTERS)),
        bookmarks: count_from(first_finite(post, BOOKMARK_POINTERS)),
        caption: resolve_caption(post),
        thumbnail_url: first_non_empty_string(post, THUMBNAIL_POINTERS),
    }
}

/// Like count via the shared precedence table. Also used by the quality
/// scorer so both paths agree on which key wins.
pub(crate) fn likes_of(post: &Value) -> u64 {
    count_from(first_finite(post, LIKE_POINTERS))
}

/// Comment count via the shared precedence table.
pub(crate) fn comments_of(post: &Value) -> u64 {
    count_from(first_finite(post, COMMENT_POINTERS))
}

/// Resolves the caption through the ordered candidate table.
///
/// A candidate that resolves to an empty string (or an empty join) falls
/// through to the next entry, mirroring how absent and blank captions are
/// indistinguishable in provider payloads.
fn resolve_caption(post: &Value) -> Option<String> {
    CAPTION_POINTERS
        .iter()
        .filter_map(|ptr| post.pointer(ptr))
        .find_map(caption_text)
}

/// Coerces one caption candidate to text.
///
/// Strings are used as-is; `{text}` objects contribute their text field;
/// arrays join their non-empty string/`.text` entries with single spaces.
/// Returns `None` when the result trims to empty.
fn caption_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Object(_) => value.pointer("/text").and_then(Value::as_str)?.to_string(),
        Value::Array(parts) => parts
            .iter()
            .filter_map(|part| match part {
                Value::String(s) => Some(s.as_str()),
                Value::Object(_) => part.pointer("/text").and_then(Value::as_str),
                _ => None,
            })
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        _ => return None,
    };
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_post_degrades_to_zeros_and_absent() {
        let post = extract_post(&json!({}));
        assert_eq!(post.views, 0);
        assert_eq!(post.likes, 0);
        assert_eq!(post.comments, 0);
        assert_eq!(post.shares, 0);
        assert_eq!(post.bookmarks, 0);
        assert!(post.caption.is_none());
        assert!(post.thumbnail_url.is_none());
    }

    #[test]
    fn instagram_graphql_shape() {
        let raw = json!({
            "video_view_count": 15000,
            "edge_liked_by": {"count": 1200},
            "edge_media_to_comment": {"count": 85},
            "edge_media_to_caption": {"edges": [{"node": {"text": "sunset reel"}}]},
            "display_url": "https://scontent.example/p1.jpg"
        });
        let post = extract_post(&raw);
        assert_eq!(post.views, 15000);
        assert_eq!(post.likes, 1200);
        assert_eq!(post.comments, 85);
        assert_eq!(post.caption.as_deref(), Some("sunset reel"));
        assert_eq!(
            post.thumbnail_url.as_deref(),
            Some("https://scontent.example/p1.jpg")
        );
    }

    #[test]
    fn tiktok_shape_with_stats_share_count() {
        let raw = json!({
            "play_count": 90000,
            "like_count": 4000,
            "comment_count": 150,
            "save_count": 220,
            "stats": {"shareCount": 75},
            "video": {"cover": "https://p16.example/cover.webp"},
            "text": "POV: normalizing payloads"
        });
        let post = extract_post(&raw);
        assert_eq!(post.views, 90000);
        assert_eq!(post.likes, 4000);
        assert_eq!(post.comments, 150);
        assert_eq!(post.bookmarks, 220);
        assert_eq!(post.shares, 75);
        assert_eq!(post.caption.as_deref(), Some("POV: normalizing payloads"));
        assert_eq!(
            post.thumbnail_url.as_deref(),
            Some("https://p16.example/cover.webp")
        );
    }

    #[test]
    fn numeric_strings_parse() {
        let raw = json!({"views": "3200", "likes": "41"});
        let post = extract_post(&raw);
        assert_eq!(post.views, 3200);
        assert_eq!(post.likes, 41);
    }

    #[test]
    fn first_key_in_table_wins_even_when_zero() {
        let raw = json!({"view_count": 0, "views": 777});
        assert_eq!(extract_post(&raw).views, 0);
    }

    #[test]
    fn caption_object_with_text_field() {
        let raw = json!({"caption": {"text": "  beach day  "}});
        assert_eq!(extract_post(&raw).caption.as_deref(), Some("beach day"));
    }

    #[test]
    fn caption_array_joins_string_and_text_entries() {
        let raw = json!({"caption": ["part one", {"text": "part two"}, "", {"other": 1}]});
        assert_eq!(
            extract_post(&raw).caption.as_deref(),
            Some("part one part two")
        );
    }

    #[test]
    fn empty_caption_falls_through_to_title() {
        let raw = json!({"caption": "   ", "title": "How I edit my videos"});
        assert_eq!(
            extract_post(&raw).caption.as_deref(),
            Some("How I edit my videos")
        );
    }

    #[test]
    fn thumbnail_nested_candidates_and_resources() {
        let raw = json!({
            "image_versions2": {"candidates": [{"url": "https://cdn.example/best.jpg"}]}
        });
        assert_eq!(
            extract_post(&raw).thumbnail_url.as_deref(),
            Some("https://cdn.example/best.jpg")
        );

        let raw = json!({
            "thumbnail_resources": [{"src": "https://cdn.example/small.jpg"}]
        });
        assert_eq!(
            extract_post(&raw).thumbnail_url.as_deref(),
            Some("https://cdn.example/small.jpg")
        );
    }

    #[test]
    fn extraction_is_idempotent_on_its_own_output() {
        let raw = json!({
            "play_count": 500,
            "like_count": 60,
            "comment_count": 9,
            "share_count": 3,
            "saved_count": 12,
            "caption": "roundtrip",
            "thumbnail": "https://cdn.example/t.jpg"
        });
        let once = extract_post(&raw);
        let twice = extract_post(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn malformed_fields_do_not_affect_others() {
        let raw = json!({
            "view_count": {"weird": true},
            "like_count": 10,
            "comment_count": [1, 2],
            "caption": 42
        });
        let post = extract_post(&raw);
        assert_eq!(post.views, 0);
        assert_eq!(post.likes, 10);
        assert_eq!(post.comments, 0);
        assert!(post.caption.is_none());
    }
}
