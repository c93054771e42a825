//! Posts-payload envelope resolution.
//!
//! Scraping providers wrap the same flat post list in half a dozen shapes:
//! a bare array, `{items}`, `{data:{items}}`, GraphQL-style `{edges}` (with
//! or without a `node` wrapper per edge), `{data:{edges}}`, `{data:{posts}}`,
//! or `{posts}`. The probes below are tried top to bottom and the first
//! matching shape wins; an unrecognized payload resolves to an empty list,
//! never an error.

use serde_json::Value;

type EnvelopeProbe = fn(&Value) -> Option<Vec<Value>>;

/// Ordered envelope dispatch table. Order is the contract: a payload that
/// somehow carries both `items` and `posts` resolves as `items`.
const ENVELOPES: &[(&str, EnvelopeProbe)] = &[
    ("array", probe_bare_array),
    ("items", probe_items),
    ("data.items", probe_data_items),
    ("edges", probe_edges),
    ("data.edges", probe_data_edges),
    ("data.posts", probe_data_posts),
    ("posts", probe_posts),
];

/// Extracts the flat post list from an arbitrarily-shaped posts payload.
///
/// Returns an empty vec for null, absent, or unrecognized shapes.
#[must_use]
pub fn normalize_posts(raw: &Value) -> Vec<Value> {
    for (envelope, probe) in ENVELOPES {
        if let Some(posts) = probe(raw) {
            tracing::debug!(envelope, count = posts.len(), "resolved posts payload");
            return posts;
        }
    }
    tracing::debug!("unrecognized posts payload shape");
    Vec::new()
}

fn probe_bare_array(raw: &Value) -> Option<Vec<Value>> {
    raw.as_array().cloned()
}

fn probe_items(raw: &Value) -> Option<Vec<Value>> {
    array_at(raw, "/items")
}

fn probe_data_items(raw: &Value) -> Option<Vec<Value>> {
    array_at(raw, "/data/items")
}

fn probe_edges(raw: &Value) -> Option<Vec<Value>> {
    raw.pointer("/edges").and_then(Value::as_array).map(|edges| unwrap_edges(edges))
}

fn probe_data_edges(raw: &Value) -> Option<Vec<Value>> {
    raw.pointer("/data/edges")
        .and_then(Value::as_array)
        .map(|edges| unwrap_edges(edges))
}

fn probe_data_posts(raw: &Value) -> Option<Vec<Value>> {
    array_at(raw, "/data/posts")
}

fn probe_posts(raw: &Value) -> Option<Vec<Value>> {
    array_at(raw, "/posts")
}

fn array_at(raw: &Value, pointer: &str) -> Option<Vec<Value>> {
    raw.pointer(pointer).and_then(Value::as_array).cloned()
}

/// GraphQL edges wrap the post under `node`; some providers flatten the post
/// into the edge itself. Unwrap where possible and drop empty results.
fn unwrap_edges(edges: &[Value]) -> Vec<Value> {
    edges
        .iter()
        .map(|edge| edge.get("node").unwrap_or(edge))
        .filter(|post| !post.is_null())
        .cloned()
        .collect()
}
