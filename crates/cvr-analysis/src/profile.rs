//! Profile-header extraction from raw provider profile payloads.

use serde_json::Value;

use cvr_core::ProfileOverview;

use crate::value::first_non_empty_string;

const AVATAR_POINTERS: &[&str] = &[
    "/profile_pic_url",
    "/hd_profile_pic_url_info/url",
    "/profile_pic_url_hd",
    "/profile_pic_url_info/url",
];

const NAME_POINTERS: &[&str] = &["/full_name", "/name", "/username"];

const BIO_POINTERS: &[&str] = &["/biography", "/bio"];

/// Unwraps the user object from whichever envelope the provider used:
/// `{user}`, `{data:{user}}`, `{data}`, or the profile itself.
pub(crate) fn unwrap_user(profile: &Value) -> &Value {
    [
        profile.get("user"),
        profile.pointer("/data/user"),
        profile.get("data"),
    ]
    .into_iter()
    .flatten()
    .find(|candidate| candidate.is_object())
    .unwrap_or(profile)
}

/// Extracts the profile header rendered at the top of a report.
///
/// Every field is best-effort; an unrecognized payload yields an empty,
/// unverified overview rather than an error.
#[must_use]
pub fn extract_overview(profile: &Value) -> ProfileOverview {
    let user = unwrap_user(profile);
    ProfileOverview {
        avatar_url: first_non_empty_string(user, AVATAR_POINTERS),
        name: first_non_empty_string(user, NAME_POINTERS),
        username: first_non_empty_string(user, &["/username"]),
        bio: first_non_empty_string(user, BIO_POINTERS),
        is_verified: user
            .get("is_verified")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    }
}
