//! Static content recommendations.
//!
//! Reports ship a fixed set of growth tips; there is no per-profile
//! personalization behind them.

/// Growth recommendations rendered on every completed report.
pub const GROWTH_RECOMMENDATIONS: [&str; 4] = [
    "Post more content during peak hours (6-9 PM)",
    "Use trending hashtags in your niche",
    "Engage more with your audience through comments",
    "Create more video content - it performs 40% better",
];

/// The recommendation list for a report.
#[must_use]
pub fn growth_recommendations() -> &'static [&'static str] {
    &GROWTH_RECOMMENDATIONS
}
