//! HTTP client for the external profile-scraping provider.
//!
//! The provider returns loosely-typed JSON blobs whose shape varies by
//! platform and API version; this crate fetches them verbatim and leaves
//! all interpretation to `cvr-analysis`.

pub mod client;
pub mod error;

pub use client::{ScrapeClient, ScrapeConfig};
pub use error::ScrapeError;
