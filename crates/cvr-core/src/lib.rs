//! Shared domain types and configuration for the creator virality report
//! workspace.

mod app_config;
mod config;
mod platform;
mod report;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use platform::Platform;
pub use report::{AggregateMetrics, NormalizedPost, ProfileOverview, RankedPost};

/// Errors produced while loading or validating application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
