//! The `score` command: offline analysis of payload fixtures.
//!
//! Useful when poking at a provider payload capture without standing up the
//! database or touching the provider.

use std::path::Path;

use anyhow::Context;
use serde_json::Value;

pub(crate) fn run(posts_path: &Path, profile_path: Option<&Path>) -> anyhow::Result<()> {
    let posts = read_json(posts_path)?;
    let profile = profile_path.map(read_json).transpose()?;

    let report = cvr_analysis::build_report(profile.as_ref(), Some(&posts));
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}
