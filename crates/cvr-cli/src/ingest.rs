//! The `ingest` command: the full scrape-and-score pass for one URL.
//!
//! Mirrors the server's submission pipeline: create record, fetch profile,
//! fetch posts, compute the report, persist the outcome, print the report.

use anyhow::Context;

use cvr_core::Platform;
use cvr_db::ScrapeOutcome;

pub(crate) async fn run(url: &str) -> anyhow::Result<()> {
    let url = url.trim();
    let platform = Platform::from_profile_url(url)
        .context("URL must be an Instagram, TikTok, or YouTube profile URL")?;

    let config = cvr_core::load_app_config()?;
    let pool = cvr_db::connect_pool(&config.database_url, cvr_db::PoolConfig::from_app_config(&config))
        .await
        .context("failed to connect to database")?;
    cvr_db::run_migrations(&pool).await?;

    let client = cvr_scraper::ScrapeClient::new(cvr_scraper::ScrapeConfig::from_app_config(
        &config,
    ))?;

    let row = cvr_db::insert_creator(&pool, url, platform).await?;
    tracing::info!(creator_id = row.id, %platform, "creator record created");

    let (profile_data, profile_error) = match client.fetch_profile(platform, url).await {
        Ok(value) => (Some(value), None),
        Err(e) => {
            tracing::warn!(error = %e, "profile fetch failed");
            (None, Some(e.to_string()))
        }
    };
    let (posts_data, posts_error) = match client
        .fetch_posts(platform, url, config.scrape_posts_count)
        .await
    {
        Ok(value) => (Some(value), None),
        Err(e) => {
            tracing::warn!(error = %e, "posts fetch failed");
            (None, Some(e.to_string()))
        }
    };

    let report = cvr_analysis::build_report(profile_data.as_ref(), posts_data.as_ref());

    let outcome = ScrapeOutcome {
        profile_data,
        posts_data,
        profile_score: report.profile_score.map(i16::from),
        profile_error: profile_error.clone(),
        posts_error: posts_error.clone(),
    };
    cvr_db::record_scrape_outcome(&pool, row.id, &outcome).await?;

    println!("creator id: {}", row.id);
    if let Some(error) = &profile_error {
        println!("profile fetch degraded: {error}");
    }
    if let Some(error) = &posts_error {
        println!("posts fetch degraded: {error}");
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
