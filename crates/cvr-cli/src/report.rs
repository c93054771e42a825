//! The `report` command: rebuild a stored creator's report.

use anyhow::Context;

pub(crate) async fn run(id: i64) -> anyhow::Result<()> {
    let config = cvr_core::load_app_config()?;
    let pool = cvr_db::connect_pool(&config.database_url, cvr_db::PoolConfig::from_app_config(&config))
        .await
        .context("failed to connect to database")?;

    let row = cvr_db::get_creator(&pool, id)
        .await?
        .with_context(|| format!("no creator with id {id}"))?;

    println!("url: {} ({})", row.url, row.platform);
    match row.scraped_at {
        Some(at) => println!("scraped at: {at}"),
        None => println!("not scraped yet"),
    }
    if let Some(error) = &row.profile_error {
        println!("profile fetch degraded: {error}");
    }
    if let Some(error) = &row.posts_error {
        println!("posts fetch degraded: {error}");
    }

    let report = cvr_analysis::build_report(row.profile_data.as_ref(), row.posts_data.as_ref());
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
