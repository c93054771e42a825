mod ingest;
mod report;
mod score;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cvr-cli")]
#[command(about = "Creator virality report command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Submit a profile URL: create the record, scrape, score, persist,
    /// and print the report.
    Ingest {
        /// Instagram, TikTok, or YouTube profile URL.
        url: String,
    },
    /// Print the stored report for a creator id.
    Report {
        /// Creator record id.
        id: i64,
    },
    /// Score payload fixtures offline, without a database or provider.
    Score {
        /// Path to a posts payload JSON file (any supported envelope shape).
        #[arg(long)]
        posts: PathBuf,
        /// Path to a profile payload JSON file.
        #[arg(long)]
        profile: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Ingest { url } => ingest::run(&url).await,
        Commands::Report { id } => report::run(id).await,
        Commands::Score { posts, profile } => score::run(&posts, profile.as_deref()),
    }
}
