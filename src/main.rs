//! Memescope - Meme Coin Sector Snapshot Collector
//!
//! One-shot batch job collecting meme-coin market metadata into JSON snapshots.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use memescope::adapters::cli::{CliApp, CollectCmd, Command, StatusCmd};
use memescope::adapters::{CoinGeckoClient, DexScreenerClient};
use memescope::application::SnapshotCollector;
use memescope::config::load_or_default;
use memescope::domain::CollectionSnapshot;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (nothing is required from it)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    init_logging(app.quiet, app.debug);

    match app.command {
        Command::Collect(cmd) => collect_command(cmd).await,
        Command::Status(cmd) => status_command(cmd).await,
    }
}

fn init_logging(quiet: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).init();
}

async fn collect_command(cmd: CollectCmd) -> Result<()> {
    let mut config = load_or_default(&cmd.config).context("Failed to load configuration")?;
    if let Some(dir) = cmd.data_dir {
        config.output.data_dir = dir;
    }

    let dexscreener =
        DexScreenerClient::new(&config).context("Failed to create DexScreener client")?;
    let coingecko = CoinGeckoClient::new(&config).context("Failed to create CoinGecko client")?;

    let collector = SnapshotCollector::new(config, dexscreener, coingecko);
    collector.run().await.context("Failed to persist snapshot")?;

    Ok(())
}

async fn status_command(cmd: StatusCmd) -> Result<()> {
    let mut config = load_or_default(&cmd.config).context("Failed to load configuration")?;
    if let Some(dir) = cmd.data_dir {
        config.output.data_dir = dir;
    }

    match CollectionSnapshot::load_latest(&config.output.data_dir)
        .context("Failed to read latest snapshot")?
    {
        Some(snapshot) => {
            println!("Snapshot: {}", snapshot.meta.timestamp);
            println!("Chains:   {}", snapshot.meta.chains.join(", "));
            println!("Sources:  {}", snapshot.meta.sources.join(", "));
            println!("Top boosts:      {}", snapshot.top_boosts.len());
            println!("Latest boosts:   {}", snapshot.latest_boosts.len());
            println!("Latest profiles: {}", snapshot.latest_profiles.len());
            println!("Trending:        {}", snapshot.trending.len());
            println!("Meme coins:      {}", snapshot.meme_coins.len());
        }
        None => {
            println!(
                "No snapshot found in {} - run `memescope collect` first",
                config.output.data_dir.display()
            );
        }
    }

    Ok(())
}
