//! CLI Command Handlers
//!
//! Argument definitions for the collector binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Memescope - Meme Coin Sector Snapshot Collector
#[derive(Parser, Debug)]
#[command(
    name = "memescope",
    version = env!("CARGO_PKG_VERSION"),
    about = "Meme coin sector snapshot collector for DexScreener and CoinGecko",
    long_about = "Memescope harvests meme-coin market metadata across Solana, Ethereum \
                  and Base from the DexScreener and CoinGecko public APIs, and writes \
                  dated JSON snapshots for downstream dashboards."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one collection pass and write the snapshot
    Collect(CollectCmd),

    /// Summarize the latest snapshot on disk
    Status(StatusCmd),
}

/// Run one collection pass
#[derive(Parser, Debug)]
pub struct CollectCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Override the output data directory
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Summarize the latest snapshot
#[derive(Parser, Debug)]
pub struct StatusCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Override the data directory to read from
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}
