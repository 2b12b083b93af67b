//! CLI Adapter
//!
//! Command-line interface for the collector.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{CliApp, CollectCmd, Command, StatusCmd};
