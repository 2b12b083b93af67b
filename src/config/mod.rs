//! Configuration Module
//!
//! Loads and validates the collector configuration from TOML files.

pub mod loader;

pub use loader::{load_config, load_or_default, Config, ConfigError};
