//! CLI error types.

use std::path::PathBuf;

use pricer_models::analytical::AnalyticalError;
use pricer_pricing::mc::ConfigError;
use thiserror::Error;

/// Errors surfaced by the `mcpricer` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for this program.
    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    /// A command-line or environment value was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Option parameters outside the model's domain.
    #[error(transparent)]
    Option(#[from] AnalyticalError),

    /// Simulation settings outside the engine's limits.
    #[error(transparent)]
    Simulation(#[from] ConfigError),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
