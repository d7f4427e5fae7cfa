//! Error types for Monte Carlo configuration.
//!
//! Simulation itself never fails; these errors only come out of the
//! validated [`MonteCarloConfigBuilder`](super::MonteCarloConfigBuilder) path.

use thiserror::Error;

use super::config::{MAX_PATHS, MAX_SUBINTERVALS, MAX_WORKERS};

/// Configuration error for the Monte Carlo engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside `[1, MAX_PATHS]`.
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),

    /// Subinterval count outside `[1, MAX_SUBINTERVALS]`.
    #[error(
        "Invalid subinterval count {0}: must be in range [1, {max}]",
        max = MAX_SUBINTERVALS
    )]
    InvalidSubintervalCount(usize),

    /// Worker partition count outside `[1, MAX_WORKERS]`.
    #[error("Invalid worker count {0}: must be in range [1, {max}]", max = MAX_WORKERS)]
    InvalidWorkerCount(usize),
}
