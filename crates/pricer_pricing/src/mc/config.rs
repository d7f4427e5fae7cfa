//! Monte Carlo simulation configuration.

use super::error::ConfigError;

/// Maximum number of simulation paths accepted by the validated builder.
pub const MAX_PATHS: usize = 1_000_000_000;

/// Maximum number of Euler subintervals per path accepted by the validated builder.
pub const MAX_SUBINTERVALS: usize = 100_000_000;

/// Maximum number of path partitions accepted by the validated builder.
pub const MAX_WORKERS: usize = 65_536;

/// Subintervals used when none are given.
pub const DEFAULT_SUBINTERVALS: usize = 100;

/// Paths used when none are given.
pub const DEFAULT_PATHS: usize = 10_000;

/// Monte Carlo simulation configuration.
///
/// Immutable once built. [`MonteCarloConfig::new`] accepts any counts,
/// including zero, and leaves the degenerate outcome to the simulation;
/// [`MonteCarloConfig::builder`] validates.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .subintervals(252)
///     .seed(12345)
///     .workers(4)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.n_paths(), 50_000);
/// assert_eq!(config.seed(), Some(12345));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloConfig {
    subintervals: usize,
    n_paths: usize,
    seed: Option<u64>,
    workers: Option<usize>,
}

impl MonteCarloConfig {
    /// Unvalidated configuration with fresh entropy and the default pool size.
    pub fn new(subintervals: usize, n_paths: usize) -> Self {
        Self {
            subintervals,
            n_paths,
            seed: None,
            workers: None,
        }
    }

    /// Creates a new configuration builder starting from the defaults.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of Euler subintervals per path.
    #[inline]
    pub fn subintervals(&self) -> usize {
        self.subintervals
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the base seed, if the run is reproducible.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the number of path partitions, if pinned.
    #[inline]
    pub fn workers(&self) -> Option<usize> {
        self.workers
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than [`MAX_PATHS`]
    /// - `subintervals` is 0 or greater than [`MAX_SUBINTERVALS`]
    /// - `workers` is pinned to 0 or to more than [`MAX_WORKERS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.subintervals == 0 || self.subintervals > MAX_SUBINTERVALS {
            return Err(ConfigError::InvalidSubintervalCount(self.subintervals));
        }
        if let Some(workers) = self.workers {
            if workers == 0 || workers > MAX_WORKERS {
                return Err(ConfigError::InvalidWorkerCount(workers));
            }
        }
        Ok(())
    }
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SUBINTERVALS, DEFAULT_PATHS)
    }
}

/// Builder for [`MonteCarloConfig`] with validation at build time.
#[derive(Clone, Debug)]
pub struct MonteCarloConfigBuilder {
    subintervals: usize,
    n_paths: usize,
    seed: Option<u64>,
    workers: Option<usize>,
}

impl Default for MonteCarloConfigBuilder {
    fn default() -> Self {
        Self {
            subintervals: DEFAULT_SUBINTERVALS,
            n_paths: DEFAULT_PATHS,
            seed: None,
            workers: None,
        }
    }
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = n_paths;
        self
    }

    /// Sets the number of Euler subintervals per path.
    #[inline]
    pub fn subintervals(mut self, subintervals: usize) -> Self {
        self.subintervals = subintervals;
        self
    }

    /// Pins the base seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the base seed if one is given, otherwise leaves it unset.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Pins the number of path partitions.
    ///
    /// Results are bit-reproducible only for a fixed seed *and* worker count.
    #[inline]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the worker count if one is given, otherwise uses the pool size.
    #[inline]
    pub fn maybe_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// See [`MonteCarloConfig::validate`].
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let config = MonteCarloConfig {
            subintervals: self.subintervals,
            n_paths: self.n_paths,
            seed: self.seed,
            workers: self.workers,
        };

        config.validate()?;
        Ok(config)
    }
}
