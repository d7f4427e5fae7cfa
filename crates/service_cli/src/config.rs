//! `mcpricer` configuration.
//!
//! Sources, lowest to highest priority: built-in defaults (the classic
//! call/put sweep), an optional TOML file, `MCPRICER_*` environment
//! variables and command-line flags. The last two are resolved by clap and
//! applied through [`Overrides`].

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use clap::ValueEnum;
use pricer_models::analytical::EuropeanOption;
use pricer_models::instruments::{OptionContract, OptionType};
use pricer_pricing::mc::{MonteCarloConfig, MAX_WORKERS};
use pricer_pricing::report::{ReportSink, StdoutSink, TracingSink};
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Log levels accepted by `--log-level` and `log_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Everything, including per-simulation spans
    Trace,
    /// Simulation start/finish events
    Debug,
    /// Progress and parity verdicts
    #[default]
    Info,
    /// Failed parity checks
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::InvalidArgument(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Where error-analysis reports go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportTarget {
    /// Fixed-width table on stdout
    #[default]
    Table,
    /// Structured `tracing` events
    Log,
}

impl ReportTarget {
    /// Sink implementing this target.
    pub fn sink(&self) -> Arc<dyn ReportSink> {
        match self {
            ReportTarget::Table => Arc::new(StdoutSink),
            ReportTarget::Log => Arc::new(TracingSink),
        }
    }
}

/// One `[[options]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionSpec {
    /// "Call" or "Put" (case-insensitive)
    #[serde(rename = "type", deserialize_with = "deserialize_option_type")]
    pub kind: OptionType,
    /// T in years
    pub maturity: f64,
    /// K
    pub strike: f64,
    /// S
    pub spot: f64,
    /// r
    pub rate: f64,
    /// σ
    pub volatility: f64,
    /// b, defaults to r
    #[serde(default)]
    pub cost_of_carry: Option<f64>,
    /// Reporting id, defaults to 1
    #[serde(default)]
    pub id: Option<i32>,
}

impl OptionSpec {
    /// Builds the option, applying the defaults for `b` and `id`.
    pub fn to_option(&self) -> EuropeanOption {
        let mut option = EuropeanOption::new(
            self.kind,
            self.maturity,
            self.strike,
            self.spot,
            self.rate,
            self.volatility,
        );
        if let Some(carry) = self.cost_of_carry {
            option = option.with_cost_of_carry(carry);
        }
        if let Some(id) = self.id {
            option = option.with_id(id);
        }
        option
    }

    fn from_option(option: &EuropeanOption) -> Self {
        let OptionContract {
            kind,
            maturity,
            strike,
            spot,
            rate,
            volatility,
            cost_of_carry,
            id,
        } = *option.contract();
        Self {
            kind,
            maturity,
            strike,
            spot,
            rate,
            volatility,
            cost_of_carry: Some(cost_of_carry),
            id: Some(id),
        }
    }
}

fn deserialize_option_type<'de, D>(deserializer: D) -> std::result::Result<OptionType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OptionType::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_log_level<'de, D>(deserializer: D) -> std::result::Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    <LogLevel as FromStr>::from_str(&s).map_err(serde::de::Error::custom)
}

/// Path-count and subinterval-count sweeps.
///
/// The path sweep runs `start_paths, start_paths·factor, ...` at
/// `path_sweep_subintervals`; the subinterval sweep runs
/// `start_subintervals, start_subintervals·factor, ...` at
/// `subinterval_sweep_paths`. Each has `iterations` points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// Points per sweep
    pub iterations: u32,
    /// Growth factor between points
    pub factor: usize,
    /// First path count
    pub start_paths: usize,
    /// Subintervals held fixed while paths grow
    pub path_sweep_subintervals: usize,
    /// First subinterval count
    pub start_subintervals: usize,
    /// Paths held fixed while subintervals grow
    pub subinterval_sweep_paths: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            iterations: 7,
            factor: 10,
            start_paths: 10,
            path_sweep_subintervals: 100,
            start_subintervals: 10,
            subinterval_sweep_paths: 1_000,
        }
    }
}

impl SweepConfig {
    /// Path counts of the path sweep.
    pub fn path_counts(&self) -> Vec<usize> {
        geometric(self.start_paths, self.factor, self.iterations)
    }

    /// Subinterval counts of the subinterval sweep.
    pub fn subinterval_counts(&self) -> Vec<usize> {
        geometric(self.start_subintervals, self.factor, self.iterations)
    }
}

fn geometric(start: usize, factor: usize, iterations: u32) -> Vec<usize> {
    (0..iterations)
        .map(|i| start.saturating_mul(factor.saturating_pow(i)))
        .collect()
}

/// Top-level `mcpricer` configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct McPricerConfig {
    /// Log level when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Base seed; fresh entropy per run when unset
    pub seed: Option<u64>,
    /// Path partitions; rayon pool size when unset
    pub workers: Option<usize>,
    /// Diffusion elasticity
    pub beta: f64,
    /// Report destination
    pub report: ReportTarget,
    /// Sweep grid
    pub sweep: SweepConfig,
    /// Options priced by `sweep`
    pub options: Vec<OptionSpec>,
}

impl Default for McPricerConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            seed: None,
            workers: None,
            beta: 1.0,
            report: ReportTarget::Table,
            sweep: SweepConfig::default(),
            options: classic_options().iter().map(OptionSpec::from_option).collect(),
        }
    }
}

/// The call and put of the classic convergence study.
pub fn classic_options() -> [EuropeanOption; 2] {
    [
        EuropeanOption::new(OptionType::Call, 0.25, 65.0, 60.0, 0.08, 0.3),
        EuropeanOption::new(OptionType::Put, 1.0, 100.0, 100.0, 0.0, 0.2).with_id(2),
    ]
}

/// Values resolved from flags or `MCPRICER_*` variables.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--log-level` / `MCPRICER_LOG_LEVEL`
    pub log_level: Option<LogLevel>,
    /// `--seed` / `MCPRICER_SEED`
    pub seed: Option<u64>,
    /// `--workers` / `MCPRICER_WORKERS`
    pub workers: Option<usize>,
    /// `--beta`
    pub beta: Option<f64>,
    /// `--report`
    pub report: Option<ReportTarget>,
}

impl McPricerConfig {
    /// Loads a TOML file; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies flag and environment overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.workers.is_some() {
            self.workers = overrides.workers;
        }
        if let Some(beta) = overrides.beta {
            self.beta = beta;
        }
        if let Some(report) = overrides.report {
            self.report = report;
        }
        self
    }

    /// Checks every setting and reports all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if !self.beta.is_finite() {
            errors.push(format!("beta must be finite, got {}", self.beta));
        }
        if let Some(workers) = self.workers {
            if workers == 0 || workers > MAX_WORKERS {
                errors.push(format!(
                    "workers must be in range [1, {}], got {}",
                    MAX_WORKERS, workers
                ));
            }
        }

        let sweep = &self.sweep;
        if sweep.factor == 0 {
            errors.push("sweep.factor must be greater than 0".to_string());
        }
        for (name, value) in [
            ("sweep.start_paths", sweep.start_paths),
            ("sweep.path_sweep_subintervals", sweep.path_sweep_subintervals),
            ("sweep.start_subintervals", sweep.start_subintervals),
            ("sweep.subinterval_sweep_paths", sweep.subinterval_sweep_paths),
        ] {
            if value == 0 {
                errors.push(format!("{} must be greater than 0", name));
            }
        }

        for (index, entry) in self.options.iter().enumerate() {
            if let Err(err) = entry.to_option().contract().validate() {
                errors.push(format!("options[{}]: {}", index, err));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::InvalidConfig(errors))
        }
    }

    /// Validated engine configuration carrying this file's seed and workers.
    pub fn mc_config(&self, subintervals: usize, n_paths: usize) -> Result<MonteCarloConfig> {
        Ok(MonteCarloConfig::builder()
            .subintervals(subintervals)
            .n_paths(n_paths)
            .maybe_seed(self.seed)
            .maybe_workers(self.workers)
            .build()?)
    }

    /// The configured options.
    pub fn option_models(&self) -> Vec<EuropeanOption> {
        self.options.iter().map(OptionSpec::to_option).collect()
    }
}
