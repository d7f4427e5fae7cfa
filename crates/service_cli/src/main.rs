//! mcpricer - European option pricing from the command line
//!
//! Prices European options with the generalized Black-Scholes-Merton model
//! and cross-checks them with a parallel Euler-Maruyama Monte Carlo engine.
//!
//! # Commands
//!
//! - `mcpricer sweep` - Path-count and subinterval-count convergence study
//! - `mcpricer price` - Analytical and simulated price of one option
//! - `mcpricer greeks` - Every sensitivity of one option
//! - `mcpricer parity` - Put-call parity check against a market price
//!
//! # Configuration
//!
//! Defaults, then the `--config` TOML file, then `MCPRICER_*` environment
//! variables, then flags. `RUST_LOG` overrides the configured log level.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::OptionArgs;
use config::{LogLevel, McPricerConfig, Overrides, ReportTarget};
use pricer_models::analytical::DEFAULT_PARITY_THRESHOLD;
use pricer_pricing::mc::{DEFAULT_PATHS, DEFAULT_SUBINTERVALS};

/// Monte Carlo European option pricer
#[derive(Parser)]
#[command(name = "mcpricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(short, long, global = true, env = "MCPRICER_LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,

    /// Base seed for reproducible simulations
    #[arg(long, global = true, env = "MCPRICER_SEED")]
    seed: Option<u64>,

    /// Number of path partitions
    #[arg(short, long, global = true, env = "MCPRICER_WORKERS")]
    workers: Option<usize>,

    /// Diffusion elasticity
    #[arg(long, global = true, allow_negative_numbers = true)]
    beta: Option<f64>,

    /// Where error-analysis reports go
    #[arg(long, global = true, value_enum)]
    report: Option<ReportTarget>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the path and subinterval convergence sweep over the configured options
    Sweep {
        /// Points per sweep (overrides the config file)
        #[arg(short, long)]
        iterations: Option<u32>,
    },

    /// Price one option analytically and by simulation
    Price {
        #[command(flatten)]
        option: OptionArgs,

        /// Number of Monte Carlo paths
        #[arg(short = 'n', long, default_value_t = DEFAULT_PATHS)]
        paths: usize,

        /// Euler subintervals per path
        #[arg(short = 'm', long, default_value_t = DEFAULT_SUBINTERVALS)]
        subintervals: usize,

        /// Skip the standard deviation and standard error report
        #[arg(long)]
        no_error_analysis: bool,
    },

    /// Print every analytical sensitivity of one option
    Greeks {
        #[command(flatten)]
        option: OptionArgs,

        /// Spot bump for the finite-difference greeks
        #[arg(long, default_value_t = 0.01)]
        bump: f64,
    },

    /// Check a market price against put-call parity
    Parity {
        #[command(flatten)]
        option: OptionArgs,

        /// Quoted price to check
        #[arg(short = 'p', long)]
        market_price: f64,

        /// Relative deviation tolerated
        #[arg(long, default_value_t = DEFAULT_PARITY_THRESHOLD)]
        threshold: f64,
    },
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            log_level: self.log_level,
            seed: self.seed,
            workers: self.workers,
            beta: self.beta,
            report: self.report,
        }
    }
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    // Logs go to stderr so report tables on stdout stay clean
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        McPricerConfig::load_or_default(cli.config.as_deref())?.with_overrides(&cli.overrides());
    if let Commands::Sweep {
        iterations: Some(iterations),
    } = cli.command
    {
        config.sweep.iterations = iterations;
    }
    config.validate()?;

    init_tracing(config.log_level);
    info!(
        seed = ?config.seed,
        workers = ?config.workers,
        beta = config.beta,
        "mcpricer starting"
    );

    let sink = config.report.sink();
    match cli.command {
        Commands::Sweep { .. } => {
            commands::sweep::run(&config, sink)?;
        }
        Commands::Price {
            option,
            paths,
            subintervals,
            no_error_analysis,
        } => {
            commands::price::run(&option, paths, subintervals, !no_error_analysis, &config, sink)?;
        }
        Commands::Greeks { option, bump } => {
            commands::greeks::run(&option, bump)?;
        }
        Commands::Parity {
            option,
            market_price,
            threshold,
        } => {
            commands::parity::run(&option, market_price, threshold)?;
        }
    }

    Ok(())
}
