//! Price command implementation
//!
//! Prices one option analytically and by simulation.

use std::sync::Arc;

use pricer_pricing::mc::MonteCarloEngine;
use pricer_pricing::report::ReportSink;
use tracing::info;

use super::OptionArgs;
use crate::config::McPricerConfig;
use crate::Result;

/// Analytical and simulated prices of one option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSummary {
    /// Closed-form price
    pub analytical: f64,
    /// Parity-implied price of the opposite type
    pub parity_implied: f64,
    /// Monte Carlo estimate
    pub monte_carlo: f64,
}

/// Run the price command
pub fn run(
    args: &OptionArgs,
    n_paths: usize,
    subintervals: usize,
    error_analysis: bool,
    config: &McPricerConfig,
    sink: Arc<dyn ReportSink>,
) -> Result<PriceSummary> {
    let option = args.to_option()?;
    let mc = config.mc_config(subintervals, n_paths)?;

    info!("Starting pricing...");
    info!("  Paths: {}", n_paths);
    info!("  Subintervals: {}", subintervals);
    info!("  Beta: {}", config.beta);

    println!("{}", option);
    let analytical = option.price();
    let parity_implied = option.price_by_put_call_parity();
    println!("Analytical price: {:.6}", analytical);
    println!("Parity-implied {} price: {:.6}", option.kind().opposite(), parity_implied);

    let monte_carlo = MonteCarloEngine::with_config(option, mc)
        .with_sink(sink)
        .price(config.beta, error_analysis);
    println!("Monte Carlo price: {:.6}", monte_carlo);

    info!("Pricing complete");
    Ok(PriceSummary {
        analytical,
        parity_implied,
        monte_carlo,
    })
}
