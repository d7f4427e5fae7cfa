//! Sweep command implementation
//!
//! Reproduces the classic convergence study: for every configured option,
//! price with a growing number of paths, then with a growing number of
//! subintervals, reporting each run.

use std::sync::Arc;

use pricer_pricing::mc::MonteCarloEngine;
use pricer_pricing::report::ReportSink;
use tracing::info;

use crate::config::McPricerConfig;
use crate::Result;

/// Run the sweep command, returning the number of simulations priced.
pub fn run(config: &McPricerConfig, sink: Arc<dyn ReportSink>) -> Result<usize> {
    let sweep = &config.sweep;
    let mut runs = 0;

    for option in config.option_models() {
        println!("{}", option);
        info!(option_id = option.id(), "Sweeping {}", option.description());

        for n_paths in sweep.path_counts() {
            let mc = config.mc_config(sweep.path_sweep_subintervals, n_paths)?;
            MonteCarloEngine::with_config(option, mc)
                .with_sink(sink.clone())
                .price(config.beta, true);
            runs += 1;
        }

        for subintervals in sweep.subinterval_counts() {
            let mc = config.mc_config(subintervals, sweep.subinterval_sweep_paths)?;
            MonteCarloEngine::with_config(option, mc)
                .with_sink(sink.clone())
                .price(config.beta, true);
            runs += 1;
        }
    }

    info!(runs, "Sweep complete");
    Ok(runs)
}
