//! Parallel Euler-Maruyama Monte Carlo engine.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use pricer_models::analytical::EuropeanOption;
use rayon::prelude::*;
use tracing::{debug, debug_span};

use super::accumulator::PayoffAccumulator;
use super::paths::{split_paths, EulerScheme};
use super::statistics::{standard_deviation, standard_error};
use super::{Elasticity, MonteCarloConfig, SimulationResult};
use crate::report::{ReportSink, StdoutSink};
use crate::rng::{fresh_seed, PricerRng};

/// Monte Carlo pricer for one European option.
///
/// Holds its own copy of the option and an immutable configuration, so the
/// engine is stateless across calls and can be shared between threads.
/// Paths are split into partitions priced in parallel on the rayon pool;
/// partition `i` draws from `PricerRng::for_stream(seed, i)`.
///
/// # Examples
///
/// ```rust
/// use pricer_models::analytical::EuropeanOption;
/// use pricer_models::instruments::OptionType;
/// use pricer_pricing::mc::{Elasticity, MonteCarloConfig, MonteCarloEngine};
///
/// let option = EuropeanOption::new(OptionType::Call, 0.25, 65.0, 60.0, 0.08, 0.3);
/// let config = MonteCarloConfig::builder()
///     .n_paths(20_000)
///     .subintervals(50)
///     .seed(42)
///     .build()
///     .unwrap();
/// let engine = MonteCarloEngine::with_config(option, config);
///
/// let result = engine.simulate(Elasticity::Linear, true);
/// let se = result.standard_error.unwrap();
/// assert!((result.price - result.analytical_price).abs() < 5.0 * se);
/// ```
#[derive(Clone)]
pub struct MonteCarloEngine {
    option: EuropeanOption,
    config: MonteCarloConfig,
    sink: Arc<dyn ReportSink>,
}

impl MonteCarloEngine {
    /// Engine with an unvalidated configuration, fresh entropy per call
    /// and console reporting.
    pub fn new(option: EuropeanOption, subintervals: usize, n_paths: usize) -> Self {
        Self::with_config(option, MonteCarloConfig::new(subintervals, n_paths))
    }

    /// Engine with an explicit configuration and console reporting.
    pub fn with_config(option: EuropeanOption, config: MonteCarloConfig) -> Self {
        Self {
            option,
            config,
            sink: Arc::new(StdoutSink),
        }
    }

    /// Replaces the report sink.
    #[must_use]
    pub fn with_sink(self, sink: Arc<dyn ReportSink>) -> Self {
        Self { sink, ..self }
    }

    /// The option being priced.
    #[inline]
    pub fn option(&self) -> &EuropeanOption {
        &self.option
    }

    /// The simulation configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Euler subintervals per path.
    #[inline]
    pub fn subintervals(&self) -> usize {
        self.config.subintervals()
    }

    /// Number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.config.n_paths()
    }

    /// Simulated price with diffusion elasticity `beta`.
    ///
    /// When `error_analysis` is set the error report is handed to the
    /// engine's sink before returning. The price is returned either way.
    pub fn price(&self, beta: f64, error_analysis: bool) -> f64 {
        let result = self.simulate(Elasticity::from(beta), error_analysis);
        if let Some(report) = result.error_report() {
            self.sink.emit(&report);
        }
        result.price
    }

    /// Runs the simulation and returns price and diagnostics without
    /// reporting.
    ///
    /// Zero paths yield a NaN price. Results are reproducible only when the
    /// configuration pins both the seed and the worker count.
    pub fn simulate(&self, elasticity: Elasticity, error_analysis: bool) -> SimulationResult {
        let n_paths = self.config.n_paths();
        let subintervals = self.config.subintervals();
        let seed = self.config.seed().unwrap_or_else(fresh_seed);
        let workers = self
            .config
            .workers()
            .unwrap_or_else(rayon::current_num_threads);

        let scheme = EulerScheme::new(&self.option, subintervals, elasticity);
        let partitions = split_paths(n_paths, workers);

        let span = debug_span!(
            "monte_carlo",
            option_id = self.option.id(),
            n_paths,
            subintervals,
            beta = elasticity.beta()
        );
        let _guard = span.enter();
        debug!(seed, partitions = partitions.len(), "starting simulation");
        let start = Instant::now();

        let option = &self.option;
        let partials: Vec<PayoffAccumulator> = partitions
            .par_iter()
            .enumerate()
            .map(|(index, &paths)| {
                let mut rng = PricerRng::for_stream(seed, index);
                scheme.simulate_chunk(option, paths, error_analysis, &mut rng)
            })
            .collect();
        // Merge in partition order so a pinned seed gives identical sums
        let totals = partials
            .into_iter()
            .fold(PayoffAccumulator::default(), PayoffAccumulator::merge);

        let rate = self.option.rate();
        let maturity = self.option.maturity();
        let price = totals.sum() / n_paths as f64 * (-rate * maturity).exp();

        let (sd, se) = if error_analysis {
            let sd = standard_deviation(
                totals.sum(),
                totals.sum_squares(),
                n_paths,
                rate,
                maturity,
            );
            (Some(sd), Some(standard_error(sd, n_paths)))
        } else {
            (None, None)
        };

        let result = SimulationResult {
            price,
            analytical_price: self.option.price(),
            n_paths,
            subintervals,
            elasticity,
            seed,
            partitions: partitions.len(),
            standard_deviation: sd,
            standard_error: se,
        };

        debug!(
            price,
            bias = result.bias(),
            paths_simulated = totals.count(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
            "simulation finished"
        );

        result
    }
}

impl fmt::Debug for MonteCarloEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonteCarloEngine")
            .field("option", &self.option)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
