//! Outcome of one Monte Carlo run.

use super::Elasticity;
use crate::report::ErrorReport;

/// Price and diagnostics of a single simulation.
///
/// `standard_deviation` and `standard_error` are only present when the run
/// tracked squared payoffs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Closed-form price of the same option.
    pub analytical_price: f64,
    /// Number of simulated paths.
    pub n_paths: usize,
    /// Euler subintervals per path.
    pub subintervals: usize,
    /// Diffusion elasticity used.
    pub elasticity: Elasticity,
    /// Base seed of the run, for replay.
    pub seed: u64,
    /// Number of path partitions the run was split into.
    pub partitions: usize,
    /// Scaled sample standard deviation of the payoffs.
    pub standard_deviation: Option<f64>,
    /// Standard error of the price.
    pub standard_error: Option<f64>,
}

impl SimulationResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> Option<f64> {
        self.standard_error.map(|se| 1.96 * se)
    }

    /// Signed difference to the closed-form price.
    #[inline]
    pub fn bias(&self) -> f64 {
        self.price - self.analytical_price
    }

    /// The report row for this run, if error analysis was requested.
    pub fn error_report(&self) -> Option<ErrorReport> {
        Some(ErrorReport {
            simulations: self.n_paths,
            subintervals: self.subintervals,
            bsm_price: self.analytical_price,
            mc_price: self.price,
            standard_deviation: self.standard_deviation?,
            standard_error: self.standard_error?,
        })
    }
}
