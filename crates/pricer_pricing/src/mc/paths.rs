//! Euler-Maruyama path stepping and path partitioning.

use pricer_models::analytical::EuropeanOption;

use super::accumulator::PayoffAccumulator;
use super::elasticity::Elasticity;
use crate::rng::PricerRng;

/// Per-step constants of the Euler-Maruyama scheme
/// `S ← S + r·dt·S + σ·√dt·S^β·Z`.
///
/// The drift is the risk-free rate, not the option's cost of carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerScheme {
    spot: f64,
    drift: f64,
    diffusion: f64,
    steps: usize,
    elasticity: Elasticity,
}

impl EulerScheme {
    /// Discretises `option`'s maturity into `subintervals` equal steps.
    pub fn new(option: &EuropeanOption, subintervals: usize, elasticity: Elasticity) -> Self {
        let dt = option.maturity() / subintervals as f64;
        Self {
            spot: option.spot(),
            drift: option.rate() * dt,
            diffusion: option.volatility() * dt.sqrt(),
            steps: subintervals,
            elasticity,
        }
    }

    /// `r·dt`
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// `σ·√dt`
    #[inline]
    pub fn diffusion(&self) -> f64 {
        self.diffusion
    }

    /// Number of steps per path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Simulates one path and returns the terminal spot.
    ///
    /// With zero steps the path never leaves the initial spot. Nothing
    /// keeps the level positive; with `β != 1` a negative level feeds NaN
    /// into the rest of the path.
    #[inline]
    pub fn terminal_spot(&self, rng: &mut PricerRng) -> f64 {
        let mut s = self.spot;
        for _ in 0..self.steps {
            s = s + self.drift * s + self.diffusion * self.elasticity.apply(s) * rng.gen_normal();
        }
        s
    }

    /// Simulates `n_paths` paths and accumulates their terminal payoffs.
    ///
    /// Squared payoffs are only tracked when `track_squares` is set.
    pub fn simulate_chunk(
        &self,
        option: &EuropeanOption,
        n_paths: usize,
        track_squares: bool,
        rng: &mut PricerRng,
    ) -> PayoffAccumulator {
        let (kind, strike) = (option.kind(), option.strike());
        let mut acc = PayoffAccumulator::default();
        for _ in 0..n_paths {
            let payoff = kind.payoff(self.terminal_spot(rng), strike);
            acc.add(payoff, track_squares);
        }
        acc
    }
}

/// Splits `n_paths` into at most `n_chunks` near-equal partitions.
///
/// Sizes differ by at most one and there are never more partitions than
/// paths, so fewer paths than chunks yields one partition per path.
pub fn split_paths(n_paths: usize, n_chunks: usize) -> Vec<usize> {
    let chunks = n_chunks.max(1).min(n_paths.max(1));
    let base = n_paths / chunks;
    let rem = n_paths % chunks;
    (0..chunks)
        .map(|i| if i < rem { base + 1 } else { base })
        .filter(|&n| n > 0)
        .collect()
}
