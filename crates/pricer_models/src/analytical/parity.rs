//! Put-call parity diagnostics.

use tracing::{info, warn};

use super::EuropeanOption;

/// Relative tolerance used by [`EuropeanOption::check_put_call_parity`]
/// when the caller has no preference.
pub const DEFAULT_PARITY_THRESHOLD: f64 = 0.05;

impl EuropeanOption {
    /// Relative deviation `|market - implied| / implied` between a quoted
    /// price and [`price_by_put_call_parity`](Self::price_by_put_call_parity).
    ///
    /// Infinite or NaN when the implied price is zero.
    pub fn parity_deviation(&self, market_price: f64) -> f64 {
        let implied = self.price_by_put_call_parity();
        (market_price - implied).abs() / implied
    }

    /// Reports whether `market_price` lies within `threshold` of the
    /// parity-implied price.
    ///
    /// Purely diagnostic: the verdict goes to the `tracing` subscriber
    /// (`info` when satisfied, `warn` otherwise) and nothing is returned.
    /// Use [`parity_deviation`](Self::parity_deviation) to act on the value.
    pub fn check_put_call_parity(&self, market_price: f64, threshold: f64) {
        let implied = self.price_by_put_call_parity();
        let deviation = self.parity_deviation(market_price);

        if deviation <= threshold {
            info!(
                option_id = self.id(),
                market_price,
                implied,
                deviation,
                threshold,
                "Put-Call Parity is satisfied within a {} threshold",
                threshold
            );
        } else {
            warn!(
                option_id = self.id(),
                market_price,
                implied,
                deviation,
                threshold,
                "Put-Call Parity is not satisfied within a {} threshold",
                threshold
            );
        }
    }
}
