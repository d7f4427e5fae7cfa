//! Running payoff totals for one path partition.

/// Sum and sum of squares of undiscounted terminal payoffs.
///
/// Each worker fills its own accumulator; partial results are combined with
/// [`merge`](Self::merge), which is associative and commutative up to
/// floating-point rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PayoffAccumulator {
    sum: f64,
    sum_squares: f64,
    count: usize,
}

impl PayoffAccumulator {
    /// Records one terminal payoff.
    #[inline]
    pub fn add(&mut self, payoff: f64, track_squares: bool) {
        self.sum += payoff;
        if track_squares {
            self.sum_squares += payoff * payoff;
        }
        self.count += 1;
    }

    /// Combines two partial results.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            sum_squares: self.sum_squares + other.sum_squares,
            count: self.count + other.count,
        }
    }

    /// Sum of payoffs.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Sum of squared payoffs (zero unless squares were tracked).
    #[inline]
    pub fn sum_squares(&self) -> f64 {
        self.sum_squares
    }

    /// Number of payoffs recorded.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}
