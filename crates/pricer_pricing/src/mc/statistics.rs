//! Error statistics of the Monte Carlo estimate.
//!
//! Both functions reproduce the classic console report exactly, including
//! its `e^(rT)` scaling of the sample standard deviation. Fewer than two
//! paths give NaN or infinities rather than an error.

/// Sample standard deviation of the payoffs, scaled by `e^(rT)`:
/// `sqrt((Σp² - (Σp)²/n) / (n - 1)) · e^(rT)`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::standard_deviation;
///
/// // payoffs 1, 2, 3: sample variance 1
/// let sd = standard_deviation(6.0, 14.0, 3, 0.0, 1.0);
/// assert!((sd - 1.0).abs() < 1e-15);
/// ```
pub fn standard_deviation(
    sum: f64,
    sum_squares: f64,
    n_paths: usize,
    rate: f64,
    maturity: f64,
) -> f64 {
    let n = n_paths as f64;
    ((sum_squares - sum * sum / n) / (n - 1.0)).sqrt() * (rate * maturity).exp()
}

/// Standard error `sd / sqrt(n)`.
pub fn standard_error(standard_deviation: f64, n_paths: usize) -> f64 {
    standard_deviation / (n_paths as f64).sqrt()
}
