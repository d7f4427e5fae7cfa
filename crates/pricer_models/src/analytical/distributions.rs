//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF is expressed through the complementary error function so that the
//! tails keep full double precision; `erfc` itself comes from `statrs`.

use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
/// NaN propagates unchanged.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0);
/// assert!((cdf_0 - 0.5).abs() < 1e-15);
///
/// let cdf_neg = norm_cdf(-3.0);
/// assert!(cdf_neg < 0.01);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((norm_pdf(1.0) - 0.2419707245).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        let test_values = [-3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0];
        for x in test_values {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0), 0.8413447460685429, epsilon = 1e-13);
        assert_relative_eq!(norm_cdf(-1.0), 0.15865525393145707, epsilon = 1e-13);
        assert_relative_eq!(norm_cdf(2.0), 0.9772498680518208, epsilon = 1e-13);
        assert_relative_eq!(norm_cdf(-2.0), 0.022750131948179195, epsilon = 1e-13);
        assert_relative_eq!(norm_cdf(3.0), 0.9986501019683699, epsilon = 1e-13);
    }

    #[test]
    fn test_norm_cdf_deep_tail_keeps_precision() {
        // Φ(-8) ≈ 6.22e-16; a 1 - Φ(8) formulation would round to zero.
        let tail = norm_cdf(-8.0);
        assert!(tail > 0.0);
        assert_relative_eq!(tail, 6.22096057427178e-16, max_relative = 1e-8);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) > norm_cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    #[test]
    fn test_norm_cdf_nan_propagates() {
        assert!(norm_cdf(f64::NAN).is_nan());
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        for x in [0.5, 1.0, 1.5, 2.0, 2.5, 3.0] {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(2.0), 0.05399096651318806, epsilon = 1e-14);
        assert_relative_eq!(norm_pdf(3.0), 0.004431848411938008, epsilon = 1e-14);
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        // Numerical derivative of the CDF should reproduce the PDF
        let h = 1e-5;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical_derivative, norm_pdf(x), epsilon = 1e-9);
        }
    }
}
