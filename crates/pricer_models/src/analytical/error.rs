//! Error types for analytical pricing operations.
//!
//! Pricing and sensitivity functions never fail: invalid parameters flow
//! through as NaN or infinities. `AnalyticalError` is only produced at the
//! boundaries that opt into checking, namely option type parsing and
//! [`OptionContract::validate`](crate::instruments::OptionContract::validate).

use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `UnknownOptionType`: Text that is neither "Call" nor "Put"
/// - `InvalidMaturity`: Non-positive time to maturity
/// - `InvalidStrike`: Non-positive strike
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidVolatility`: Non-positive volatility
/// - `NonFiniteInput`: NaN or infinite parameter
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Option type text was not recognised.
    #[error("Unknown option type: '{0}' (expected Call or Put)")]
    UnknownOptionType(String),

    /// Invalid time to maturity (non-positive).
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value
        maturity: f64,
    },

    /// Invalid strike (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// A parameter is NaN or infinite.
    #[error("Non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_option_type_display() {
        let err = AnalyticalError::UnknownOptionType("Straddle".to_string());
        assert_eq!(
            format!("{}", err),
            "Unknown option type: 'Straddle' (expected Call or Put)"
        );
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_non_finite_display() {
        let err = AnalyticalError::NonFiniteInput {
            name: "rate",
            value: f64::INFINITY,
        };
        assert_eq!(format!("{}", err), "Non-finite input: rate = inf");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidMaturity { maturity: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = AnalyticalError::InvalidStrike { strike: 0.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
