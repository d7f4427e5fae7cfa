//! Call/put discriminator for European options.

use std::fmt;
use std::str::FromStr;

use crate::analytical::AnalyticalError;

/// Type of a European option.
///
/// The two variants mirror each other in every pricing formula, so most
/// call sites match on the type once and pick the call or put branch.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let call: OptionType = "Call".parse().unwrap();
/// assert_eq!(call.payoff(110.0, 100.0), 10.0);
/// assert_eq!(call.opposite(), OptionType::Put);
/// assert!("Straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Terminal payoff for the given spot and strike.
    #[inline]
    pub fn payoff(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// The other side of the put-call pair.
    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }

    /// Canonical name, as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(AnalyticalError::UnknownOptionType(s.to_string())),
        }
    }
}
