//! European option contract parameters.

use super::OptionType;
use crate::analytical::AnalyticalError;

/// Identifier given to contracts built without an explicit id.
pub const DEFAULT_OPTION_ID: i32 = 1;

/// Parameters of a single European option contract.
///
/// A plain value: the cost of carry `b` is fixed when the contract is built
/// and defaults to the risk-free rate (`b = r` is the stock case, `b = 0`
/// the futures case, `b = r - r_f` the FX case). Changing the rate later
/// does not move `b`.
///
/// No validation happens on construction; non-positive maturity, strike,
/// spot or volatility simply produce NaN or infinite prices. Call
/// [`validate`](Self::validate) to reject them up front.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionType};
///
/// let contract = OptionContract::new(OptionType::Call, 0.25, 65.0, 60.0, 0.08, 0.3);
/// assert_eq!(contract.cost_of_carry, 0.08);
/// assert_eq!(contract.id, 1);
/// assert!(contract.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    /// Call or put
    pub kind: OptionType,
    /// Time to maturity in years (T)
    pub maturity: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Risk-free interest rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
    /// Cost of carry (b)
    pub cost_of_carry: f64,
    /// Reporting identifier, not required to be unique
    pub id: i32,
}

impl OptionContract {
    /// Creates a contract with `id = 1` and `cost_of_carry = rate`.
    pub fn new(
        kind: OptionType,
        maturity: f64,
        strike: f64,
        spot: f64,
        rate: f64,
        volatility: f64,
    ) -> Self {
        Self {
            kind,
            maturity,
            strike,
            spot,
            rate,
            volatility,
            cost_of_carry: rate,
            id: DEFAULT_OPTION_ID,
        }
    }

    /// Checks that the contract lies inside the model's domain.
    ///
    /// # Errors
    /// - `NonFiniteInput` if any parameter is NaN or infinite
    /// - `InvalidMaturity`, `InvalidStrike`, `InvalidSpot` if non-positive
    /// - `InvalidVolatility` if σ <= 0, which leaves d1 undefined
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        let fields = [
            ("maturity", self.maturity),
            ("strike", self.strike),
            ("spot", self.spot),
            ("rate", self.rate),
            ("volatility", self.volatility),
            ("cost_of_carry", self.cost_of_carry),
        ];
        if let Some(&(name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AnalyticalError::NonFiniteInput { name, value });
        }

        if self.maturity <= 0.0 {
            return Err(AnalyticalError::InvalidMaturity {
                maturity: self.maturity,
            });
        }
        if self.strike <= 0.0 {
            return Err(AnalyticalError::InvalidStrike {
                strike: self.strike,
            });
        }
        if self.spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot: self.spot });
        }
        if self.volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: self.volatility,
            });
        }
        Ok(())
    }
}
