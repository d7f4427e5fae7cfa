//! Generalised Black-Scholes-Merton model for European options.
//!
//! This module provides the closed-form price of a European call or put
//! with a cost-of-carry term `b`:
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^((b-r)T)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^((b-r)T)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Nothing here validates its inputs. σ = 0 or T = 0 make d₁ undefined and
//! the NaN flows into every price and Greek; see
//! [`OptionContract::validate`] for the opt-in check.

use std::fmt;

use super::distributions::norm_cdf;
use crate::instruments::{OptionContract, OptionType};

/// European option priced under generalised Black-Scholes-Merton.
///
/// A `Copy` value type: engines and bumped copies for finite differences
/// always work on their own instance. The `with_*` methods consume and
/// return the option so parameter changes chain.
///
/// # Examples
/// ```
/// use pricer_models::analytical::EuropeanOption;
/// use pricer_models::instruments::OptionType;
///
/// let call = EuropeanOption::new(OptionType::Call, 0.25, 65.0, 60.0, 0.08, 0.3);
/// assert!((call.price() - 2.1334).abs() < 1e-4);
///
/// // Put-call parity: C - P = S - K*exp(-rT) when b = r
/// let put = call.with_type(OptionType::Put);
/// let parity = call.price() - put.price() - (60.0 - 65.0 * (-0.08_f64 * 0.25).exp());
/// assert!(parity.abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuropeanOption {
    contract: OptionContract,
}

impl EuropeanOption {
    /// Creates a new option with `id = 1` and cost of carry equal to `rate`.
    ///
    /// # Arguments
    /// * `kind` - Call or put
    /// * `maturity` - Time to maturity in years (T)
    /// * `strike` - Strike price (K)
    /// * `spot` - Spot price (S)
    /// * `rate` - Risk-free rate (r)
    /// * `volatility` - Volatility (σ)
    pub fn new(
        kind: OptionType,
        maturity: f64,
        strike: f64,
        spot: f64,
        rate: f64,
        volatility: f64,
    ) -> Self {
        Self::from_contract(OptionContract::new(
            kind, maturity, strike, spot, rate, volatility,
        ))
    }

    /// Wraps an existing contract.
    #[inline]
    pub fn from_contract(contract: OptionContract) -> Self {
        Self { contract }
    }

    /// Returns the underlying contract.
    #[inline]
    pub fn contract(&self) -> &OptionContract {
        &self.contract
    }

    // ----------------------------------------------------------------
    // Accessors
    // ----------------------------------------------------------------

    /// Returns the option type.
    #[inline]
    pub fn kind(&self) -> OptionType {
        self.contract.kind
    }

    /// Returns the time to maturity (T).
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.contract.maturity
    }

    /// Returns the strike (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.contract.strike
    }

    /// Returns the spot price (S).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.contract.spot
    }

    /// Returns the risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.contract.rate
    }

    /// Returns the volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.contract.volatility
    }

    /// Returns the cost of carry (b).
    #[inline]
    pub fn cost_of_carry(&self) -> f64 {
        self.contract.cost_of_carry
    }

    /// Returns the reporting identifier.
    #[inline]
    pub fn id(&self) -> i32 {
        self.contract.id
    }

    // ----------------------------------------------------------------
    // Fluent setters
    // ----------------------------------------------------------------

    /// Sets the option type.
    #[must_use]
    pub fn with_type(mut self, kind: OptionType) -> Self {
        self.contract.kind = kind;
        self
    }

    /// Sets the time to maturity.
    #[must_use]
    pub fn with_maturity(mut self, maturity: f64) -> Self {
        self.contract.maturity = maturity;
        self
    }

    /// Sets the strike.
    #[must_use]
    pub fn with_strike(mut self, strike: f64) -> Self {
        self.contract.strike = strike;
        self
    }

    /// Sets the spot price.
    #[must_use]
    pub fn with_spot(mut self, spot: f64) -> Self {
        self.contract.spot = spot;
        self
    }

    /// Sets the risk-free rate. The cost of carry is left untouched.
    #[must_use]
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.contract.rate = rate;
        self
    }

    /// Sets the volatility.
    #[must_use]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.contract.volatility = volatility;
        self
    }

    /// Sets the cost of carry.
    #[must_use]
    pub fn with_cost_of_carry(mut self, cost_of_carry: f64) -> Self {
        self.contract.cost_of_carry = cost_of_carry;
        self
    }

    /// Sets the reporting identifier.
    #[must_use]
    pub fn with_id(mut self, id: i32) -> Self {
        self.contract.id = id;
        self
    }

    /// Same contract on the other side of the put-call pair.
    #[must_use]
    pub fn opposite(&self) -> Self {
        self.with_type(self.kind().opposite())
    }

    // ----------------------------------------------------------------
    // Pricing
    // ----------------------------------------------------------------

    /// d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> f64 {
        let c = &self.contract;
        let drift = (c.cost_of_carry + 0.5 * c.volatility * c.volatility) * c.maturity;
        ((c.spot / c.strike).ln() + drift) / (c.volatility * c.maturity.sqrt())
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2_from(self.d1())
    }

    #[inline]
    pub(crate) fn d2_from(&self, d1: f64) -> f64 {
        d1 - self.contract.volatility * self.contract.maturity.sqrt()
    }

    /// Carry factor e^((b-r)T) applied to the spot leg.
    #[inline]
    pub(crate) fn carry_factor(&self) -> f64 {
        let c = &self.contract;
        ((c.cost_of_carry - c.rate) * c.maturity).exp()
    }

    /// Discount factor e^(-rT) applied to the strike leg.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.contract.rate * self.contract.maturity).exp()
    }

    /// Closed-form option value.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::EuropeanOption;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let put = EuropeanOption::new(OptionType::Put, 1.0, 100.0, 100.0, 0.0, 0.2);
    /// assert!((put.price() - 7.9656).abs() < 1e-4);
    /// ```
    pub fn price(&self) -> f64 {
        let d1 = self.d1();
        let d2 = self.d2_from(d1);
        let spot_leg = self.contract.spot * self.carry_factor();
        let strike_leg = self.contract.strike * self.discount_factor();

        match self.kind() {
            OptionType::Call => spot_leg * norm_cdf(d1) - strike_leg * norm_cdf(d2),
            OptionType::Put => strike_leg * norm_cdf(-d2) - spot_leg * norm_cdf(-d1),
        }
    }

    /// Price of the opposite-type option implied by put-call parity.
    ///
    /// Starts from this option's own price and adds the parity offset:
    /// a call yields `C + K·e^(-rT) - S` (the parity put), a put yields
    /// `P + S - K·e^(-rT)` (the parity call). The offset uses the plain
    /// spot, so with `b != r` it differs from [`opposite`](Self::opposite)
    /// priced directly; use [`parity_gap`](Self::parity_gap) for the
    /// carry-adjusted identity.
    pub fn price_by_put_call_parity(&self) -> f64 {
        let forward_strike = self.contract.strike * self.discount_factor();
        match self.kind() {
            OptionType::Call => self.price() + forward_strike - self.contract.spot,
            OptionType::Put => self.price() + self.contract.spot - forward_strike,
        }
    }

    /// Residual of the classical identity `C - P = S·e^((b-r)T) - K·e^(-rT)`.
    ///
    /// Prices both sides independently; the result is zero up to rounding for
    /// every valid parameter set, whichever side `self` is.
    pub fn parity_gap(&self) -> f64 {
        let (call, put) = match self.kind() {
            OptionType::Call => (*self, self.opposite()),
            OptionType::Put => (self.opposite(), *self),
        };
        let spot_leg = self.contract.spot * self.carry_factor();
        let forward_value = spot_leg - self.contract.strike * self.discount_factor();
        call.price() - put.price() - forward_value
    }

    // ----------------------------------------------------------------
    // Reporting
    // ----------------------------------------------------------------

    /// Single-line human-readable rendering of every parameter.
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// Parameters as text, in the order id, type, T, K, S, r, σ, b.
    ///
    /// Reals use six decimals so the rendering is stable across platforms.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::EuropeanOption;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let call = EuropeanOption::new(OptionType::Call, 0.25, 65.0, 60.0, 0.08, 0.3);
    /// assert_eq!(
    ///     call.to_fields(),
    ///     ["1", "Call", "0.250000", "65.000000", "60.000000", "0.080000", "0.300000", "0.080000"]
    /// );
    /// ```
    pub fn to_fields(&self) -> Vec<String> {
        let c = &self.contract;
        vec![
            c.id.to_string(),
            c.kind.to_string(),
            format!("{:.6}", c.maturity),
            format!("{:.6}", c.strike),
            format!("{:.6}", c.spot),
            format!("{:.6}", c.rate),
            format!("{:.6}", c.volatility),
            format!("{:.6}", c.cost_of_carry),
        ]
    }
}

impl From<OptionContract> for EuropeanOption {
    fn from(contract: OptionContract) -> Self {
        Self::from_contract(contract)
    }
}

impl fmt::Display for EuropeanOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.contract;
        write!(
            f,
            "Option {}: {}, T: {}, K: {}, S: {}, r: {}, sigma: {}, b: {}",
            c.id, c.kind, c.maturity, c.strike, c.spot, c.rate, c.volatility, c.cost_of_carry
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_call() -> EuropeanOption {
        EuropeanOption::new(OptionType::Call, 0.25, 65.0, 60.0, 0.08, 0.3)
    }

    fn reference_put() -> EuropeanOption {
        EuropeanOption::new(OptionType::Put, 1.0, 100.0, 100.0, 0.0, 0.2).with_id(2)
    }

    // ==========================================================
    // Construction and setters
    // ==========================================================

    #[test]
    fn test_new_defaults() {
        let call = reference_call();
        assert_eq!(call.kind(), OptionType::Call);
        assert_eq!(call.maturity(), 0.25);
        assert_eq!(call.strike(), 65.0);
        assert_eq!(call.spot(), 60.0);
        assert_eq!(call.rate(), 0.08);
        assert_eq!(call.volatility(), 0.3);
        assert_eq!(call.cost_of_carry(), 0.08);
        assert_eq!(call.id(), 1);
    }

    #[test]
    fn test_fluent_setters_chain() {
        let option = reference_call()
            .with_type(OptionType::Put)
            .with_maturity(1.0)
            .with_strike(100.0)
            .with_spot(95.0)
            .with_rate(0.05)
            .with_volatility(0.25)
            .with_cost_of_carry(0.0)
            .with_id(7);

        assert_eq!(option.kind(), OptionType::Put);
        assert_eq!(option.maturity(), 1.0);
        assert_eq!(option.strike(), 100.0);
        assert_eq!(option.spot(), 95.0);
        assert_eq!(option.rate(), 0.05);
        assert_eq!(option.volatility(), 0.25);
        assert_eq!(option.cost_of_carry(), 0.0);
        assert_eq!(option.id(), 7);
    }

    #[test]
    fn test_with_rate_keeps_cost_of_carry() {
        let option = reference_call().with_rate(0.02);
        assert_eq!(option.cost_of_carry(), 0.08);
    }

    #[test]
    fn test_setters_leave_source_untouched() {
        let source = reference_call();
        let bumped = source.with_spot(70.0);
        assert_eq!(source.spot(), 60.0);
        assert_eq!(bumped.spot(), 70.0);
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm_zero_rate() {
        // ATM with b=0: d1 = σ√T / 2
        let option = reference_put();
        assert_relative_eq!(option.d1(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(option.d2(), -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let option = reference_call();
        assert_relative_eq!(
            option.d2(),
            option.d1() - 0.3 * 0.25_f64.sqrt(),
            epsilon = 1e-14
        );
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // Haug (2007) example: 2.1334
        assert_relative_eq!(reference_call().price(), 2.1334, epsilon = 1e-4);
    }

    #[test]
    fn test_put_price_reference_value() {
        assert_relative_eq!(reference_put().price(), 7.9656, epsilon = 1e-4);
    }

    #[test]
    fn test_standard_call_reference_value() {
        // S=100, K=100, r=0.05, σ=0.2, T=1 → 10.4506
        let call = EuropeanOption::new(OptionType::Call, 1.0, 100.0, 100.0, 0.05, 0.2);
        assert_relative_eq!(call.price(), 10.4506, epsilon = 1e-4);
    }

    #[test]
    fn test_black_76_futures_option() {
        // Haug: F=19, K=19, T=0.75, r=0.10, σ=0.28, b=0 → put 1.7011
        let put = EuropeanOption::new(OptionType::Put, 0.75, 19.0, 19.0, 0.10, 0.28)
            .with_cost_of_carry(0.0);
        assert_relative_eq!(put.price(), 1.7011, epsilon = 1e-4);
    }

    #[test]
    fn test_garman_kohlhagen_fx_option() {
        // Haug: S=1.56, K=1.60, T=0.5, r=0.06, r_f=0.08, σ=0.12 → call 0.0291
        let call = EuropeanOption::new(OptionType::Call, 0.5, 1.60, 1.56, 0.06, 0.12)
            .with_cost_of_carry(0.06 - 0.08);
        assert_relative_eq!(call.price(), 0.0291, epsilon = 1e-4);
    }

    #[test]
    fn test_deep_itm_call_near_forward_intrinsic() {
        let call = reference_call().with_spot(200.0);
        let intrinsic = 200.0 - 65.0 * (-0.08_f64 * 0.25).exp();
        assert_relative_eq!(call.price(), intrinsic, epsilon = 1e-8);
    }

    #[test]
    fn test_deep_otm_call_near_zero() {
        let call = reference_call().with_spot(20.0);
        assert!(call.price() < 1e-10);
        assert!(call.price() >= 0.0);
    }

    #[test]
    fn test_deep_itm_put_near_forward_intrinsic() {
        let put = reference_put().with_spot(20.0);
        assert_relative_eq!(put.price(), 80.0, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_volatility_propagates_nan() {
        // ln(S/K) = 0 and b = 0 make d1 = 0/0
        let call = reference_call()
            .with_volatility(0.0)
            .with_spot(65.0)
            .with_cost_of_carry(0.0);
        assert!(call.price().is_nan());
    }

    // ==========================================================
    // Put-Call Parity Tests
    // ==========================================================

    #[test]
    fn test_price_by_parity_call_gives_put() {
        let call = reference_call();
        assert_relative_eq!(
            call.price_by_put_call_parity(),
            call.opposite().price(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_price_by_parity_put_gives_call() {
        let put = reference_put();
        assert_relative_eq!(
            put.price_by_put_call_parity(),
            put.opposite().price(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_parity_gap_with_cost_of_carry() {
        let call = reference_call().with_cost_of_carry(0.03);
        assert!(call.parity_gap().abs() < 1e-12);
        assert!(call.opposite().parity_gap().abs() < 1e-12);
    }

    // ==========================================================
    // Reporting
    // ==========================================================

    #[test]
    fn test_description() {
        assert_eq!(
            reference_call().description(),
            "Option 1: Call, T: 0.25, K: 65, S: 60, r: 0.08, sigma: 0.3, b: 0.08"
        );
    }

    #[test]
    fn test_to_fields_order() {
        let fields = reference_put().to_fields();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0], "2");
        assert_eq!(fields[1], "Put");
        assert_eq!(fields[2], "1.000000");
        assert_eq!(fields[7], "0.000000");
    }
}
