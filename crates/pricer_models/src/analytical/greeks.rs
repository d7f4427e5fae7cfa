//! Analytical and finite-difference sensitivities.
//!
//! All Greeks are closed-form partials of [`EuropeanOption::price`] under
//! generalised Black-Scholes-Merton. Notation: `carry = e^((b-r)T)`,
//! `n = N'(d₁)`.
//!
//! Time conventions: `theta`, `charm`, `color` and `veta` differentiate with
//! respect to calendar time (`-∂/∂T`), so a long ATM option has negative
//! theta. `d_vega_d_time` is `∂Vega/∂T`. `rho` moves the cost of carry
//! together with the rate.
//!
//! Like the price, none of these validate their inputs: σ = 0 or T = 0
//! yields NaN or infinities.

use super::distributions::{norm_cdf, norm_pdf};
use super::EuropeanOption;
use crate::instruments::OptionType;

/// Snapshot of every sensitivity of one option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// -∂V/∂T
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
    /// ∂²V/∂S∂σ
    pub vanna: f64,
    /// -∂Δ/∂T
    pub charm: f64,
    /// ∂Γ/∂S
    pub speed: f64,
    /// -∂Γ/∂T
    pub color: f64,
    /// ∂Vega/∂T
    pub d_vega_d_time: f64,
    /// ∂²V/∂σ²
    pub vomma: f64,
    /// -∂Vega/∂T
    pub veta: f64,
    /// ∂Γ/∂σ
    pub zomma: f64,
    /// Δ·S/V
    pub lambda: f64,
    /// ∂³V/∂σ³
    pub ultima: f64,
}

/// Quantities shared by most Greeks.
struct Terms {
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    carry: f64,
    density: f64,
}

impl EuropeanOption {
    fn terms(&self) -> Terms {
        let d1 = self.d1();
        Terms {
            d1,
            d2: self.d2_from(d1),
            sqrt_t: self.maturity().sqrt(),
            carry: self.carry_factor(),
            density: norm_pdf(d1),
        }
    }

    /// Delta: call `carry·N(d₁)`, put `carry·(N(d₁) - 1)`.
    pub fn delta(&self) -> f64 {
        let t = self.terms();
        match self.kind() {
            OptionType::Call => t.carry * norm_cdf(t.d1),
            OptionType::Put => t.carry * (norm_cdf(t.d1) - 1.0),
        }
    }

    /// Gamma, identical for calls and puts.
    pub fn gamma(&self) -> f64 {
        let t = self.terms();
        t.carry * t.density / (self.spot() * self.volatility() * t.sqrt_t)
    }

    /// Vega per unit of volatility (not per vol point).
    pub fn vega(&self) -> f64 {
        let t = self.terms();
        self.spot() * t.carry * t.density * t.sqrt_t
    }

    /// Theta per year of calendar time.
    pub fn theta(&self) -> f64 {
        let t = self.terms();
        let (s, k, r, b) = (self.spot(), self.strike(), self.rate(), self.cost_of_carry());
        let spot_leg = s * t.carry;
        let strike_leg = k * self.discount_factor();
        let decay = -spot_leg * t.density * self.volatility() / (2.0 * t.sqrt_t);

        match self.kind() {
            OptionType::Call => {
                decay - (b - r) * spot_leg * norm_cdf(t.d1) - r * strike_leg * norm_cdf(t.d2)
            }
            OptionType::Put => {
                decay + (b - r) * spot_leg * norm_cdf(-t.d1) + r * strike_leg * norm_cdf(-t.d2)
            }
        }
    }

    /// Rho with `b - r` held fixed.
    pub fn rho(&self) -> f64 {
        let d2 = self.d2();
        let scaled = self.strike() * self.maturity() * self.discount_factor();
        match self.kind() {
            OptionType::Call => scaled * norm_cdf(d2),
            OptionType::Put => -scaled * norm_cdf(-d2),
        }
    }

    /// Vanna, ∂Δ/∂σ.
    pub fn vanna(&self) -> f64 {
        let t = self.terms();
        -t.carry * t.density * t.d2 / self.volatility()
    }

    /// Charm, delta decay per year of calendar time.
    pub fn charm(&self) -> f64 {
        let t = self.terms();
        let (r, b) = (self.rate(), self.cost_of_carry());
        let drift = b / (self.volatility() * t.sqrt_t) - t.d2 / (2.0 * self.maturity());
        let common = -t.carry * t.density * drift;

        match self.kind() {
            OptionType::Call => common + (r - b) * t.carry * norm_cdf(t.d1),
            OptionType::Put => common - (r - b) * t.carry * norm_cdf(-t.d1),
        }
    }

    /// Speed, ∂Γ/∂S.
    pub fn speed(&self) -> f64 {
        let sigma_sqrt_t = self.volatility() * self.maturity().sqrt();
        -self.gamma() / self.spot() * (1.0 + self.d1() / sigma_sqrt_t)
    }

    /// Color, gamma decay per year of calendar time.
    pub fn color(&self) -> f64 {
        let t = self.terms();
        let (r, b, maturity) = (self.rate(), self.cost_of_carry(), self.maturity());
        let sigma_sqrt_t = self.volatility() * t.sqrt_t;
        self.gamma()
            * ((r - b) + b * t.d1 / sigma_sqrt_t + (1.0 - t.d1 * t.d2) / (2.0 * maturity))
    }

    /// ∂Vega/∂T, vega's sensitivity to time to maturity.
    pub fn d_vega_d_time(&self) -> f64 {
        -self.veta()
    }

    /// Vomma (volga), ∂Vega/∂σ.
    pub fn vomma(&self) -> f64 {
        let t = self.terms();
        self.vega() * t.d1 * t.d2 / self.volatility()
    }

    /// Veta, vega decay per year of calendar time.
    pub fn veta(&self) -> f64 {
        let t = self.terms();
        let (r, b, maturity) = (self.rate(), self.cost_of_carry(), self.maturity());
        let sigma_sqrt_t = self.volatility() * t.sqrt_t;
        self.vega()
            * ((r - b) + b * t.d1 / sigma_sqrt_t - (1.0 + t.d1 * t.d2) / (2.0 * maturity))
    }

    /// Zomma, ∂Γ/∂σ.
    pub fn zomma(&self) -> f64 {
        let t = self.terms();
        self.gamma() * (t.d1 * t.d2 - 1.0) / self.volatility()
    }

    /// Lambda (elasticity), `Δ·S / V`. Infinite when the price is zero.
    pub fn lambda(&self) -> f64 {
        self.delta() * self.spot() / self.price()
    }

    /// Ultima, ∂Vomma/∂σ.
    pub fn ultima(&self) -> f64 {
        let t = self.terms();
        let sigma = self.volatility();
        let d1d2 = t.d1 * t.d2;
        -self.vega() / (sigma * sigma) * (d1d2 * (1.0 - d1d2) + t.d1 * t.d1 + t.d2 * t.d2)
    }

    /// Central-difference delta with spot bump `h`.
    ///
    /// `h` must be non-zero; `h = 0` returns NaN.
    pub fn numeric_delta(&self, h: f64) -> f64 {
        let up = self.with_spot(self.spot() + h).price();
        let down = self.with_spot(self.spot() - h).price();
        (up - down) / (2.0 * h)
    }

    /// Central-difference gamma with spot bump `h`.
    pub fn numeric_gamma(&self, h: f64) -> f64 {
        let up = self.with_spot(self.spot() + h).price();
        let mid = self.price();
        let down = self.with_spot(self.spot() - h).price();
        (up - 2.0 * mid + down) / (h * h)
    }

    /// Evaluates every sensitivity at once.
    pub fn greeks(&self) -> Greeks {
        Greeks {
            delta: self.delta(),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(),
            rho: self.rho(),
            vanna: self.vanna(),
            charm: self.charm(),
            speed: self.speed(),
            color: self.color(),
            d_vega_d_time: self.d_vega_d_time(),
            vomma: self.vomma(),
            veta: self.veta(),
            zomma: self.zomma(),
            lambda: self.lambda(),
            ultima: self.ultima(),
        }
    }
}
