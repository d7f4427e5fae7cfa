//! Elasticity of the diffusion term, `S^β` in `dS = rS dt + σ S^β dW`.

use std::fmt;

/// Diffusion elasticity `β`.
///
/// `β = 1` is geometric Brownian motion; `β = 0.5` and `β = 2` are the usual
/// CEV special cases. The special cases skip `powf` but agree with it to
/// rounding.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::Elasticity;
///
/// assert_eq!(Elasticity::from_beta(0.5), Elasticity::SquareRoot);
/// assert_eq!(Elasticity::from_beta(0.7), Elasticity::General(0.7));
/// assert_eq!(Elasticity::Quadratic.apply(3.0), 9.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Elasticity {
    /// β = 1
    #[default]
    Linear,
    /// β = 0.5
    SquareRoot,
    /// β = 2
    Quadratic,
    /// Any other exponent
    General(f64),
}

impl Elasticity {
    /// Picks the special case for exactly 1, 0.5 or 2, `General` otherwise.
    pub fn from_beta(beta: f64) -> Self {
        if beta == 1.0 {
            Elasticity::Linear
        } else if beta == 0.5 {
            Elasticity::SquareRoot
        } else if beta == 2.0 {
            Elasticity::Quadratic
        } else {
            Elasticity::General(beta)
        }
    }

    /// The exponent β.
    pub fn beta(&self) -> f64 {
        match self {
            Elasticity::Linear => 1.0,
            Elasticity::SquareRoot => 0.5,
            Elasticity::Quadratic => 2.0,
            Elasticity::General(beta) => *beta,
        }
    }

    /// Evaluates `x^β`.
    #[inline(always)]
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Elasticity::Linear => x,
            Elasticity::SquareRoot => x.sqrt(),
            Elasticity::Quadratic => x * x,
            Elasticity::General(beta) => x.powf(*beta),
        }
    }
}

impl From<f64> for Elasticity {
    fn from(beta: f64) -> Self {
        Self::from_beta(beta)
    }
}

impl fmt::Display for Elasticity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "β = {}", self.beta())
    }
}
