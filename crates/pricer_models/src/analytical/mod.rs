//! Closed-form pricing of European options.
//!
//! - [`EuropeanOption`]: generalised Black-Scholes-Merton price with cost of carry
//! - [`Greeks`]: analytical sensitivities plus central-difference delta/gamma
//! - Put-call parity helpers and the
//!   [`check_put_call_parity`](EuropeanOption::check_put_call_parity) diagnostic
//! - [`norm_cdf`]/[`norm_pdf`]: standard normal distribution functions

pub mod distributions;
pub mod error;
pub mod european;
pub mod greeks;
pub mod parity;

pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use european::EuropeanOption;
pub use greeks::Greeks;
pub use parity::DEFAULT_PARITY_THRESHOLD;
