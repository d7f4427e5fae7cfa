//! # Pricer Pricing
//!
//! Parallel Monte Carlo valuation of European options, checked against the
//! closed-form model of `pricer_models`.
//!
//! - [`mc`]: configuration, Euler-Maruyama stepping with CEV elasticity,
//!   parallel payoff accumulation and error statistics
//! - [`rng`]: seeded per-worker normal generators
//! - [`report`]: the error-analysis table and its sinks
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::analytical::EuropeanOption;
//! use pricer_models::instruments::OptionType;
//! use pricer_pricing::mc::{Elasticity, MonteCarloConfig, MonteCarloEngine};
//!
//! let call = EuropeanOption::new(OptionType::Call, 0.25, 65.0, 60.0, 0.08, 0.3);
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .subintervals(100)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let result = MonteCarloEngine::with_config(call, config).simulate(Elasticity::Linear, true);
//! println!("{}", result.error_report().unwrap());
//! ```

#![warn(missing_docs)]

pub mod mc;
pub mod report;
pub mod rng;
