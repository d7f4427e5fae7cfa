//! Monte Carlo pricing of European options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine
//! ├── EuropeanOption     (contract + closed-form reference price)
//! ├── MonteCarloConfig   (subintervals, paths, seed, workers)
//! ├── ReportSink         (where error reports go)
//! └── simulate()
//!     ├── split_paths()              one partition per worker
//!     ├── EulerScheme::simulate_chunk() per partition, own PricerRng
//!     └── PayoffAccumulator::merge()  partition order
//! ```
//!
//! Each path starts at the spot and takes `subintervals` Euler-Maruyama
//! steps of `S ← S + r·dt·S + σ·√dt·S^β·Z`. The terminal payoff is averaged
//! and discounted at `r`.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pricer_models::analytical::EuropeanOption;
//! use pricer_models::instruments::OptionType;
//! use pricer_pricing::mc::MonteCarloEngine;
//! use pricer_pricing::report::MemorySink;
//!
//! let put = EuropeanOption::new(OptionType::Put, 1.0, 100.0, 100.0, 0.0, 0.2);
//! let sink = Arc::new(MemorySink::new());
//! let engine = MonteCarloEngine::new(put, 100, 1_000).with_sink(sink.clone());
//!
//! let price = engine.price(1.0, true);
//! assert!(price > 0.0);
//! assert_eq!(sink.reports()[0].simulations, 1_000);
//! ```

mod accumulator;
mod config;
mod elasticity;
mod engine;
mod error;
mod paths;
mod result;
mod statistics;

pub use accumulator::PayoffAccumulator;
pub use config::{
    MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_PATHS, DEFAULT_SUBINTERVALS, MAX_PATHS,
    MAX_SUBINTERVALS, MAX_WORKERS,
};
pub use elasticity::Elasticity;
pub use engine::MonteCarloEngine;
pub use error::ConfigError;
pub use paths::{split_paths, EulerScheme};
pub use result::SimulationResult;
pub use statistics::{standard_deviation, standard_error};
