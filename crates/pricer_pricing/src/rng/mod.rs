//! # Random Number Generation
//!
//! Seeded normal draws for the Monte Carlo engine.
//!
//! - **Reproducibility**: a base seed plus a stream index fully determines
//!   every draw of a worker
//! - **Independence**: each worker owns its own [`PricerRng`]; streams are
//!   decorrelated through [`stream_seed`]
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut worker = PricerRng::for_stream(12345, 0);
//! let z = worker.gen_normal();
//! assert!(z.is_finite());
//! ```

pub mod prng;

pub use prng::{fresh_seed, stream_seed, PricerRng};
