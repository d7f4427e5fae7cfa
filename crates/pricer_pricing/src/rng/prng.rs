//! Pseudo-random number generator wrapper for Monte Carlo simulations.
//!
//! This module provides [`PricerRng`], a seeded PRNG wrapper, and
//! [`stream_seed`], which derives decorrelated seeds for parallel workers
//! from a single base seed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Monte Carlo simulation random number generator.
///
/// Provides seeded, reproducible standard normal draws. Each worker of a
/// parallel simulation owns its own instance; nothing is shared between
/// threads.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng1 = PricerRng::from_seed(12345);
/// let mut rng2 = PricerRng::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
/// ```
#[derive(Debug, Clone)]
pub struct PricerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl PricerRng {
    /// Creates a new RNG instance initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates the generator for worker `stream_index` of a run seeded with
    /// `base_seed`.
    ///
    /// ```rust
    /// use pricer_pricing::rng::{stream_seed, PricerRng};
    ///
    /// let rng = PricerRng::for_stream(42, 3);
    /// assert_eq!(rng.seed(), stream_seed(42, 3));
    /// ```
    #[inline]
    pub fn for_stream(base_seed: u64, stream_index: usize) -> Self {
        Self::from_seed(stream_seed(base_seed, stream_index))
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }
}

/// Seed for parallel stream `stream_index` derived from `base_seed`.
///
/// Applies one SplitMix64 round to the base seed offset by the stream index,
/// so adjacent streams start from unrelated generator states.
#[inline]
pub fn stream_seed(base_seed: u64, stream_index: usize) -> u64 {
    let mut z = base_seed
        .wrapping_add((stream_index as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Base seed drawn from the thread-local entropy source, used when a run
/// is not pinned to a seed.
#[inline]
pub fn fresh_seed() -> u64 {
    rand::random::<u64>()
}
