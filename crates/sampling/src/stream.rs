//! ChaCha-backed random stream

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::seed::derive_seed;
use crate::source::{KeyedSource, RandomSource};

/// A reproducible random stream bound to one string key
///
/// # Example
/// ```
/// use sampling::{RandomSource, SeededStream};
///
/// let mut a = SeededStream::from_key("genesis_planetary");
/// let mut b = SeededStream::from_key("genesis_planetary");
///
/// // Same key always produces the same sequence
/// assert_eq!(a.gaussian(0.0, 1.0), b.gaussian(0.0, 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct SeededStream {
    rng: ChaCha8Rng,
    draws: u64,
}

impl SeededStream {
    /// Creates a stream seeded from a string key
    pub fn from_key(key: &str) -> Self {
        Self::from_seed(derive_seed(key))
    }

    /// Creates a stream from an explicit numeric seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Number of unit draws consumed so far
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl RandomSource for SeededStream {
    fn unit(&mut self) -> f64 {
        self.draws += 1;
        self.rng.random_range(0.0..1.0)
    }
}

impl KeyedSource for SeededStream {
    fn from_key(key: &str) -> Self {
        SeededStream::from_key(key)
    }
}
