//! Seeded, reproducible random streams.
//!
//! Every stream is derived from a string key, so the same key always yields
//! the same sequence on every platform. Worlds never touch a process-wide RNG.

pub mod seed;
pub mod source;
pub mod stream;

#[cfg(test)]
mod seed_test;

pub use seed::derive_seed;
pub use source::{KeyedSource, RandomSource};
pub use stream::SeededStream;
