//! SI physical constants and quantity types shared by world generation.

pub mod constants;
pub mod length;
pub mod mass;
pub mod pressure;

#[cfg(test)]
mod mass_test;

pub use length::Length;
pub use mass::Mass;
pub use pressure::Pressure;
