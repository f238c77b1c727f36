//! # Configuration Module
//!
//! Centralizes the constants of the transform algebra. The library performs
//! no I/O and reads no configuration files; every tunable is a constant here,
//! with interdependencies documented and checked at compile time.
//!
//! ## Module Organization
//!
//! - [`constants`]: Sentinels, inline capacities and cache bounds

pub mod constants;
pub use constants::*;
