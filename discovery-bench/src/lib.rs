//! # Discovery Bench
//!
//! Fixtures and timing helpers shared by the codec benchmarks.

pub mod encoding;
pub mod fixtures;
