//! Configuration types
//!
//! Board pin map for the power latch and its auxiliary lines.

pub mod hardware;

pub use hardware::*;
