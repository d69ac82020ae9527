//! Power button handling
//!
//! Turns raw button samples into a power-off request.

pub mod hold;

pub use hold::{ButtonHold, POWER_OFF_HOLD_MS};
