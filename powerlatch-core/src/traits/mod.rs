//! Hardware abstraction traits
//!
//! These traits define the interface between the power logic
//! and the board-specific pin drivers.

pub mod power;

pub use power::{AuxiliaryShutdown, ModulePower, PowerRailControl};
