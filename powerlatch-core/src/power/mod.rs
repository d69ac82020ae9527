//! Soft-power state and sequencing
//!
//! The device's own supply is held on by a latch line. Three retained
//! flags record why the firmware is running; the sequencer keeps those
//! flags and the latch line in step, and the reset classifier reads them
//! once per reset to decide whether to re-latch the supply.

pub mod classifier;
pub mod flags;
pub mod report;
pub mod sequencer;
pub mod store;

pub use classifier::{classify_reset, ResetClass, CLOCK_ENABLE_WAIT_CYCLES};
pub use flags::{PowerupReason, ShutdownReason, ShutdownRequest};
pub use report::BootReport;
pub use sequencer::PowerSequencer;
pub use store::{PowerState, RamWord, StateSnapshot};
