//! Embassy async tasks
//!
//! The power task is the single owner of the sequencer.

pub mod power;

pub use power::power_task;
