//! Board-agnostic soft-power logic
//!
//! This crate contains everything about the power latch that does not
//! depend on a specific chip:
//!
//! - Retained power flags and their fail-open decoding
//! - Power sequencer (init, power on, power off, button sense)
//! - Reset classifier run from the pre-init hook
//! - Power button hold detection
//! - Board pin map configuration types

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod button;
pub mod config;
pub mod power;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;
