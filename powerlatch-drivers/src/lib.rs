//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in powerlatch-core on top of the powerlatch-hal GPIO traits:
//!
//! - Power latch rail and power button
//! - Auxiliary shutdown lines (audio amplifier, haptic motor)
//! - RF module power switches

#![no_std]
#![deny(unsafe_code)]

pub mod power;
