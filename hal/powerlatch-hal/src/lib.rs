//! Powerlatch Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the soft-power logic is written
//! against. Chip-specific HALs implement them; the core and driver crates
//! only ever see these traits, so the whole power sequencing path can be
//! exercised on the host with mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  powerlatch-firmware (pre_init + main)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  powerlatch-core / powerlatch-drivers   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  powerlatch-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ powerlatch-hal-   │
//!           │     stm32f4       │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::ConfigurableOutput`], [`gpio::ConfigurableInput`] - Runtime pin direction
//! - [`clock::PeripheralClock`] - Peripheral clock gating with errata wait
//! - [`retained::RetainedWord`] - RAM words that survive a reset

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod retained;

// Re-export key traits at crate root for convenience
pub use clock::PeripheralClock;
pub use gpio::{ConfigurableInput, ConfigurableOutput, InputPin, OutputPin};
pub use retained::RetainedWord;
