//! STM32F4-specific HAL for the powerlatch firmware
//!
//! This crate provides STM32F4 implementations of the `powerlatch-hal`
//! traits. It supports:
//!
//! - STM32F429BI / STM32F429ZI
//!
//! # Features
//!
//! - `stm32f429bi`, `stm32f429zi` - Chip selection
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! Two pin flavours are provided. [`raw`] talks to the GPIO and RCC
//! registers directly and is meant for the cortex-m-rt `pre_init` hook,
//! where embassy has not been initialized and no static may be touched.
//! [`gpio`] wraps embassy `Flex` pins for use once the executor runs.
//! Both are configured from the same [`PinConfig`].
//!
//! [`retained`] holds the power flags in `.uninit` RAM.
//!
//! [`PinConfig`]: powerlatch_core::config::PinConfig

#![no_std]

pub mod gpio;
pub mod raw;
pub mod retained;

// Re-export shared types from powerlatch-hal
pub use powerlatch_hal::{PeripheralClock, RetainedWord};
