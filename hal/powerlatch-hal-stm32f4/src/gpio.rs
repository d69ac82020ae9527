//! Embassy GPIO adapters for STM32F4
//!
//! Wraps `embassy_stm32::gpio::Flex` so the runtime pins implement the
//! powerlatch-hal traits.
//!
//! Dropping a `Flex` disconnects the pin. The latch pin is owned by the
//! power task for the life of the firmware and is never dropped.

use embassy_stm32::gpio::{Flex, Pull, Speed};
use embassy_stm32::pac::gpio::{vals, Gpio};

use powerlatch_core::config::PinConfig;
use powerlatch_hal::{ConfigurableInput, ConfigurableOutput, InputPin, OutputPin};

use crate::raw::gpio_block;

fn pupdr(pull: Pull) -> vals::Pupdr {
    match pull {
        Pull::None => vals::Pupdr::FLOATING,
        Pull::Up => vals::Pupdr::PULL_UP,
        Pull::Down => vals::Pupdr::PULL_DOWN,
    }
}

/// Output pin backed by an embassy `Flex`
///
/// `pull` applies in both directions, matching the register-level
/// [`RawPin`](crate::raw::RawPin) setup of the reset hook.
pub struct FlexOutput<'d> {
    pin: Flex<'d>,
    block: Gpio,
    index: usize,
    speed: Speed,
    pull: Pull,
}

impl<'d> FlexOutput<'d> {
    /// Wrap a pin; direction is only set by `set_as_output`
    ///
    /// `config` must name the same pin as `pin`.
    pub fn new(pin: Flex<'d>, config: &PinConfig, speed: Speed, pull: Pull) -> Self {
        Self {
            pin,
            block: gpio_block(config),
            index: config.pin as usize,
            speed,
            pull,
        }
    }
}

impl OutputPin for FlexOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

impl ConfigurableOutput for FlexOutput<'_> {
    fn set_as_output(&mut self) {
        self.pin.set_as_output(self.speed);
        // Flex leaves outputs floating
        let (index, pull) = (self.index, pupdr(self.pull));
        self.block.pupdr().modify(|w| w.set_pupdr(index, pull));
    }
}

impl InputPin for FlexOutput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

impl ConfigurableInput for FlexOutput<'_> {
    fn set_as_input(&mut self) {
        self.pin.set_as_input(self.pull);
    }
}

/// Input pin backed by an embassy `Flex`
pub struct FlexInput<'d> {
    pin: Flex<'d>,
    pull: Pull,
}

impl<'d> FlexInput<'d> {
    /// Wrap a pin; direction is only set by `set_as_input`
    pub fn new(pin: Flex<'d>, pull: Pull) -> Self {
        Self { pin, pull }
    }
}

impl InputPin for FlexInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

impl ConfigurableInput for FlexInput<'_> {
    fn set_as_input(&mut self) {
        self.pin.set_as_input(self.pull);
    }
}
