//! Register-level GPIO for the reset hook
//!
//! Nothing here relies on embassy having been initialized or on any
//! static being set up, so these types are safe to use from `pre_init`.

use embassy_stm32::pac;
use embassy_stm32::pac::gpio::{vals, Gpio};

use powerlatch_core::config::PinConfig;
use powerlatch_hal::{ConfigurableInput, ConfigurableOutput, InputPin, OutputPin, PeripheralClock};

/// Base address of GPIOA; ports follow at 0x400 intervals up to GPIOK
const GPIO_BASE: usize = 0x4002_0000;
const GPIO_STRIDE: usize = 0x400;
/// Highest port index on the STM32F42x (GPIOK)
const MAX_PORT_INDEX: u8 = 10;

/// Register block of the port of `config`, clamped to GPIOK
pub(crate) fn gpio_block(config: &PinConfig) -> Gpio {
    let port_index = config.port_index().min(MAX_PORT_INDEX);
    // SAFETY: the address is a GPIO register block on every STM32F42x
    // for indices up to `MAX_PORT_INDEX`.
    unsafe { Gpio::from_ptr((GPIO_BASE + GPIO_STRIDE * port_index as usize) as *mut ()) }
}

/// Directly-driven GPIO pin
///
/// Outputs are configured push-pull, low speed, with pull-up; inputs
/// with pull-up. Configuring never touches the output latch.
pub struct RawPin {
    block: Gpio,
    pin: usize,
}

impl RawPin {
    /// Create a pin from a configured designator
    ///
    /// The port clock must already be running (see [`AhbClock`]) before
    /// any method is called. Ports beyond GPIOK are clamped to GPIOK.
    pub fn new(config: &PinConfig) -> Self {
        Self {
            block: gpio_block(config),
            pin: config.pin as usize,
        }
    }
}

impl OutputPin for RawPin {
    fn set_high(&mut self) {
        self.block.bsrr().write(|w| w.set_bs(self.pin, true));
    }

    fn set_low(&mut self) {
        self.block.bsrr().write(|w| w.set_br(self.pin, true));
    }

    fn is_set_high(&self) -> bool {
        self.block.odr().read().odr(self.pin) == vals::Odr::HIGH
    }
}

impl ConfigurableOutput for RawPin {
    fn set_as_output(&mut self) {
        let pin = self.pin;
        self.block.otyper().modify(|w| w.set_ot(pin, vals::Ot::PUSH_PULL));
        self.block.ospeedr().modify(|w| w.set_ospeedr(pin, vals::Ospeedr::LOW_SPEED));
        self.block.pupdr().modify(|w| w.set_pupdr(pin, vals::Pupdr::PULL_UP));
        self.block.moder().modify(|w| w.set_moder(pin, vals::Moder::OUTPUT));
    }
}

impl InputPin for RawPin {
    fn is_high(&self) -> bool {
        self.block.idr().read().idr(self.pin) == vals::Idr::HIGH
    }
}

impl ConfigurableInput for RawPin {
    fn set_as_input(&mut self) {
        let pin = self.pin;
        self.block.pupdr().modify(|w| w.set_pupdr(pin, vals::Pupdr::PULL_UP));
        self.block.moder().modify(|w| w.set_moder(pin, vals::Moder::INPUT));
    }
}

/// AHB1 clock gate of one GPIO port
pub struct AhbClock {
    port_index: u8,
}

impl AhbClock {
    /// Clock gate for the port of `config`
    pub fn for_pin(config: &PinConfig) -> Self {
        Self {
            port_index: config.port_index().min(MAX_PORT_INDEX),
        }
    }
}

impl PeripheralClock for AhbClock {
    fn enable(&mut self) {
        // GPIOxEN bits sit at positions 0..=10 of AHB1ENR
        let bit = 1u32 << self.port_index;
        pac::RCC.ahb1enr().modify(|w| w.0 |= bit);
    }

    fn wait_cycles(&mut self, cycles: u32) {
        for _ in 0..cycles {
            cortex_m::asm::nop();
        }
    }
}
