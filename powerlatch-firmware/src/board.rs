//! Board wiring
//!
//! Binds the board.toml pin map to concrete STM32F429 pins. The reset
//! hook works from [`BOARD_POWER_CONFIG`] alone; the runtime pins are
//! taken from `Peripherals` through the generated `power_pin!`, so both
//! paths always drive the same lines.

use embassy_stm32::gpio::{Flex, Pull, Speed};
use embassy_stm32::Peripherals;

use powerlatch_core::config::{PinConfig, PowerConfig};
use powerlatch_core::power::{PowerSequencer, PowerState};
use powerlatch_drivers::power::{GpioAuxShutdown, GpioModulePower, GpioPowerRail, RailPolarity};
use powerlatch_hal_stm32f4::gpio::{FlexInput, FlexOutput};
use powerlatch_hal_stm32f4::raw::RawPin;
use powerlatch_hal_stm32f4::retained::NoInitWord;

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));

/// Rail used by the reset hook, before embassy is up
pub type ResetRail = GpioPowerRail<RawPin, RawPin>;

/// Rail used once the executor runs
pub type BoardRail = GpioPowerRail<FlexOutput<'static>, FlexInput<'static>>;

/// Audio amplifier first, then haptic motor
pub type BoardAux = (
    GpioAuxShutdown<FlexOutput<'static>>,
    GpioAuxShutdown<FlexOutput<'static>>,
);

pub type BoardModules = GpioModulePower<FlexOutput<'static>, FlexOutput<'static>>;

/// The sequencer owned by the power task
pub type BoardSequencer = PowerSequencer<BoardRail, NoInitWord, BoardAux, BoardModules>;

/// Build the register-level rail for the reset hook
pub fn reset_rail() -> ResetRail {
    let config = &BOARD_POWER_CONFIG;
    GpioPowerRail::new(
        RawPin::new(&config.pwr_on),
        RawPin::new(&config.pwr_switch),
        RailPolarity::from_config(config),
    )
}

/// Build the runtime sequencer from embassy peripherals
///
/// Only wraps the pins; nothing is driven until `init` is called.
pub fn sequencer(p: Peripherals, state: PowerState<NoInitWord>) -> BoardSequencer {
    let config = &BOARD_POWER_CONFIG;

    let rail = GpioPowerRail::new(
        FlexOutput::new(
            Flex::new(power_pin!(pwr_on, p)),
            &config.pwr_on,
            Speed::Low,
            Pull::Up,
        ),
        FlexInput::new(Flex::new(power_pin!(pwr_switch, p)), pull_for(&config.pwr_switch)),
        RailPolarity::from_config(config),
    );

    let aux = (
        GpioAuxShutdown::shutdown_input(
            FlexOutput::new(
                Flex::new(power_pin!(audio_shutdown, p)),
                &config.audio_shutdown,
                Speed::Low,
                pull_for(&config.audio_shutdown),
            ),
            &config.audio_shutdown,
        ),
        GpioAuxShutdown::drive_line(
            FlexOutput::new(Flex::new(power_pin!(haptic, p)), &config.haptic, Speed::Low, Pull::None),
            &config.haptic,
        ),
    );

    let modules = GpioModulePower::new(
        FlexOutput::new(
            Flex::new(power_pin!(intmodule_pwr, p)),
            &config.intmodule_pwr,
            Speed::Low,
            Pull::None,
        ),
        FlexOutput::new(
            Flex::new(power_pin!(extmodule_pwr, p)),
            &config.extmodule_pwr,
            Speed::Low,
            Pull::None,
        ),
    );

    PowerSequencer::with_peripherals(rail, state, aux, modules)
}

/// Active-low inputs idle high
fn pull_for(pin: &PinConfig) -> Pull {
    if pin.inverted {
        Pull::Up
    } else {
        Pull::Down
    }
}
