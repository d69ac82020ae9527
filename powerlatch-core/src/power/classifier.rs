//! Reset classifier
//!
//! Runs once per reset, before the runtime initializes RAM. When the
//! device was not intentionally powered off, the latch line is re-driven
//! while the supply is still riding on its hold-up capacitance, and a
//! reset that interrupted a powered-on session is recorded in the powerup
//! reason.

use powerlatch_hal::{PeripheralClock, RetainedWord};

use super::flags::{PowerupReason, ShutdownReason};
use super::sequencer::PowerSequencer;
use crate::traits::{AuxiliaryShutdown, ModulePower, PowerRailControl};

/// Cycles to wait between enabling the GPIO clock and the first register
/// access (STM32F4 errata: two NOPs)
pub const CLOCK_ENABLE_WAIT_CYCLES: u32 = 2;

/// Outcome of reset classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetClass {
    /// The last recorded action was an intentional power-off. The rail was
    /// left alone; the device stays off unless the button is holding it up.
    IntentionalShutdown,
    /// No shutdown on record and no dirty session: first boot after a real
    /// power-up, or indeterminate flags. Power was latched on.
    ColdStart,
    /// A powered-on session was interrupted by a reset. Power was latched
    /// back on and the powerup reason marked dirty.
    UnintendedReset,
}

impl ResetClass {
    /// Check whether the classifier latched the rail on
    pub fn restored_power(&self) -> bool {
        !matches!(self, ResetClass::IntentionalShutdown)
    }

    /// Encode for hand-over from the pre-init hook to `main`
    pub const fn to_word(self) -> u32 {
        match self {
            ResetClass::IntentionalShutdown => 0x5afe_0ff0,
            ResetClass::ColdStart => 0xc01d_b007,
            ResetClass::UnintendedReset => 0xbad0_b007,
        }
    }

    /// Decode a hand-over word, `None` if it was never written this boot
    pub const fn from_word(word: u32) -> Option<Self> {
        match word {
            0x5afe_0ff0 => Some(ResetClass::IntentionalShutdown),
            0xc01d_b007 => Some(ResetClass::ColdStart),
            0xbad0_b007 => Some(ResetClass::UnintendedReset),
            _ => None,
        }
    }
}

/// Classify the reset that just happened and restore power if needed
///
/// Must be the first thing to run after reset. The only branch condition
/// is whether an intentional shutdown is on record; anything short of the
/// exact request word keeps the device powered.
pub fn classify_reset<R, W, A, M, C>(
    sequencer: &mut PowerSequencer<R, W, A, M>,
    clock: &mut C,
) -> ResetClass
where
    R: PowerRailControl,
    W: RetainedWord,
    A: AuxiliaryShutdown,
    M: ModulePower,
    C: PeripheralClock,
{
    clock.enable();
    clock.wait_cycles(CLOCK_ENABLE_WAIT_CYCLES);

    if !sequencer.state.is_unrequested_shutdown() {
        return ResetClass::IntentionalShutdown;
    }

    sequencer.rail.configure_output();

    let dirty = sequencer.state.shutdown_reason() == Some(ShutdownReason::Dirty);
    if dirty {
        sequencer.state.set_powerup_reason(PowerupReason::Dirty);
    }

    sequencer.power_on();

    if dirty {
        ResetClass::UnintendedReset
    } else {
        ResetClass::ColdStart
    }
}
