//! GPIO power latch rail
//!
//! Drives the soft-power latch line and reads the power button, each
//! with its own active level.

use powerlatch_core::config::PowerConfig;
use powerlatch_core::traits::PowerRailControl;
use powerlatch_hal::{ConfigurableInput, ConfigurableOutput};

/// Active levels of the latch and button lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RailPolarity {
    /// Latch holds the supply on when the line is high
    pub latch_active_high: bool,
    /// Button reads high while pressed
    pub button_pressed_high: bool,
}

impl RailPolarity {
    /// Take the active levels from the board pin map
    pub const fn from_config(config: &PowerConfig) -> Self {
        Self {
            latch_active_high: config.pwr_on.active_high(),
            button_pressed_high: config.pwr_switch.active_high(),
        }
    }
}

impl Default for RailPolarity {
    fn default() -> Self {
        Self::from_config(&PowerConfig::reference())
    }
}

/// GPIO power latch
///
/// Construction does not touch the pins; in particular the latch line
/// keeps whatever level it currently holds until `energize` or `release`.
pub struct GpioPowerRail<O, I> {
    latch: O,
    button: I,
    polarity: RailPolarity,
}

impl<O: ConfigurableOutput, I: ConfigurableInput> GpioPowerRail<O, I> {
    /// Create a new power rail
    ///
    /// # Arguments
    /// - `latch`: Pin driving the supply latch
    /// - `button`: Pin reading the power button
    /// - `polarity`: Active levels of both pins
    pub fn new(latch: O, button: I, polarity: RailPolarity) -> Self {
        Self {
            latch,
            button,
            polarity,
        }
    }

    /// Give back the pins
    pub fn release_pins(self) -> (O, I) {
        (self.latch, self.button)
    }
}

impl<O: ConfigurableOutput, I: ConfigurableInput> PowerRailControl for GpioPowerRail<O, I> {
    fn configure(&mut self) {
        self.latch.set_as_output();
        self.button.set_as_input();
    }

    fn configure_output(&mut self) {
        self.latch.set_as_output();
    }

    fn energize(&mut self) {
        self.latch.set_state(self.polarity.latch_active_high);
    }

    fn release(&mut self) {
        self.latch.set_state(!self.polarity.latch_active_high);
    }

    fn is_energized(&self) -> bool {
        self.latch.is_set_high() == self.polarity.latch_active_high
    }

    fn is_button_pressed(&self) -> bool {
        self.button.is_high() == self.polarity.button_pressed_high
    }
}
