//! RF module power switches

use powerlatch_core::traits::ModulePower;
use powerlatch_hal::ConfigurableOutput;

/// Internal and external module power switches, both active-high
pub struct GpioModulePower<I, E> {
    internal: I,
    external: E,
}

impl<I: ConfigurableOutput, E: ConfigurableOutput> GpioModulePower<I, E> {
    pub fn new(internal: I, external: E) -> Self {
        Self { internal, external }
    }

    /// Check whether either module bay is powered
    pub fn any_powered(&self) -> bool {
        self.internal.is_set_high() || self.external.is_set_high()
    }
}

impl<I: ConfigurableOutput, E: ConfigurableOutput> ModulePower for GpioModulePower<I, E> {
    fn power_off_modules(&mut self) {
        // Latch low before switching to output so the bays never glitch on
        self.internal.set_low();
        self.internal.set_as_output();

        self.external.set_low();
        self.external.set_as_output();
    }
}
