//! GPIO auxiliary shutdown
//!
//! Quiesces an auxiliary power consumer by driving a single line to its
//! "off" level. The audio amplifier has a dedicated shutdown input; the
//! haptic motor is stopped by dropping its drive line.
//!
//! At cold start the amplifier's shutdown line is handed back as a
//! pulled input so the amplifier rests in its default state; the haptic
//! line is left alone.

use powerlatch_core::config::PinConfig;
use powerlatch_core::traits::AuxiliaryShutdown;
use powerlatch_hal::{ConfigurableInput, ConfigurableOutput};

/// GPIO auxiliary shutdown line
pub struct GpioAuxShutdown<P> {
    pin: P,
    /// Pin level that puts the consumer in its off state
    off_high: bool,
    /// Line idles as an input at cold start
    idle_input: bool,
}

impl<P: ConfigurableOutput> GpioAuxShutdown<P> {
    /// Create a shutdown line
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `off_high`: If true, the consumer is off while the pin is HIGH
    pub fn new(pin: P, off_high: bool) -> Self {
        Self {
            pin,
            off_high,
            idle_input: false,
        }
    }

    /// Amplifier-style shutdown input: `config` is the shutdown line,
    /// asserting it turns the consumer off. The line idles as an input.
    pub fn shutdown_input(pin: P, config: &PinConfig) -> Self {
        Self {
            idle_input: true,
            ..Self::new(pin, config.active_high())
        }
    }

    /// Drive-style line: `config` is the enable line, deasserting it turns
    /// the consumer off
    pub fn drive_line(pin: P, config: &PinConfig) -> Self {
        Self::new(pin, !config.active_high())
    }

    /// Check whether the line currently holds the consumer off
    pub fn is_off(&self) -> bool {
        self.pin.is_set_high() == self.off_high
    }
}

impl<P: ConfigurableOutput + ConfigurableInput> AuxiliaryShutdown for GpioAuxShutdown<P> {
    fn shutdown(&mut self) {
        // Line may still be an input if the owning subsystem never started
        self.pin.set_as_output();
        self.pin.set_state(self.off_high);
    }

    fn idle(&mut self) {
        if self.idle_input {
            self.pin.set_as_input();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerlatch_hal::{InputPin, OutputPin};

    struct MockPin {
        high: bool,
        output: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    impl ConfigurableOutput for MockPin {
        fn set_as_output(&mut self) {
            self.output = true;
        }
    }

    impl InputPin for MockPin {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    impl ConfigurableInput for MockPin {
        fn set_as_input(&mut self) {
            self.output = false;
        }
    }

    #[test]
    fn test_audio_shutdown_active_low() {
        // Reference board: amplifier shutdown input is active-low
        let config = PinConfig::inverted('I', 9);
        let mut audio = GpioAuxShutdown::shutdown_input(MockPin { high: true, output: false }, &config);
        assert!(!audio.is_off());

        audio.shutdown();

        assert!(audio.is_off());
        assert!(audio.pin.output);
        assert!(!audio.pin.is_set_high());
    }

    #[test]
    fn test_haptic_drive_line() {
        let config = PinConfig::new('B', 8);
        let mut haptic = GpioAuxShutdown::drive_line(MockPin { high: true, output: true }, &config);

        haptic.shutdown();

        assert!(haptic.is_off());
        assert!(!haptic.pin.is_set_high());
    }

    #[test]
    fn test_shutdown_idempotent() {
        let mut aux = GpioAuxShutdown::new(MockPin { high: false, output: false }, true);
        aux.shutdown();
        aux.shutdown();
        assert!(aux.pin.is_set_high());
    }

    #[test]
    fn test_audio_line_idles_as_input() {
        let config = PinConfig::inverted('I', 9);
        let mut audio = GpioAuxShutdown::shutdown_input(MockPin { high: false, output: true }, &config);

        audio.idle();
        assert!(!audio.pin.output);

        audio.shutdown();
        assert!(audio.pin.output);
        assert!(audio.is_off());
    }

    #[test]
    fn test_haptic_line_untouched_at_idle() {
        let config = PinConfig::new('B', 8);
        let mut haptic = GpioAuxShutdown::drive_line(MockPin { high: false, output: true }, &config);

        haptic.idle();

        assert!(haptic.pin.output);
        assert!(!haptic.pin.is_set_high());
    }
}
