//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin output latch is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin output latch is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Output pin whose direction is configured at runtime
///
/// The soft-power line has to be switched to output from code that runs
/// before the HAL is initialized, and again from normal startup. Both
/// calls must be idempotent.
pub trait ConfigurableOutput: OutputPin {
    /// Configure the pin as a push-pull output.
    ///
    /// Must not change the output latch: the pin keeps whatever level the
    /// hardware currently holds.
    fn set_as_output(&mut self);
}

/// Input pin whose direction is configured at runtime
pub trait ConfigurableInput: InputPin {
    /// Configure the pin as a digital input
    fn set_as_input(&mut self);
}
