//! Peripheral clock abstraction

/// Clock gate for the peripheral that owns the power control line
///
/// The reset path enables this clock itself because it runs before the
/// chip HAL has been initialized.
pub trait PeripheralClock {
    /// Enable the peripheral clock. Enabling twice is harmless.
    fn enable(&mut self);

    /// Busy-wait for `cycles` CPU cycles.
    ///
    /// Used for the mandatory gap between enabling a peripheral clock and
    /// the first access to that peripheral's registers.
    fn wait_cycles(&mut self, cycles: u32);
}
