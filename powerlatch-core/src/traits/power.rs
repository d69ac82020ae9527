//! Power rail and auxiliary power domain traits

/// Control of the soft-power latch line and the power button sensor
///
/// Implementations own two lines: the output that keeps the device's own
/// supply energized, and the input wired to the physical power button.
/// All operations are infallible; a misconfigured pin is a board defect.
pub trait PowerRailControl {
    /// Configure the control line as output and the button line as input.
    ///
    /// The control line keeps its current level.
    fn configure(&mut self);

    /// Configure only the control line as output.
    ///
    /// Used from the reset path, where the button line is not needed.
    /// Idempotent with [`configure`](Self::configure).
    fn configure_output(&mut self);

    /// Drive the control line to its active level (supply held on)
    fn energize(&mut self);

    /// Drive the control line to its inactive level (supply cut)
    fn release(&mut self);

    /// Check whether the control line is latched at its active level
    fn is_energized(&self) -> bool;

    /// Check whether the power button reads as pressed
    fn is_button_pressed(&self) -> bool;
}

/// An auxiliary power consumer that must be quiesced before the main
/// rail drops (audio amplifier, haptic motor)
pub trait AuxiliaryShutdown {
    /// Put the consumer into its off state. Must be synchronous.
    fn shutdown(&mut self);

    /// Leave the control line in its cold-start idle state
    ///
    /// Called once from the cold-start path. The default does nothing.
    fn idle(&mut self) {}
}

impl AuxiliaryShutdown for () {
    fn shutdown(&mut self) {}
}

/// Shuts down `A` first, then `B`
impl<A: AuxiliaryShutdown, B: AuxiliaryShutdown> AuxiliaryShutdown for (A, B) {
    fn shutdown(&mut self) {
        self.0.shutdown();
        self.1.shutdown();
    }

    fn idle(&mut self) {
        self.0.idle();
        self.1.idle();
    }
}

/// Power switches of the RF module bays
///
/// Only the cold-start path touches these; it forces both bays off.
pub trait ModulePower {
    /// Drive every module power switch to off
    fn power_off_modules(&mut self);
}

impl ModulePower for () {
    fn power_off_modules(&mut self) {}
}
