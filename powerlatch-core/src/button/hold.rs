//! Power button hold detection
//!
//! The button that powers the device on is usually still held when the
//! firmware starts, so a hold only counts once the button has been seen
//! released at least once.

/// Default hold time before a power-off is requested
pub const POWER_OFF_HOLD_MS: u32 = 1500;

/// Hold detector for the power button
#[derive(Debug, Clone)]
pub struct ButtonHold {
    /// Hold time required to fire
    hold_ms: u32,
    /// Time the button has been continuously pressed (ms)
    held_ms: u32,
    /// Button has been released since startup
    armed: bool,
    /// Already fired for the current press
    fired: bool,
}

impl Default for ButtonHold {
    fn default() -> Self {
        Self::new(POWER_OFF_HOLD_MS)
    }
}

impl ButtonHold {
    /// Create a detector that fires after `hold_ms` of continuous press
    pub fn new(hold_ms: u32) -> Self {
        Self {
            hold_ms,
            held_ms: 0,
            armed: false,
            fired: false,
        }
    }

    /// Feed one button sample
    ///
    /// # Arguments
    /// - `pressed`: Current button state
    /// - `delta_ms`: Time elapsed since the previous sample
    ///
    /// Returns true exactly once per qualifying press.
    pub fn update(&mut self, pressed: bool, delta_ms: u32) -> bool {
        if !pressed {
            self.armed = true;
            self.held_ms = 0;
            self.fired = false;
            return false;
        }

        if !self.armed || self.fired {
            return false;
        }

        self.held_ms = self.held_ms.saturating_add(delta_ms);
        if self.held_ms >= self.hold_ms {
            self.fired = true;
            return true;
        }

        false
    }

    /// Check if the detector has seen a release since startup
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Get how long the current press has lasted (ms)
    pub fn held_ms(&self) -> u32 {
        self.held_ms
    }
}
