//! Hardware configuration types
//!
//! These types describe which pins carry the power latch, the power
//! switch and the auxiliary power lines, and at which level each is
//! active.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors from parsing configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin designator is empty or not of the form `P<port><pin>`
    Malformed,
    /// Port letter outside `A`..=`K`
    InvalidPort,
    /// Pin number outside 0..=15
    InvalidPin,
}

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO port letter (`'A'`..=`'K'`)
    pub port: char,
    /// Pin number within the port (0-15)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create an active-high pin
    pub const fn new(port: char, pin: u8) -> Self {
        Self {
            port,
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(port: char, pin: u8) -> Self {
        Self {
            port,
            pin,
            inverted: true,
        }
    }

    /// Parse a pin designator
    ///
    /// Supports formats:
    /// - "PJ1" -> (Port J, Pin 1, active-high)
    /// - "!PJ0" -> (Port J, Pin 0, active-low)
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let s = s.trim();

        let (s, inverted) = match s.strip_prefix('!') {
            Some(rest) => (rest, true),
            None => (s, false),
        };

        let rest = s.strip_prefix('P').ok_or(ConfigError::Malformed)?;
        let mut chars = rest.chars();
        let port = chars.next().ok_or(ConfigError::Malformed)?;
        if !('A'..='K').contains(&port) {
            return Err(ConfigError::InvalidPort);
        }

        let pin_str = chars.as_str();
        if pin_str.is_empty() {
            return Err(ConfigError::Malformed);
        }
        let pin: u8 = pin_str.parse().map_err(|_| ConfigError::InvalidPin)?;
        if pin > 15 {
            return Err(ConfigError::InvalidPin);
        }

        Ok(Self {
            port,
            pin,
            inverted,
        })
    }

    /// Zero-based port index (`'A'` = 0)
    ///
    /// Ports below `'A'` give 0 and ports far above `'K'` saturate at
    /// `u8::MAX`; callers clamp to the ports their chip has.
    pub const fn port_index(&self) -> u8 {
        let index = (self.port as u32).saturating_sub('A' as u32);
        if index > u8::MAX as u32 {
            u8::MAX
        } else {
            index as u8
        }
    }

    /// Peripheral name of the pin (`PJ1`), without the inversion marker
    pub const fn name(&self) -> PinName {
        PinName {
            port: self.port,
            pin: self.pin,
        }
    }

    /// Electrical level (true = high) at which this pin is active
    pub const fn active_high(&self) -> bool {
        !self.inverted
    }
}

/// Display form of a pin as named by the chip HAL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinName {
    port: char,
    pin: u8,
}

impl fmt::Display for PinName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port, self.pin)
    }
}

/// Board pin map for soft-power control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PowerConfig {
    /// Latch line that keeps the supply on
    pub pwr_on: PinConfig,
    /// Power button sensor
    pub pwr_switch: PinConfig,
    /// Audio amplifier shutdown line (active = amplifier off)
    pub audio_shutdown: PinConfig,
    /// Haptic motor drive line (active = motor running)
    pub haptic: PinConfig,
    /// Internal RF module power switch
    pub intmodule_pwr: PinConfig,
    /// External RF module power switch
    pub extmodule_pwr: PinConfig,
}

impl PowerConfig {
    /// Pin map of the reference board
    pub const fn reference() -> Self {
        Self {
            pwr_on: PinConfig::new('J', 1),
            pwr_switch: PinConfig::inverted('J', 0),
            audio_shutdown: PinConfig::inverted('I', 9),
            haptic: PinConfig::new('B', 8),
            intmodule_pwr: PinConfig::new('A', 8),
            extmodule_pwr: PinConfig::new('B', 3),
        }
    }
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self::reference()
    }
}
