//! Retained flag values
//!
//! Each flag is stored as a full 32-bit magic word rather than a bool so
//! that zeroed or random SRAM is very unlikely to decode as a meaningful
//! value. Decoding is fail-open: only the exact magic word counts.

/// Word written by an intentional power-off
pub const SHUTDOWN_REQUEST: u32 = 0xDEAD_BEEF;
/// Word written by every power-on
pub const NO_SHUTDOWN_REQUEST: u32 = !SHUTDOWN_REQUEST;
/// Word marking a power-on that has not yet been followed by a power-off
pub const DIRTY_SHUTDOWN: u32 = 0xCAFE_DEAD;
/// Word marking a completed power-off
pub const NORMAL_POWER_OFF: u32 = !DIRTY_SHUTDOWN;

/// Whether the most recent power-off was intentional
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShutdownRequest {
    /// No confirmed intentional shutdown on record
    None,
    /// The last recorded action was an intentional power-off
    Requested,
}

impl ShutdownRequest {
    /// Decode a raw word.
    ///
    /// Anything other than [`SHUTDOWN_REQUEST`] decodes as `None`,
    /// including garbage left in SRAM after a real power-up.
    pub const fn from_word(word: u32) -> Self {
        if word == SHUTDOWN_REQUEST {
            ShutdownRequest::Requested
        } else {
            ShutdownRequest::None
        }
    }

    /// Encode as a raw word
    pub const fn to_word(self) -> u32 {
        match self {
            ShutdownRequest::None => NO_SHUTDOWN_REQUEST,
            ShutdownRequest::Requested => SHUTDOWN_REQUEST,
        }
    }
}

/// Cause recorded for the most recent shutdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShutdownReason {
    /// Powered on and not (yet) powered off cleanly
    Dirty,
    /// Powered off through the sequencer
    NormalPowerOff,
}

impl ShutdownReason {
    /// Decode a raw word, returning `None` for an indeterminate value
    pub const fn from_word(word: u32) -> Option<Self> {
        match word {
            DIRTY_SHUTDOWN => Some(ShutdownReason::Dirty),
            NORMAL_POWER_OFF => Some(ShutdownReason::NormalPowerOff),
            _ => None,
        }
    }

    /// Encode as a raw word
    pub const fn to_word(self) -> u32 {
        match self {
            ShutdownReason::Dirty => DIRTY_SHUTDOWN,
            ShutdownReason::NormalPowerOff => NORMAL_POWER_OFF,
        }
    }
}

/// Why the current boot happened, as seen by the emergency-mode policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerupReason {
    /// Nothing recorded (or an indeterminate word)
    None,
    /// The boot followed a reset that interrupted a powered-on session
    Dirty,
}

impl PowerupReason {
    /// Decode a raw word. Only [`DIRTY_SHUTDOWN`] decodes as `Dirty`.
    pub const fn from_word(word: u32) -> Self {
        if word == DIRTY_SHUTDOWN {
            PowerupReason::Dirty
        } else {
            PowerupReason::None
        }
    }

    /// Encode as a raw word
    pub const fn to_word(self) -> u32 {
        match self {
            PowerupReason::None => NORMAL_POWER_OFF,
            PowerupReason::Dirty => DIRTY_SHUTDOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_words_are_complements() {
        assert_eq!(NO_SHUTDOWN_REQUEST, 0x2152_4110);
        assert_eq!(NORMAL_POWER_OFF, 0x3501_2152);
    }

    #[test]
    fn test_shutdown_request_fails_open() {
        assert_eq!(ShutdownRequest::from_word(SHUTDOWN_REQUEST), ShutdownRequest::Requested);
        assert_eq!(ShutdownRequest::from_word(NO_SHUTDOWN_REQUEST), ShutdownRequest::None);

        // Zeroed, erased and nearly-matching words are not a confirmed shutdown
        for word in [0, u32::MAX, SHUTDOWN_REQUEST ^ 1, DIRTY_SHUTDOWN] {
            assert_eq!(ShutdownRequest::from_word(word), ShutdownRequest::None);
        }
    }

    #[test]
    fn test_shutdown_reason_indeterminate() {
        assert_eq!(ShutdownReason::from_word(DIRTY_SHUTDOWN), Some(ShutdownReason::Dirty));
        assert_eq!(
            ShutdownReason::from_word(NORMAL_POWER_OFF),
            Some(ShutdownReason::NormalPowerOff)
        );
        assert_eq!(ShutdownReason::from_word(0), None);
        assert_eq!(ShutdownReason::from_word(SHUTDOWN_REQUEST), None);
    }

    #[test]
    fn test_powerup_reason_only_exact_dirty() {
        assert_eq!(PowerupReason::from_word(DIRTY_SHUTDOWN), PowerupReason::Dirty);
        assert_eq!(PowerupReason::from_word(0), PowerupReason::None);
        assert_eq!(PowerupReason::from_word(DIRTY_SHUTDOWN ^ 0x8000_0000), PowerupReason::None);
        assert_eq!(PowerupReason::from_word(PowerupReason::None.to_word()), PowerupReason::None);
    }
}
