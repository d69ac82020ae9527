//! Power state store
//!
//! Plain storage for the three retained power flags. There is no logic
//! here beyond encoding; the sequencer and reset classifier decide when
//! each flag changes.

use powerlatch_hal::RetainedWord;

use super::flags::{PowerupReason, ShutdownReason, ShutdownRequest};

/// Retained word backed by ordinary memory
///
/// Used on the host and in tests. A simulated reset is modelled by moving
/// the words into a fresh sequencer instead of dropping them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RamWord(u32);

impl RamWord {
    /// Create a word holding `value`
    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl RetainedWord for RamWord {
    fn read(&self) -> u32 {
        self.0
    }

    fn write(&mut self, value: u32) {
        self.0 = value;
    }
}

/// Raw copy of all three flag words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateSnapshot {
    pub shutdown_request: u32,
    pub shutdown_reason: u32,
    pub powerup_reason: u32,
}

/// The three retained power flags
///
/// One instance exists per retention domain. On target the words are
/// zero-sized handles onto `.uninit` statics, so constructing this struct
/// again after a reset refers to the same cells.
#[derive(Debug)]
pub struct PowerState<W> {
    shutdown_request: W,
    shutdown_reason: W,
    powerup_reason: W,
}

impl<W: RetainedWord> PowerState<W> {
    /// Wrap the three retained words without touching their contents
    pub const fn new(shutdown_request: W, shutdown_reason: W, powerup_reason: W) -> Self {
        Self {
            shutdown_request,
            shutdown_reason,
            powerup_reason,
        }
    }

    pub fn shutdown_request(&self) -> ShutdownRequest {
        ShutdownRequest::from_word(self.shutdown_request.read())
    }

    pub fn set_shutdown_request(&mut self, request: ShutdownRequest) {
        self.shutdown_request.write(request.to_word());
    }

    /// Recorded shutdown cause, or `None` if the word is indeterminate
    pub fn shutdown_reason(&self) -> Option<ShutdownReason> {
        ShutdownReason::from_word(self.shutdown_reason.read())
    }

    pub fn set_shutdown_reason(&mut self, reason: ShutdownReason) {
        self.shutdown_reason.write(reason.to_word());
    }

    pub fn powerup_reason(&self) -> PowerupReason {
        PowerupReason::from_word(self.powerup_reason.read())
    }

    pub fn set_powerup_reason(&mut self, reason: PowerupReason) {
        self.powerup_reason.write(reason.to_word());
    }

    /// True unless an intentional shutdown is positively on record
    pub fn is_unrequested_shutdown(&self) -> bool {
        self.shutdown_request() != ShutdownRequest::Requested
    }

    /// Copy out the raw words
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            shutdown_request: self.shutdown_request.read(),
            shutdown_reason: self.shutdown_reason.read(),
            powerup_reason: self.powerup_reason.read(),
        }
    }
}

impl PowerState<RamWord> {
    /// Build a RAM-backed state from raw words
    pub const fn from_words(shutdown_request: u32, shutdown_reason: u32, powerup_reason: u32) -> Self {
        Self::new(
            RamWord::new(shutdown_request),
            RamWord::new(shutdown_reason),
            RamWord::new(powerup_reason),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::flags::{DIRTY_SHUTDOWN, SHUTDOWN_REQUEST};

    #[test]
    fn test_zeroed_ram_is_unrequested() {
        let state = PowerState::from_words(0, 0, 0);
        assert!(state.is_unrequested_shutdown());
        assert_eq!(state.shutdown_reason(), None);
        assert_eq!(state.powerup_reason(), PowerupReason::None);
    }

    #[test]
    fn test_requested_word() {
        let state = PowerState::from_words(SHUTDOWN_REQUEST, 0, 0);
        assert!(!state.is_unrequested_shutdown());
    }

    #[test]
    fn test_setters_write_magic_words() {
        let mut state = PowerState::from_words(0, 0, 0);
        state.set_shutdown_request(ShutdownRequest::Requested);
        state.set_shutdown_reason(ShutdownReason::Dirty);
        state.set_powerup_reason(PowerupReason::Dirty);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.shutdown_request, SHUTDOWN_REQUEST);
        assert_eq!(snapshot.shutdown_reason, DIRTY_SHUTDOWN);
        assert_eq!(snapshot.powerup_reason, DIRTY_SHUTDOWN);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut state = PowerState::from_words(0x1234_5678, 0x9abc_def0, 0x0f0f_0f0f);
        state.set_shutdown_reason(ShutdownReason::NormalPowerOff);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.shutdown_request, 0x1234_5678);
        assert_eq!(snapshot.powerup_reason, 0x0f0f_0f0f);
    }

    #[test]
    fn test_borrowed_words() {
        let mut request = RamWord::new(0);
        let mut reason = RamWord::new(0);
        let mut powerup = RamWord::new(0);
        {
            let mut state = PowerState::new(&mut request, &mut reason, &mut powerup);
            state.set_shutdown_request(ShutdownRequest::Requested);
        }
        assert_eq!(request.read(), SHUTDOWN_REQUEST);
    }
}
