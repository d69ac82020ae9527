//! Boot report
//!
//! Read-only summary of how this boot came about, assembled in `main`
//! after the pre-init classifier has already run.

use powerlatch_hal::RetainedWord;

use super::classifier::ResetClass;
use super::flags::PowerupReason;
use super::store::PowerState;

/// How the current boot came about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BootReport {
    /// Classification made by the reset classifier this boot
    pub class: ResetClass,
    /// Powerup reason as left for the emergency-mode policy
    pub powerup_reason: PowerupReason,
    /// Latch line level observed when the report was taken
    pub rail_energized: bool,
}

impl BootReport {
    /// Build a report from the hand-over word written by the classifier
    ///
    /// A missing or corrupt hand-over word is reported as a cold start,
    /// the same fail-safe reading the classifier itself uses.
    pub fn from_state<W: RetainedWord>(
        class_word: u32,
        state: &PowerState<W>,
        rail_energized: bool,
    ) -> Self {
        Self {
            class: ResetClass::from_word(class_word).unwrap_or(ResetClass::ColdStart),
            powerup_reason: state.powerup_reason(),
            rail_energized,
        }
    }

    /// Check whether the emergency-mode policy should be consulted
    pub fn needs_emergency_check(&self) -> bool {
        self.powerup_reason == PowerupReason::Dirty
    }
}
