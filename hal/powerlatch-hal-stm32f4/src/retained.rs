//! Reset-surviving power flags
//!
//! The words live in `.uninit.*` sections. cortex-m-rt places those in a
//! NOLOAD region that is neither copied from flash nor zeroed, so whatever
//! was written before a watchdog or software reset is still there when the
//! `pre_init` hook runs, and still there once `main` starts.

use core::mem::MaybeUninit;
use core::ptr;

use powerlatch_core::power::PowerState;
use powerlatch_hal::RetainedWord;

#[link_section = ".uninit.powerlatch.shutdown_request"]
static mut SHUTDOWN_REQUEST: MaybeUninit<u32> = MaybeUninit::uninit();

#[link_section = ".uninit.powerlatch.shutdown_reason"]
static mut SHUTDOWN_REASON: MaybeUninit<u32> = MaybeUninit::uninit();

#[link_section = ".uninit.powerlatch.powerup_reason"]
static mut POWERUP_REASON: MaybeUninit<u32> = MaybeUninit::uninit();

/// Classification handed from the `pre_init` hook to `main`
#[link_section = ".uninit.powerlatch.reset_class"]
static mut RESET_CLASS: MaybeUninit<u32> = MaybeUninit::uninit();

/// Handle onto one `.uninit` word
///
/// All accesses are volatile so that a write right before the latch is
/// released, or right before a reset, really reaches RAM.
#[derive(Debug)]
pub struct NoInitWord {
    cell: *mut u32,
}

impl NoInitWord {
    fn new(cell: *mut MaybeUninit<u32>) -> Self {
        Self { cell: cell.cast() }
    }
}

impl RetainedWord for NoInitWord {
    fn read(&self) -> u32 {
        // SAFETY: `cell` points at a 4-byte aligned static that lives for
        // the whole program; any bit pattern is a valid u32.
        unsafe { ptr::read_volatile(self.cell) }
    }

    fn write(&mut self, value: u32) {
        // SAFETY: as above; exclusive access is the caller's contract on
        // `power_state` / `reset_class_word`.
        unsafe { ptr::write_volatile(self.cell, value) }
    }
}

/// Take handles onto the three retained power flags
///
/// # Safety
///
/// At most one `PowerState` from this function may be alive at a time.
/// The `pre_init` hook drops its copy before `main` takes the next one.
pub unsafe fn power_state() -> PowerState<NoInitWord> {
    PowerState::new(
        NoInitWord::new(ptr::addr_of_mut!(SHUTDOWN_REQUEST)),
        NoInitWord::new(ptr::addr_of_mut!(SHUTDOWN_REASON)),
        NoInitWord::new(ptr::addr_of_mut!(POWERUP_REASON)),
    )
}

/// Take a handle onto the reset classification hand-over word
///
/// # Safety
///
/// Same single-owner rule as [`power_state`].
pub unsafe fn reset_class_word() -> NoInitWord {
    NoInitWord::new(ptr::addr_of_mut!(RESET_CLASS))
}
