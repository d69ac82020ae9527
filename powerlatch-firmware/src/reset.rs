//! Reset hook
//!
//! Classifies every reset before RAM initialization. This runs on the
//! hold-up capacitance of the supply: the latch must be re-driven before
//! it drains, and before `.bss` zeroing could touch anything.
//!
//! No logging here; RTT is not set up yet.

// `pre_init` is deprecated in cortex-m-rt but remains the only hook that
// runs ahead of RAM initialization.
#![allow(deprecated)]

use cortex_m_rt::pre_init;

use powerlatch_core::power::{classify_reset, PowerSequencer};
use powerlatch_hal::RetainedWord;
use powerlatch_hal_stm32f4::raw::AhbClock;
use powerlatch_hal_stm32f4::retained;

use crate::board::{self, BOARD_POWER_CONFIG};

#[pre_init]
unsafe fn classify_before_ram_init() {
    // SAFETY: single-threaded, before main; both handles are dropped at
    // the end of this function.
    let mut sequencer = PowerSequencer::new(board::reset_rail(), retained::power_state());
    let mut clock = AhbClock::for_pin(&BOARD_POWER_CONFIG.pwr_on);

    let class = classify_reset(&mut sequencer, &mut clock);

    retained::reset_class_word().write(class.to_word());
}
