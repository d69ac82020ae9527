//! Power task
//!
//! Polls the power button and performs the intentional power-off once it
//! has been held long enough. Owning the sequencer here serializes every
//! flag update.

use defmt::*;
use embassy_time::{Duration, Ticker, Timer};

use powerlatch_core::button::{ButtonHold, POWER_OFF_HOLD_MS};

use crate::board::BoardSequencer;

/// Button poll interval in milliseconds
pub const POWER_POLL_INTERVAL_MS: u32 = 50;

/// Power task - owns the sequencer for the rest of the session
#[embassy_executor::task]
pub async fn power_task(mut sequencer: BoardSequencer) {
    info!("Power task started");

    let mut hold = ButtonHold::new(POWER_OFF_HOLD_MS);
    let mut ticker = Ticker::every(Duration::from_millis(POWER_POLL_INTERVAL_MS as u64));

    loop {
        ticker.next().await;

        if hold.update(sequencer.is_button_pressed(), POWER_POLL_INTERVAL_MS) {
            break;
        }
    }

    info!("Power button held {}ms, powering off", hold.held_ms());
    sequencer.power_off();

    // While the button is still held it keeps the supply up; wait it out
    // without touching the latch again.
    loop {
        Timer::after_secs(1).await;
        trace!("Waiting for supply to drop");
    }
}
