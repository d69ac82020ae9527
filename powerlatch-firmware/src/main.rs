//! Powerlatch - soft-power latch firmware
//!
//! Main firmware binary for STM32F4 handhelds whose supply is held on by
//! a latch line. The reset hook in [`reset`] runs before RAM
//! initialization and re-latches power after unintended resets; `main`
//! reports what it decided and hands the sequencer to the power task.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use powerlatch_core::power::{BootReport, ResetClass};
use powerlatch_core::traits::PowerRailControl;
use powerlatch_hal::RetainedWord;
use powerlatch_hal_stm32f4::retained;

mod board;
mod reset;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Powerlatch firmware starting...");

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    // SAFETY: the reset hook has returned and dropped its handles
    let (state, class_word) = unsafe { (retained::power_state(), retained::reset_class_word().read()) };

    let mut sequencer = board::sequencer(p, state);

    let report = BootReport::from_state(class_word, sequencer.state(), sequencer.rail().is_energized());
    match report.class {
        ResetClass::IntentionalShutdown => info!("Boot after intentional shutdown (button power-on)"),
        ResetClass::ColdStart => info!("Cold start"),
        ResetClass::UnintendedReset => warn!("Unexpected reset, power latch restored"),
    }
    if report.needs_emergency_check() {
        warn!("Powerup reason is dirty: {}", report);
    }

    sequencer.init();
    info!("Power latched on");

    spawner.spawn(tasks::power_task(sequencer)).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
