//! Servonet - network-controlled servo board firmware
//!
//! Main firmware binary for RP2040-based Servonet controller boards.
//! Wires the board-support logic (uptime tracking, analog channel map)
//! to the Embassy executor and the reporting layer.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use servonet_core::analog::{ANALOG_CHANNELS, ANALOG_CHANNEL_COUNT};
use servonet_core::uptime::UptimeTracker;

use crate::clock::BootMillis;

mod channels;
mod clock;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Servonet firmware starting...");

    let _p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    info!("Board provides {} analog channels", ANALOG_CHANNEL_COUNT);
    for (channel, pin) in ANALOG_CHANNELS.iter().enumerate() {
        debug!("analog channel {} -> port A{}", channel, pin.0);
    }

    // The tracker is owned by its sampling task; everything else reads
    // the published report.
    let tracker = UptimeTracker::new(BootMillis);

    spawner.spawn(tasks::uptime_task(tracker)).unwrap();
    spawner.spawn(tasks::report_task()).unwrap();

    info!("All tasks spawned");
}
