//! Uptime sampling task
//!
//! Periodically polls the uptime tracker so counter wraparounds are
//! observed, then publishes the rendered report for consumers.

use defmt::*;
use embassy_time::{Duration, Ticker};

use servonet_core::traits::PeriodicProcess;
use servonet_core::uptime::UptimeTracker;

use crate::channels::UPTIME_REPORT;
use crate::clock::BootMillis;

/// Sampling interval in milliseconds
///
/// Wraparound detection only needs one sample per ~49.7 day wrap
/// period; once a second keeps the published report fresh.
pub const SAMPLE_INTERVAL_MS: u64 = 1_000;

/// Uptime task - samples the tracker and publishes the report
#[embassy_executor::task]
pub async fn uptime_task(mut tracker: UptimeTracker<BootMillis>) {
    info!("Uptime task started");

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));
    let mut wraps_seen = tracker.wraps();

    loop {
        ticker.next().await;

        tracker.poll();

        if tracker.wraps() != wraps_seen {
            wraps_seen = tracker.wraps();
            info!("Millisecond counter wrapped ({} so far)", wraps_seen);
        }

        UPTIME_REPORT.signal(tracker.uptime_string());
    }
}
