//! Uptime report task
//!
//! Stand-in for the network reporting layer: forwards each published
//! uptime report to the defmt log. A transport task would consume the
//! same signal.

use defmt::*;

use crate::channels::UPTIME_REPORT;

/// Report task - forwards published uptime reports
#[embassy_executor::task]
pub async fn report_task() {
    info!("Report task started");

    loop {
        let report = UPTIME_REPORT.wait().await;
        info!("uptime {}", report.as_str());
    }
}
