//! Inter-task communication channels
//!
//! Defines the static signals used for communication between Embassy
//! tasks. Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use servonet_core::uptime::UptimeString;

/// Latest rendered uptime report (updated by the uptime task)
pub static UPTIME_REPORT: Signal<CriticalSectionRawMutex, UptimeString> = Signal::new();
