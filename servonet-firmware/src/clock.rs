//! Boot-relative millisecond clock
//!
//! The tracker consumes time through [`MillisClock`], modeled on a
//! 32-bit hardware millisecond register: the 64-bit Embassy instant is
//! truncated to its low 32 bits and wraps every ~49.7 days.

use embassy_time::Instant;

use servonet_core::traits::MillisClock;

/// Milliseconds since boot, truncated to 32 bits.
pub struct BootMillis;

impl MillisClock for BootMillis {
    fn now_ms(&mut self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
