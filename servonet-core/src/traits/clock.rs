//! Millisecond clock trait

/// A hardware millisecond counter.
///
/// Implementations expose a monotonically increasing count of
/// milliseconds since power-on that wraps to zero after `u32::MAX`,
/// a period of 2^32 ms, roughly 49.7 days.
///
/// Takes `&mut self` because reading a counter register typically
/// requires mutable access to the peripheral.
pub trait MillisClock {
    /// Read the current counter value in milliseconds.
    fn now_ms(&mut self) -> u32;
}
