//! Device uptime tracking
//!
//! The hardware millisecond counter wraps to zero every 2^32 ms, about
//! 49.7 days. [`UptimeTracker`] samples the counter from the periodic
//! task loop, counts the wraparounds, and renders the total elapsed
//! time as a human-readable string for the reporting layer.

use core::fmt::Write;

use heapless::String;

use crate::traits::{MillisClock, PeriodicProcess};

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Counter period: the number of distinct values before wrapping to zero.
const WRAP_PERIOD_MS: u64 = 1 << 32;

/// Whole days in one full counter wrap. The fractional ~0.7 day is
/// discarded; sub-wrap time comes from the latest sample instead.
const DAYS_PER_WRAP: u64 = WRAP_PERIOD_MS / MS_PER_DAY;

// nr. of characters required to render the largest possible day count
// (u32 wraps at 49 whole days each)
const DAY_CHARS: usize = 12;

/// Capacity of a rendered report: day digits + "d " + "23h 59m 59s".
pub const UPTIME_STR_LEN: usize = DAY_CHARS + 2 + 11;

/// A rendered uptime report.
pub type UptimeString = String<UPTIME_STR_LEN>;

/// Tracks elapsed time since power-on across counter wraparounds.
///
/// The wrap count together with the latest raw sample determines the
/// total elapsed time unambiguously, provided [`sample`](Self::sample)
/// runs at least once per wrap period. The tracker has no way to detect
/// a missed wrap; the polling interval is the caller's contract.
///
/// One instance is constructed at startup and owned by whoever drives
/// the sampling; consumers read the rendered report.
pub struct UptimeTracker<C> {
    clock: C,
    /// Counter value observed at the previous sample.
    last_sample_ms: u32,
    /// Full counter wraparounds observed since construction.
    wraps: u32,
}

impl<C: MillisClock> UptimeTracker<C> {
    /// Start tracking from the clock's current value.
    pub fn new(mut clock: C) -> Self {
        let now = clock.now_ms();
        Self {
            clock,
            last_sample_ms: now,
            wraps: 0,
        }
    }

    /// Take one sample of the millisecond counter.
    ///
    /// A sample that reads lower than the previous one means the
    /// counter wrapped past `u32::MAX` exactly once since the last
    /// call. That interpretation only holds while samples are taken at
    /// least once per ~49.7 day wrap period; anything near the
    /// firmware's task rates leaves a huge margin.
    pub fn sample(&mut self) {
        let now = self.clock.now_ms();
        if now < self.last_sample_ms {
            self.wraps = self.wraps.saturating_add(1);
        }
        self.last_sample_ms = now;
    }

    /// Full counter wraparounds observed so far.
    pub fn wraps(&self) -> u32 {
        self.wraps
    }

    /// Raw counter value from the most recent sample.
    pub fn last_sample_ms(&self) -> u32 {
        self.last_sample_ms
    }

    /// Render the elapsed time as `"<days>d <hh>h <mm>m <ss>s"`.
    ///
    /// Hours, minutes and seconds are zero-padded to two digits; the
    /// day count grows as wide as it needs to.
    pub fn uptime_string(&self) -> UptimeString {
        let mut elapsed_ms =
            self.wraps as u64 * DAYS_PER_WRAP * MS_PER_DAY + self.last_sample_ms as u64;

        let days = elapsed_ms / MS_PER_DAY;
        elapsed_ms %= MS_PER_DAY;
        let hours = elapsed_ms / MS_PER_HOUR;
        elapsed_ms %= MS_PER_HOUR;
        let minutes = elapsed_ms / MS_PER_MINUTE;
        elapsed_ms %= MS_PER_MINUTE;
        let seconds = elapsed_ms / MS_PER_SECOND;

        let mut out = UptimeString::new();
        let _ = write!(out, "{}d {:02}h {:02}m {:02}s", days, hours, minutes, seconds);
        out
    }
}

impl<C: MillisClock> PeriodicProcess for UptimeTracker<C> {
    fn poll(&mut self) {
        self.sample();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use proptest::prelude::*;

    // Manually advanced clock for driving the tracker in tests.
    impl MillisClock for &Cell<u32> {
        fn now_ms(&mut self) -> u32 {
            self.get()
        }
    }

    #[test]
    fn fresh_tracker_reports_zero() {
        let clock = Cell::new(0);
        let tracker = UptimeTracker::new(&clock);
        assert_eq!(tracker.wraps(), 0);
        assert_eq!(tracker.uptime_string().as_str(), "0d 00h 00m 00s");
    }

    #[test]
    fn increasing_samples_do_not_count_a_wrap() {
        let clock = Cell::new(0);
        let mut tracker = UptimeTracker::new(&clock);
        for ms in [1, 500, 59_000, 3_600_000, 90_061_000] {
            clock.set(ms);
            tracker.sample();
        }
        assert_eq!(tracker.wraps(), 0);
    }

    #[test]
    fn repeated_sample_is_not_a_wrap() {
        let clock = Cell::new(42_000);
        let mut tracker = UptimeTracker::new(&clock);
        tracker.sample();
        tracker.sample();
        assert_eq!(tracker.wraps(), 0);
    }

    #[test]
    fn decreasing_sample_counts_exactly_one_wrap() {
        let clock = Cell::new(1_000_000);
        let mut tracker = UptimeTracker::new(&clock);
        clock.set(999_999);
        tracker.sample();
        assert_eq!(tracker.wraps(), 1);
    }

    #[test]
    fn wrap_from_counter_maximum_to_zero() {
        let clock = Cell::new(u32::MAX);
        let mut tracker = UptimeTracker::new(&clock);
        clock.set(0);
        tracker.sample();
        assert_eq!(tracker.wraps(), 1);
        assert_eq!(tracker.last_sample_ms(), 0);
    }

    #[test]
    fn one_day_one_hour_one_minute_one_second() {
        let clock = Cell::new(0);
        let mut tracker = UptimeTracker::new(&clock);
        clock.set(90_061_000);
        tracker.sample();
        assert_eq!(tracker.uptime_string().as_str(), "1d 01h 01m 01s");
    }

    #[test]
    fn units_are_zero_padded() {
        let clock = Cell::new(0);
        let mut tracker = UptimeTracker::new(&clock);
        clock.set(59_000);
        tracker.sample();
        assert_eq!(tracker.uptime_string().as_str(), "0d 00h 00m 59s");
    }

    #[test]
    fn each_wrap_contributes_forty_nine_whole_days() {
        let clock = Cell::new(1);
        let mut tracker = UptimeTracker::new(&clock);
        clock.set(0);
        tracker.sample();
        assert_eq!(tracker.uptime_string().as_str(), "49d 00h 00m 00s");
    }

    #[test]
    fn wrap_days_and_sub_wrap_time_combine() {
        let clock = Cell::new(u32::MAX);
        let mut tracker = UptimeTracker::new(&clock);
        clock.set(90_061_000);
        tracker.sample();
        assert_eq!(tracker.uptime_string().as_str(), "50d 01h 01m 01s");
    }

    #[test]
    fn rendering_is_idempotent_between_samples() {
        let clock = Cell::new(0);
        let mut tracker = UptimeTracker::new(&clock);
        clock.set(7_262_000);
        tracker.sample();
        let first = tracker.uptime_string();
        let second = tracker.uptime_string();
        assert_eq!(first, second);
    }

    #[test]
    fn poll_is_sampling() {
        let clock = Cell::new(10);
        let mut tracker = UptimeTracker::new(&clock);
        clock.set(5);
        PeriodicProcess::poll(&mut tracker);
        assert_eq!(tracker.wraps(), 1);
        assert_eq!(tracker.last_sample_ms(), 5);
    }

    proptest! {
        #[test]
        fn monotonic_sample_runs_never_wrap(
            start in 0u32..1_000_000,
            steps in proptest::collection::vec(0u32..100_000, 1..32),
        ) {
            let clock = Cell::new(start);
            let mut tracker = UptimeTracker::new(&clock);
            let mut now = start;
            for step in steps {
                now = now.saturating_add(step);
                clock.set(now);
                tracker.sample();
            }
            prop_assert_eq!(tracker.wraps(), 0);
            prop_assert_eq!(tracker.last_sample_ms(), now);

            let elapsed = now as u64;
            let expected = std::format!(
                "{}d {:02}h {:02}m {:02}s",
                elapsed / MS_PER_DAY,
                elapsed % MS_PER_DAY / MS_PER_HOUR,
                elapsed % MS_PER_HOUR / MS_PER_MINUTE,
                elapsed % MS_PER_MINUTE / MS_PER_SECOND,
            );
            let rendered = tracker.uptime_string();
            prop_assert_eq!(rendered.as_str(), expected.as_str());
        }
    }
}
