//! Millisecond time source used by the debouncer.
//!
//! Timestamps are `u32` milliseconds and wrap after about 49.7 days. Every elapsed time in this
//! crate is computed with `wrapping_sub`, so a rollover between two readings is harmless as long
//! as the interval itself is shorter than `u32::MAX` milliseconds.
use embassy_time::Instant;

/// A monotonic millisecond clock.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> u32;
}

/// Clock backed by [`embassy_time::Instant`], truncated to `u32` milliseconds.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

impl<F: Fn() -> u32> Clock for F {
    fn now_ms(&self) -> u32 {
        self()
    }
}

/// Milliseconds from `since` to `now`, correct across a single `u32` rollover.
#[inline]
pub(crate) fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
