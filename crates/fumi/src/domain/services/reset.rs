//! Hidden reset affordance
//!
//! Taps on the hint text are counted; a gap longer than the window starts
//! the count over. Reaching the required count asks for a reset.

use std::time::{Duration, Instant};

/// Taps needed to trigger a reset
pub const RESET_TAP_COUNT: u32 = 5;

/// Maximum gap between two consecutive taps
pub const RESET_TAP_WINDOW: Duration = Duration::from_millis(3000);

/// Result of a single tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Tap counted; holds the running count
    Counted(u32),
    /// Enough taps in a row: clear the cache and start over
    Reset,
}

/// Rolling tap counter for the hint element
#[derive(Debug, Clone)]
pub struct ResetTapCounter {
    required: u32,
    window: Duration,
    count: u32,
    last_tap: Option<Instant>,
}

impl ResetTapCounter {
    pub fn new(required: u32, window: Duration) -> Self {
        Self {
            required,
            window,
            count: 0,
            last_tap: None,
        }
    }

    /// Register a tap at `now`
    pub fn tap(&mut self, now: Instant) -> TapOutcome {
        let within_window = self
            .last_tap
            .is_some_and(|last| now.saturating_duration_since(last) <= self.window);

        self.count = if within_window { self.count + 1 } else { 1 };
        self.last_tap = Some(now);

        if self.count >= self.required {
            self.count = 0;
            self.last_tap = None;
            return TapOutcome::Reset;
        }

        TapOutcome::Counted(self.count)
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Default for ResetTapCounter {
    fn default() -> Self {
        Self::new(RESET_TAP_COUNT, RESET_TAP_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_five_quick_taps_reset() {
        let start = Instant::now();
        let mut counter = ResetTapCounter::default();

        for i in 0..4 {
            assert_eq!(counter.tap(start + ms(i * 500)), TapOutcome::Counted(i as u32 + 1));
        }
        assert_eq!(counter.tap(start + ms(2000)), TapOutcome::Reset);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_window_is_between_successive_taps() {
        let start = Instant::now();
        let mut counter = ResetTapCounter::default();

        // Spread over 10s total, but no gap exceeds 3s
        for i in 0..4 {
            counter.tap(start + ms(i * 2500));
        }
        assert_eq!(counter.tap(start + ms(10_000)), TapOutcome::Reset);
    }

    #[test]
    fn test_gap_restarts_count() {
        let start = Instant::now();
        let mut counter = ResetTapCounter::default();

        for i in 0..5 {
            counter.tap(start + ms(i * 100));
        }
        // Reset fired at the 5th tap; a tap 4s later starts from one
        assert_eq!(counter.tap(start + ms(4400)), TapOutcome::Counted(1));
    }

    #[test]
    fn test_slow_taps_never_reset() {
        let start = Instant::now();
        let mut counter = ResetTapCounter::default();

        for i in 0..4 {
            counter.tap(start + ms(i * 100));
        }
        assert_eq!(counter.tap(start + ms(300 + 4000)), TapOutcome::Counted(1));
        assert_eq!(counter.tap(start + ms(4400)), TapOutcome::Counted(2));
    }

    #[test]
    fn test_exact_window_still_counts() {
        let start = Instant::now();
        let mut counter = ResetTapCounter::default();

        counter.tap(start);
        assert_eq!(counter.tap(start + RESET_TAP_WINDOW), TapOutcome::Counted(2));
    }
}
