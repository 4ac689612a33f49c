//! A single sliding-window quota tier.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use ecwid_api_client::rate_limit::{ManualClock, RateWindow};
//!
//! let clock = ManualClock::new();
//! let mut window = RateWindow::new(Duration::from_secs(5), 2, Arc::new(clock.clone()));
//!
//! assert!(window.tick());
//! assert!(window.tick());
//! assert!(!window.tick());
//!
//! clock.advance(Duration::from_secs(5));
//! assert!(window.tick());
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::rate_limit::Clock;

/// Tracks how many calls were made since the window opened.
///
/// The window opens at construction and reopens (count back to zero) as soon
/// as a full `interval` has passed since it last opened.
#[derive(Debug)]
pub struct RateWindow {
    /// Window duration
    interval: Duration,
    /// Maximum calls per window
    capacity: u32,
    /// When the current window opened
    window_start: Instant,
    /// Calls recorded since `window_start`
    count: u32,
    clock: Arc<dyn Clock>,
}

impl RateWindow {
    /// Create a new window.
    ///
    /// A capacity of zero is accepted and yields a window that never admits.
    pub fn new(interval: Duration, capacity: u32, clock: Arc<dyn Clock>) -> Self {
        Self {
            interval,
            capacity,
            window_start: clock.now(),
            count: 0,
            clock,
        }
    }

    /// Check whether the window has headroom for one more call.
    ///
    /// Reopens the window first when its interval has elapsed, so this may
    /// move `window_start` even though it never changes the count upward.
    pub fn check(&mut self) -> bool {
        self.reset_if_elapsed();
        self.count < self.capacity
    }

    /// Record one call if the window has headroom.
    ///
    /// Returns `false`, leaving the count untouched, when the window is full.
    pub fn tick(&mut self) -> bool {
        if !self.check() {
            return false;
        }
        self.count += 1;
        true
    }

    /// Window duration.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Maximum calls per window.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Calls recorded in the current window.
    ///
    /// An elapsed window reports zero without being reopened.
    pub fn count(&self) -> u32 {
        if self.is_elapsed() { 0 } else { self.count }
    }

    /// Calls still allowed in the current window.
    pub fn remaining(&self) -> u32 {
        if self.is_elapsed() {
            self.capacity
        } else {
            self.capacity.saturating_sub(self.count)
        }
    }

    fn is_elapsed(&self) -> bool {
        self.clock.now().saturating_duration_since(self.window_start) >= self.interval
    }

    fn reset_if_elapsed(&mut self) {
        if self.is_elapsed() {
            self.window_start = self.clock.now();
            self.count = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_limit::ManualClock;

    fn window(interval_secs: u64, capacity: u32) -> (RateWindow, ManualClock) {
        let clock = ManualClock::new();
        let window = RateWindow::new(
            Duration::from_secs(interval_secs),
            capacity,
            Arc::new(clock.clone()),
        );
        (window, clock)
    }

    #[test]
    fn test_window_allows_within_capacity() {
        let (mut window, _clock) = window(5, 3);

        assert!(window.tick());
        assert!(window.tick());
        assert!(window.tick());
        assert!(!window.tick());
        assert_eq!(window.count(), 3);
    }

    #[test]
    fn test_window_reopens_after_interval() {
        let (mut window, clock) = window(5, 2);

        assert!(window.tick());
        assert!(window.tick());

        clock.advance(Duration::from_millis(4_999));
        assert!(!window.tick());

        clock.advance(Duration::from_millis(1));
        assert!(window.tick());
        assert_eq!(window.count(), 1);
    }

    #[test]
    fn test_capacity_boundary_across_many_sizes() {
        for capacity in [1, 2, 7, 100] {
            let (mut window, clock) = window(10, capacity);
            for _ in 0..capacity {
                assert!(window.tick());
            }
            assert!(!window.tick(), "tick {} must be denied", capacity + 1);

            clock.advance(Duration::from_secs(10));
            assert!(window.tick(), "window of {capacity} must reopen");
        }
    }

    #[test]
    fn test_zero_capacity_never_admits() {
        let (mut window, clock) = window(1, 0);

        assert!(!window.check());
        assert!(!window.tick());
        clock.advance(Duration::from_secs(60));
        assert!(!window.tick());
        assert_eq!(window.count(), 0);
    }

    #[test]
    fn test_denied_tick_leaves_count() {
        let (mut window, _clock) = window(5, 1);

        assert!(window.tick());
        assert!(!window.tick());
        assert!(!window.tick());
        assert_eq!(window.count(), 1);
    }

    #[test]
    fn test_check_resets_without_counting() {
        let (mut window, clock) = window(5, 1);

        assert!(window.tick());
        clock.advance(Duration::from_secs(6));

        assert!(window.check());
        assert_eq!(window.count(), 0);
    }

    #[test]
    fn test_remaining() {
        let (mut window, clock) = window(5, 3);

        assert_eq!(window.remaining(), 3);
        window.tick();
        assert_eq!(window.remaining(), 2);
        window.tick();
        assert_eq!(window.remaining(), 1);

        clock.advance(Duration::from_secs(5));
        assert_eq!(window.remaining(), 3);
    }
}
