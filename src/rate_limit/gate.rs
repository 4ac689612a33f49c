//! Multi-tier admission control.
//!
//! The legacy API enforces several quotas at once (for example 100 calls per
//! 5 seconds, 400 per 50 seconds and 1400 per 500 seconds). A [`RateGate`]
//! holds one [`RateWindow`] per quota and admits a call only when every
//! window has room for it.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::error::EcwidError;
use crate::rate_limit::{Clock, RateWindow, SystemClock};

/// A set of sliding windows evaluated as one unit.
///
/// `tick` checks and increments all windows under a single lock, so
/// concurrent callers can never be admitted past a tier that only had room
/// for one of them, and a denied call leaves every window untouched.
#[derive(Debug)]
pub struct RateGate {
    windows: Mutex<Vec<RateWindow>>,
    clock: Arc<dyn Clock>,
}

impl RateGate {
    /// Create a gate with one window per `(interval, capacity)` tier.
    ///
    /// Fails with [`EcwidError::Config`] if a tier has a zero interval.
    /// Zero capacity is allowed and makes the gate permanently closed.
    pub fn new<I>(tiers: I, clock: Arc<dyn Clock>) -> Result<Self, EcwidError>
    where
        I: IntoIterator<Item = (Duration, u32)>,
    {
        let mut windows = Vec::new();
        for (interval, capacity) in tiers {
            if interval.is_zero() {
                return Err(EcwidError::Config(format!(
                    "rate tier with capacity {capacity} has a zero interval"
                )));
            }
            windows.push(RateWindow::new(interval, capacity, clock.clone()));
        }

        Ok(Self {
            windows: Mutex::new(windows),
            clock,
        })
    }

    /// Create a gate with the legacy API's documented tiers and the system clock.
    pub fn with_default_tiers() -> Result<Self, EcwidError> {
        let tiers = super::limits::legacy::TIERS
            .iter()
            .map(|&(secs, capacity)| (Duration::from_secs(secs), capacity));
        Self::new(tiers, Arc::new(SystemClock))
    }

    /// Try to admit one call.
    ///
    /// Returns `Ok(true)` and counts the call against every tier, or
    /// `Ok(false)` without counting anything if any tier is full.
    pub fn tick(&self) -> Result<bool, EcwidError> {
        let mut windows = self.lock()?;

        // Evaluate every window so each one applies its own reset rule.
        let mut admissible = true;
        for window in windows.iter_mut() {
            admissible &= window.check();
        }

        if !admissible {
            return Ok(false);
        }

        for window in windows.iter_mut() {
            window.tick();
        }
        Ok(true)
    }

    /// Current calls per tier, keyed by interval.
    pub fn snapshot(&self) -> Result<BTreeMap<Duration, u32>, EcwidError> {
        let windows = self.lock()?;
        Ok(windows.iter().map(|w| (w.interval(), w.count())).collect())
    }

    /// Remaining headroom per tier, keyed by interval.
    pub fn remaining(&self) -> Result<BTreeMap<Duration, u32>, EcwidError> {
        let windows = self.lock()?;
        Ok(windows.iter().map(|w| (w.interval(), w.remaining())).collect())
    }

    /// Number of tiers.
    pub fn tiers(&self) -> Result<usize, EcwidError> {
        Ok(self.lock()?.len())
    }

    /// The clock shared by all windows.
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<RateWindow>>, EcwidError> {
        self.windows
            .lock()
            .map_err(|e| EcwidError::InternalLimit(format!("rate gate lock poisoned: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_limit::ManualClock;
    use std::thread;

    fn gate(tiers: &[(u64, u32)]) -> (RateGate, ManualClock) {
        let clock = ManualClock::new();
        let gate = RateGate::new(
            tiers
                .iter()
                .map(|&(secs, capacity)| (Duration::from_secs(secs), capacity)),
            Arc::new(clock.clone()),
        )
        .unwrap();
        (gate, clock)
    }

    #[test]
    fn test_gate_admits_until_smallest_tier_is_full() {
        let (gate, _clock) = gate(&[(5, 2), (50, 10)]);

        assert!(gate.tick().unwrap());
        assert!(gate.tick().unwrap());
        assert!(!gate.tick().unwrap());

        let snapshot = gate.snapshot().unwrap();
        assert_eq!(snapshot[&Duration::from_secs(5)], 2);
        assert_eq!(snapshot[&Duration::from_secs(50)], 2);
    }

    #[test]
    fn test_denied_tick_changes_no_window() {
        let (gate, clock) = gate(&[(5, 3), (50, 4)]);

        for _ in 0..3 {
            assert!(gate.tick().unwrap());
        }
        // Short tier reopens, long tier has one slot left.
        clock.advance(Duration::from_secs(5));
        assert!(gate.tick().unwrap());

        let before = gate.snapshot().unwrap();
        assert!(!gate.tick().unwrap());
        assert_eq!(gate.snapshot().unwrap()[&Duration::from_secs(50)], 4);
        assert_eq!(
            gate.snapshot().unwrap()[&Duration::from_secs(5)],
            before[&Duration::from_secs(5)]
        );
    }

    #[test]
    fn test_zero_capacity_tier_blocks_gate() {
        let (gate, clock) = gate(&[(5, 100), (50, 0)]);

        assert!(!gate.tick().unwrap());
        clock.advance(Duration::from_secs(500));
        assert!(!gate.tick().unwrap());
        assert_eq!(gate.snapshot().unwrap()[&Duration::from_secs(5)], 0);
    }

    #[test]
    fn test_zero_interval_is_config_error() {
        let result = RateGate::new(
            [(Duration::ZERO, 10)],
            Arc::new(ManualClock::new()),
        );
        assert!(matches!(result, Err(EcwidError::Config(_))));
    }

    #[test]
    fn test_default_tiers() {
        let gate = RateGate::with_default_tiers().unwrap();
        let remaining = gate.remaining().unwrap();

        assert_eq!(gate.tiers().unwrap(), 3);
        assert_eq!(remaining[&Duration::from_secs(5)], 100);
        assert_eq!(remaining[&Duration::from_secs(50)], 400);
        assert_eq!(remaining[&Duration::from_secs(500)], 1400);
    }

    #[test]
    fn test_poisoned_lock_is_internal_error() {
        let (gate, _clock) = gate(&[(5, 1)]);
        let gate = Arc::new(gate);

        let poisoner = gate.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.windows.lock().unwrap();
            panic!("poison the gate");
        })
        .join();

        assert!(matches!(gate.tiers(), Err(EcwidError::InternalLimit(_))));
        assert!(matches!(gate.tick(), Err(EcwidError::InternalLimit(_))));
        assert!(matches!(gate.snapshot(), Err(EcwidError::InternalLimit(_))));
    }

    #[test]
    fn test_concurrent_ticks_never_exceed_capacity() {
        let (gate, _clock) = gate(&[(1, 3), (2, 8), (3, 3)]);
        let gate = Arc::new(gate);

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let gate = gate.clone();
                thread::spawn(move || {
                    (0..50).filter(|_| gate.tick().unwrap()).count()
                })
            })
            .collect();

        let admitted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(admitted, 3);

        for (interval, count) in gate.snapshot().unwrap() {
            let capacity = if interval == Duration::from_secs(2) { 8 } else { 3 };
            assert!(count <= capacity);
        }
    }

    #[test]
    fn test_concurrent_ticks_across_window_resets() {
        let (gate, clock) = gate(&[(1, 3), (2, 8), (3, 3)]);
        let gate = Arc::new(gate);

        for _ in 0..5 {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let gate = gate.clone();
                    thread::spawn(move || {
                        for _ in 0..10 {
                            gate.tick().unwrap();
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }

            let snapshot = gate.snapshot().unwrap();
            assert!(snapshot[&Duration::from_secs(1)] <= 3);
            assert!(snapshot[&Duration::from_secs(2)] <= 8);
            assert!(snapshot[&Duration::from_secs(3)] <= 3);

            clock.advance(Duration::from_secs(1));
        }
    }
}
