//! Admission wait in front of legacy API calls.
//!
//! Before each legacy request the client asks the shared [`RateGate`] for a
//! slot. When the gate is full the throttler sleeps for the retry interval
//! and asks again, up to the maximum wait. Sleeping is a tokio suspension
//! point, so a waiting request never blocks a worker thread, and dropping the
//! future cancels the wait.

use std::sync::Arc;
use std::time::Duration;

use crate::error::EcwidError;
use crate::rate_limit::{RateGate, RateLimitConfig};

/// Waits for the rate gate before letting a request through.
#[derive(Debug, Clone)]
pub struct RequestThrottler {
    gate: Arc<RateGate>,
    max_wait: Duration,
    retry_interval: Duration,
    enabled: bool,
}

impl RequestThrottler {
    /// Create a throttler over a (possibly shared) gate.
    pub fn new(gate: Arc<RateGate>, config: &RateLimitConfig) -> Self {
        Self {
            gate,
            max_wait: config.max_wait,
            retry_interval: config.retry_interval,
            enabled: config.enabled,
        }
    }

    /// The gate this throttler admits through.
    pub fn gate(&self) -> &Arc<RateGate> {
        &self.gate
    }

    /// Maximum time spent waiting for admission.
    pub fn max_wait(&self) -> Duration {
        self.max_wait
    }

    /// Pause between two admission attempts.
    pub fn retry_interval(&self) -> Duration {
        self.retry_interval
    }

    /// Whether admission is enforced.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wait until the gate admits one call.
    ///
    /// On success the call has already been counted against every tier.
    /// Fails with [`EcwidError::LimitExceeded`] once the wait reaches
    /// `max_wait`, or [`EcwidError::InternalLimit`] if the gate cannot be
    /// evaluated.
    pub async fn await_admission(&self) -> Result<(), EcwidError> {
        if !self.enabled {
            return Ok(());
        }

        let start = tokio::time::Instant::now();
        let mut attempts: u32 = 0;

        loop {
            if self.gate.tick().map_err(into_internal)? {
                if attempts > 0 {
                    tracing::debug!(attempts, "rate gate admitted request after waiting");
                }
                return Ok(());
            }
            attempts += 1;

            let waited = start.elapsed();
            if waited >= self.max_wait {
                let snapshot = self.gate.snapshot().map_err(into_internal)?;
                tracing::warn!(?waited, ?snapshot, "rate gate admission timed out");
                return Err(EcwidError::LimitExceeded { waited, snapshot });
            }

            tracing::debug!(
                attempts,
                ?waited,
                retry_in = ?self.retry_interval,
                "rate gate full, waiting"
            );
            tokio::time::sleep(self.retry_interval).await;
        }
    }
}

fn into_internal(error: EcwidError) -> EcwidError {
    match error {
        EcwidError::InternalLimit(_) => error,
        other => EcwidError::InternalLimit(other.to_string()),
    }
}
