//! Bounded retries with exponential backoff.

use crate::constants::{
    MAX_MANUAL_RETRIES, STRAIN_LIST_BASE_DELAY, STRAIN_LIST_MAX_ATTEMPTS, STRAIN_LIST_MAX_DELAY,
};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: STRAIN_LIST_MAX_ATTEMPTS,
            base_delay: STRAIN_LIST_BASE_DELAY,
            max_delay: STRAIN_LIST_MAX_DELAY,
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no waiting.
    #[must_use]
    pub const fn once() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            multiplier: 1.0,
        }
    }

    /// Wait before the 1-based `attempt`. The first attempt never waits.
    #[must_use]
    pub fn delay_before(&self, attempt: u32) -> Duration {
        if attempt <= 1 {
            return Duration::ZERO;
        }
        let exponent = i32::try_from(attempt - 2).unwrap_or(i32::MAX);
        let scaled = self.base_delay.as_secs_f64() * self.multiplier.powi(exponent);
        if !scaled.is_finite() || scaled >= self.max_delay.as_secs_f64() {
            self.max_delay
        } else {
            Duration::from_secs_f64(scaled.max(0.0))
        }
    }
}

/// Run `op` until it succeeds or `policy.max_attempts` is spent.
///
/// `op` receives the 1-based attempt number. `sleep` performs the backoff wait
/// so the caller decides which timer to use.
///
/// # Errors
///
/// The error of the final attempt.
pub async fn retry_async<T, E, Op, Fut, Sleep, SleepFut>(
    policy: &RetryPolicy,
    mut op: Op,
    mut sleep: Sleep,
) -> Result<T, E>
where
    E: Display,
    Op: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    Sleep: FnMut(Duration) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= max_attempts => {
                log::warn!("giving up after {attempt} attempts: {err}");
                return Err(err);
            }
            Err(err) => {
                attempt += 1;
                let delay = policy.delay_before(attempt);
                log::info!(
                    "attempt {} failed ({err}); retrying in {} ms",
                    attempt - 1,
                    delay.as_millis()
                );
                sleep(delay).await;
            }
        }
    }
}

/// Counter for user-triggered retries on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualRetry {
    used: u32,
    max: u32,
}

impl Default for ManualRetry {
    fn default() -> Self {
        Self::new(MAX_MANUAL_RETRIES)
    }
}

impl ManualRetry {
    #[must_use]
    pub const fn new(max: u32) -> Self {
        Self { used: 0, max }
    }

    /// Consume one retry; `false` once the budget is spent.
    pub const fn try_consume(&mut self) -> bool {
        if self.used >= self.max {
            false
        } else {
            self.used += 1;
            true
        }
    }

    #[must_use]
    pub const fn used(&self) -> u32 {
        self.used
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.max.saturating_sub(self.used)
    }

    #[must_use]
    pub const fn exhausted(&self) -> bool {
        self.used >= self.max
    }

    pub const fn reset(&mut self) {
        self.used = 0;
    }
}
