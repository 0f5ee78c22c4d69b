//! Retry policy for flaky directory operations
//!
//! Directory removal and moves are empirically flaky right after heavy
//! filesystem activity on some platforms (the OS still reports the tree as
//! busy). The policy below bounds how often and how patiently an operation
//! is retried; the sleep function is injected so tests run without real
//! wall-clock delays.

use std::time::Duration;

use tracing::warn;

/// Sleep function used between retry attempts.
pub type SleepFn = Box<dyn Fn(Duration) + Send + Sync>;

/// Bounded retry schedule for directory operations.
///
/// The first `free_attempts` retries happen back to back; after that each
/// attempt waits `base_delay` multiplied by how far past the free attempts
/// it is, so a stuck tree gets progressively more time to settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub free_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            free_attempts: 5,
            base_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Delay to wait before the given 1-based attempt number.
    pub fn delay_before(&self, attempt: u32) -> Duration {
        if attempt <= self.free_attempts {
            Duration::ZERO
        } else {
            self.base_delay * (attempt - self.free_attempts)
        }
    }
}

/// Run `op` under the policy, sleeping per the schedule between attempts.
///
/// Returns the attempt count alongside the final error once the bound is
/// exhausted, so callers can report how hard they tried.
pub fn with_retries<T, F>(
    policy: &RetryPolicy,
    sleep: &SleepFn,
    mut op: F,
) -> std::result::Result<T, (u32, std::io::Error)>
where
    F: FnMut() -> std::io::Result<T>,
{
    let mut attempt = 1;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(e) if attempt >= policy.max_attempts => return Err((attempt, e)),
            Err(e) => {
                attempt += 1;
                let delay = policy.delay_before(attempt);
                warn!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "operation failed, retrying"
                );
                if delay > Duration::ZERO {
                    (sleep)(delay);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_attempts_have_no_delay() {
        let policy = RetryPolicy::default();
        for attempt in 1..=5 {
            assert_eq!(policy.delay_before(attempt), Duration::ZERO);
        }
    }

    #[test]
    fn late_attempts_back_off() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_before(6), Duration::from_millis(500));
        assert_eq!(policy.delay_before(8), Duration::from_millis(1500));
        assert_eq!(policy.delay_before(10), Duration::from_millis(2500));
    }
}
