//! Retry budget and backoff schedule.

use derive_getters::Getters;
use std::time::Duration;

/// Per-model retry budget and wait schedule.
///
/// The wait after a failed attempt `n` (zero-based) is
/// `backoff_step * (n + 1) + max_jitter * U[0, 1)`. There is no wait after a
/// model's last attempt.
///
/// # Examples
///
/// ```
/// use moodcanvas_fallback::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.total_attempts(), 3);
/// assert_eq!(policy.delay_for(0, 0.0), Duration::from_secs(2));
/// assert_eq!(policy.delay_for(1, 0.5), Duration::from_millis(4500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct RetryPolicy {
    /// Retries after the first attempt, per model
    max_retries_per_model: u32,
    /// Linear wait increment
    backoff_step: Duration,
    /// Upper bound of the random extra wait
    max_jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries_per_model: 2,
            backoff_step: Duration::from_secs(2),
            max_jitter: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy.
    pub fn new(max_retries_per_model: u32, backoff_step: Duration, max_jitter: Duration) -> Self {
        Self {
            max_retries_per_model,
            backoff_step,
            max_jitter,
        }
    }

    /// Creates a policy from second counts, as found in configuration files.
    ///
    /// Negative or non-finite values become zero.
    pub fn from_secs(max_retries_per_model: u32, backoff_step_secs: f64, max_jitter_secs: f64) -> Self {
        Self::new(
            max_retries_per_model,
            secs_to_duration(backoff_step_secs),
            secs_to_duration(max_jitter_secs),
        )
    }

    /// The same policy with the random component removed.
    pub fn without_jitter(self) -> Self {
        Self {
            max_jitter: Duration::ZERO,
            ..self
        }
    }

    /// Attempts made against one model before moving on.
    pub fn total_attempts(&self) -> u32 {
        self.max_retries_per_model.saturating_add(1)
    }

    /// Whether another attempt follows attempt `attempt` on the same model.
    pub fn has_retry_after(&self, attempt: u32) -> bool {
        attempt < self.max_retries_per_model
    }

    /// Wait after failed attempt `attempt`, given a jitter draw in `[0, 1)`.
    pub fn delay_for(&self, attempt: u32, jitter_fraction: f64) -> Duration {
        let linear = self.backoff_step.saturating_mul(attempt.saturating_add(1));
        let fraction = if jitter_fraction.is_finite() {
            jitter_fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        linear.saturating_add(self.max_jitter.mul_f64(fraction))
    }

    /// Wait after failed attempt `attempt`, with a fresh jitter draw.
    pub fn jittered_delay(&self, attempt: u32) -> Duration {
        if self.max_jitter.is_zero() {
            return self.delay_for(attempt, 0.0);
        }
        self.delay_for(attempt, rand::random::<f64>())
    }
}

fn secs_to_duration(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs.max(0.0)).unwrap_or(Duration::ZERO)
}
