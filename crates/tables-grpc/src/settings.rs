// ABOUTME: Per-call timeout and retry settings for Tables RPCs.
// ABOUTME: Exponential backoff with jitter over a configurable set of retryable status codes.

use std::time::Duration;

use rand::Rng;
use tonic::Code;

/// Deadline applied to each attempt when no override is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Timeout and retry behavior for one RPC.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSettings {
    /// Deadline for a single attempt. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Retry policy. `None` makes exactly one attempt.
    pub retry: Option<RetryPolicy>,
}

impl Default for CallSettings {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            retry: None,
        }
    }
}

impl CallSettings {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn without_retry(mut self) -> Self {
        self.retry = None;
        self
    }

    /// Total number of attempts these settings allow.
    pub fn max_attempts(&self) -> u32 {
        self.retry.as_ref().map_or(1, |r| r.max_attempts.max(1))
    }
}

/// Exponential backoff policy.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Attempts including the first one.
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub multiplier: f64,
    /// Randomize each delay between zero and the computed backoff.
    pub jitter: bool,
    pub retryable_codes: Vec<Code>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::idempotent()
    }
}

impl RetryPolicy {
    /// Policy for calls that are safe to repeat: retries transient
    /// unavailability and deadline expiry.
    pub fn idempotent() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
            multiplier: 1.3,
            jitter: true,
            retryable_codes: vec![Code::Unavailable, Code::DeadlineExceeded],
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.initial_backoff = initial;
        self.max_backoff = max;
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }

    pub fn with_retryable_codes(mut self, codes: impl IntoIterator<Item = Code>) -> Self {
        self.retryable_codes = codes.into_iter().collect();
        self
    }

    pub fn is_retryable(&self, code: Code) -> bool {
        self.retryable_codes.contains(&code)
    }

    /// Backoff before the retry following attempt `attempt` (1-based),
    /// capped at `max_backoff`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(32) as i32;
        let base = self.initial_backoff.as_secs_f64() * self.multiplier.powi(exponent);
        let capped = base.min(self.max_backoff.as_secs_f64()).max(0.0);
        Duration::from_secs_f64(capped)
    }

    /// Delay to sleep before the next attempt, with jitter applied.
    pub fn delay(&self, attempt: u32) -> Duration {
        let backoff = self.backoff(attempt);
        if !self.jitter || backoff.is_zero() {
            return backoff;
        }
        let factor: f64 = rand::thread_rng().gen_range(0.0..=1.0);
        backoff.mul_f64(factor)
    }
}
