use rand::Rng;
use std::time::Duration;

/// Retry policy for conflicting joins.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Total number of read-decide-commit rounds before giving up.
    pub max_attempts: u32,
    pub base_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_backoff: Duration::from_millis(10),
            max_backoff: Duration::from_millis(200),
        }
    }
}

impl RegistryConfig {
    /// Delay before retry number `attempt` (1-based): exponential growth
    /// capped at `max_backoff`, jittered into the upper half of the window.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.saturating_sub(1).min(16);
        let cap = self
            .base_backoff
            .saturating_mul(factor)
            .min(self.max_backoff);
        let cap_micros = cap.as_micros() as u64;
        if cap_micros == 0 {
            return Duration::ZERO;
        }

        let half = cap_micros / 2;
        let jitter = rand::rng().random_range(0..=cap_micros - half);
        Duration::from_micros(half + jitter)
    }
}
