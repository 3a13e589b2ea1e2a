//! Retry policy for busy presentations.

use std::num::NonZeroU32;
use std::time::Duration;

use formkeep_types::config::PresenterConfig;

/// Delay applied between show attempts when a forced form hits a busy
/// player interface. One second -- 20 ticks of the conventional 20 Hz
/// engine clock.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Delay and attempt budget for busy retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Wait between attempts.
    pub delay: Duration,

    /// Cap on total show attempts. `None` (the default) retries for as
    /// long as the player's interface stays busy; with a cap, the last
    /// busy outcome is returned once the budget is spent -- never an
    /// error.
    pub max_attempts: Option<NonZeroU32>,
}

impl RetryPolicy {
    /// Unbounded policy with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, max: NonZeroU32) -> Self {
        self.max_attempts = Some(max);
        self
    }

    /// Build a policy from host configuration.
    ///
    /// A configured cap of zero is treated as absent.
    pub fn from_config(config: &PresenterConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.show_retry_delay_ms),
            max_attempts: config.max_show_attempts.and_then(NonZeroU32::new),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: DEFAULT_RETRY_DELAY,
            max_attempts: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_unbounded_one_second() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay, Duration::from_secs(1));
        assert!(policy.max_attempts.is_none());
    }

    #[test]
    fn test_from_config_maps_fields() {
        let config = PresenterConfig {
            show_retry_delay_ms: 250,
            max_show_attempts: Some(4),
        };
        let policy = RetryPolicy::from_config(&config);
        assert_eq!(policy.delay, Duration::from_millis(250));
        assert_eq!(policy.max_attempts.map(NonZeroU32::get), Some(4));
    }

    #[test]
    fn test_from_config_treats_zero_cap_as_unbounded() {
        let config = PresenterConfig {
            show_retry_delay_ms: 1_000,
            max_show_attempts: Some(0),
        };
        let policy = RetryPolicy::from_config(&config);
        assert!(policy.max_attempts.is_none());
    }
}
