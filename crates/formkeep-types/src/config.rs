//! Presenter configuration.
//!
//! `PresenterConfig` mirrors the TOML section an embedding host loads at
//! startup to tune the retry behavior. All fields have defaults.

use serde::{Deserialize, Serialize};

/// Tunables for the resilient presenter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenterConfig {
    /// Delay between busy retries, in milliseconds. Defaults to one
    /// second -- 20 ticks of the conventional 20 Hz engine clock.
    #[serde(default = "default_show_retry_delay_ms")]
    pub show_retry_delay_ms: u64,

    /// Cap on total show attempts for forced forms. Absent (the
    /// default), a forced form retries for as long as the player's
    /// interface stays busy.
    #[serde(default)]
    pub max_show_attempts: Option<u32>,
}

fn default_show_retry_delay_ms() -> u64 {
    1_000
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            show_retry_delay_ms: default_show_retry_delay_ms(),
            max_show_attempts: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presenter_config_default_values() {
        let config = PresenterConfig::default();
        assert_eq!(config.show_retry_delay_ms, 1_000);
        assert!(config.max_show_attempts.is_none());
    }

    #[test]
    fn test_presenter_config_deserialize_with_defaults() {
        let config: PresenterConfig = toml::from_str("").unwrap();
        assert_eq!(config.show_retry_delay_ms, 1_000);
        assert!(config.max_show_attempts.is_none());
    }

    #[test]
    fn test_presenter_config_deserialize_with_values() {
        let toml_str = r#"
show_retry_delay_ms = 250
max_show_attempts = 10
"#;
        let config: PresenterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.show_retry_delay_ms, 250);
        assert_eq!(config.max_show_attempts, Some(10));
    }

    #[test]
    fn test_presenter_config_serde_roundtrip() {
        let config = PresenterConfig {
            show_retry_delay_ms: 50,
            max_show_attempts: Some(3),
        };
        let serialized = toml::to_string(&config).unwrap();
        let back: PresenterConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(back.show_retry_delay_ms, 50);
        assert_eq!(back.max_show_attempts, Some(3));
    }
}
