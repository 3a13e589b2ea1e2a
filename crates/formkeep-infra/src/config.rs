//! Presenter config loading.
//!
//! Reads a `PresenterConfig` from a TOML file. A missing file yields the
//! defaults; an unreadable or unparsable one is a `ConfigError`.

use std::path::Path;

use thiserror::Error;

use formkeep_types::config::PresenterConfig;

/// Errors from loading the presenter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load the presenter configuration from `path`.
pub fn load_config(path: &Path) -> Result<PresenterConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(PresenterConfig::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.show_retry_delay_ms, 1_000);
        assert!(config.max_show_attempts.is_none());
    }

    #[test]
    fn test_loads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formkeep.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "show_retry_delay_ms = 50").unwrap();
        writeln!(file, "max_show_attempts = 5").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.show_retry_delay_ms, 50);
        assert_eq!(config.max_show_attempts, Some(5));
    }

    #[test]
    fn test_unparsable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formkeep.toml");
        std::fs::write(&path, "show_retry_delay_ms = \"soon\"").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
