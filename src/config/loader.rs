//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ServerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::PersistMode;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("route-persist-{}-{}.toml", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = write_temp(
            "valid",
            r#"
            persist = "context"

            [timeouts]
            request_secs = 5
            "#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.persist, Some(PersistMode::Context));
        assert_eq!(config.timeouts.request_secs, 5);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/route-persist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_error() {
        let path = write_temp("parse", "persist = 3");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_validation_error_message() {
        let path = write_temp(
            "invalid",
            r#"
            [timeouts]
            request_secs = 0

            [observability]
            log_level = "loud"
            "#,
        );

        let err = load_config(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: request timeout must be greater than zero, unknown log level `loud`"
        );
        fs::remove_file(path).unwrap();
    }
}
