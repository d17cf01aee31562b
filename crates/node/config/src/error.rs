//! Configuration error types.

use std::path::PathBuf;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to parse JSON configuration.
    #[error("failed to parse JSON config: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Failed to serialize configuration to TOML.
    #[error("failed to serialize config to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A schedule must contain at least one fork.
    #[error("protocol schedule has no forks")]
    EmptySchedule,

    /// The first fork must activate at genesis.
    #[error("first fork must activate at block 0, got {0}")]
    FirstForkNotGenesis(u64),

    /// Forks must activate at strictly increasing block numbers.
    #[error("fork {name} activates at {activation}, not after previous fork at {previous}")]
    ForkOutOfOrder {
        /// Name of the offending fork.
        name: String,
        /// Its activation block.
        activation: u64,
        /// Activation block of the fork before it.
        previous: u64,
    },
}

#[cfg(test)]
mod tests {
    use std::io::{Error as IoError, ErrorKind};

    use super::*;

    #[test]
    fn test_read_error_display() {
        let err = ConfigError::Read {
            path: PathBuf::from("/etc/ember/schedule.toml"),
            source: IoError::new(ErrorKind::NotFound, "file not found"),
        };
        let display = err.to_string();
        assert!(display.contains("failed to read config file"));
        assert!(display.contains("/etc/ember/schedule.toml"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_empty_schedule_display() {
        assert_eq!(ConfigError::EmptySchedule.to_string(), "protocol schedule has no forks");
    }

    #[test]
    fn test_first_fork_display() {
        let err = ConfigError::FirstForkNotGenesis(10);
        assert_eq!(err.to_string(), "first fork must activate at block 0, got 10");
    }

    #[test]
    fn test_fork_out_of_order_display() {
        let err = ConfigError::ForkOutOfOrder {
            name: "byzantium".to_string(),
            activation: 5,
            previous: 5,
        };
        assert_eq!(
            err.to_string(),
            "fork byzantium activates at 5, not after previous fork at 5"
        );
    }

    #[test]
    fn test_toml_parse_error_from() {
        let result: Result<toml::Value, _> = toml::from_str("invalid = [unclosed");
        let config_err: ConfigError = result.unwrap_err().into();
        assert!(config_err.to_string().contains("failed to parse TOML config"));
    }

    #[test]
    fn test_json_parse_error_from() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{invalid}");
        let config_err: ConfigError = result.unwrap_err().into();
        assert!(config_err.to_string().contains("failed to parse JSON config"));
    }

    #[test]
    fn test_config_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigError>();
    }
}
