//! Configuration loaded from an optional TOML file

use std::fs;
use crate::errors::{ArchiveError, ArchiveResult};

/// Default compression method when neither config nor CLI picks one
pub const DEFAULT_METHOD: &str = "zip";

/// Settings read from `archivekit.toml` (or a path given on the command line)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    /// Compression method used when none is given explicitly
    pub default_method: String,
    /// Route log output to this file instead of `env_logger`
    pub log_file: Option<String>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        ArchiveConfig {
            default_method: DEFAULT_METHOD.to_string(),
            log_file: None,
        }
    }
}

impl ArchiveConfig {
    /// Parse a configuration from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> ArchiveResult<Self> {
        let toml_value: toml::Value = content.parse()?;
        let mut config = ArchiveConfig::default();

        if let Some(value) = toml_value.get("default_method") {
            let method = value.as_str()
                .ok_or_else(|| ArchiveError::ConfigError("default_method must be a string".to_string()))?;
            if method.trim().is_empty() {
                return Err(ArchiveError::ConfigError("default_method must not be empty".to_string()));
            }
            config.default_method = method.to_string();
        }

        if let Some(value) = toml_value.get("log_file") {
            let path = value.as_str()
                .ok_or_else(|| ArchiveError::ConfigError("log_file must be a string".to_string()))?;
            config.log_file = Some(path.to_string());
        }

        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: &str) -> ArchiveResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_file() {
        let config = ArchiveConfig::from_str("").unwrap();
        assert_eq!(config, ArchiveConfig::default());
        assert_eq!(config.default_method, "zip");
    }

    #[test]
    fn test_full_config() {
        let config = ArchiveConfig::from_str(
            "default_method = \"rar\"\nlog_file = \"archive.log\"\n",
        ).unwrap();
        assert_eq!(config.default_method, "rar");
        assert_eq!(config.log_file.as_deref(), Some("archive.log"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let result = ArchiveConfig::from_str("default_method = 3");
        assert!(matches!(result, Err(ArchiveError::ConfigError(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = ArchiveConfig::from_str("default_method = ");
        assert!(matches!(result, Err(ArchiveError::ConfigError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ArchiveConfig::from_file("does/not/exist/archivekit.toml");
        assert!(matches!(result, Err(ArchiveError::IoError(_))));
    }
}
