// Wed Oct 14 2026 - Alex

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

const LOG_LEVELS: [&str; 7] = ["off", "error", "warn", "warning", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub compaction_hint: bool,
    pub fail_on_error: bool,
    pub use_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            compaction_hint: true,
            fail_on_error: false,
            use_color: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    pub fn with_compaction_hint(mut self, enabled: bool) -> Self {
        self.compaction_hint = enabled;
        self
    }

    pub fn with_fail_on_error(mut self, enabled: bool) -> Self {
        self.fail_on_error = enabled;
        self
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.use_color = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "log_level must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.log_level, "warn");
        assert!(config.compaction_hint);
        assert!(!config.fail_on_error);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "fail_on_error": true }"#).unwrap();
        assert!(config.fail_on_error);
        assert!(config.compaction_hint);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_rejects_unknown_level() {
        let err = Config::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(Config::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_builders() {
        let config = Config::new()
            .with_log_level("Debug")
            .with_compaction_hint(false)
            .with_fail_on_error(true)
            .with_color(false);
        assert!(config.validate().is_ok());
        assert!(!config.compaction_hint);
        assert!(config.fail_on_error);
        assert!(!config.use_color);
    }

    #[test]
    fn test_verbosity_level_round_trips() {
        use crate::utils::LoggingUtils;

        for verbosity in 1..=3 {
            let level = LoggingUtils::level_from_verbosity(verbosity);
            let config = Config::new().with_log_level(level.as_str());
            assert!(config.validate().is_ok());
            assert_eq!(LoggingUtils::level_from_str(&config.log_level), level);
        }
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/layout-config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
