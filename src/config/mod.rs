//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! and optional YAML/TOML files using the `config` and `dotenvy` crates.
//! Configuration is loaded with the `PLACEMENT_COMPLIANCE` prefix and nested values
//! use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use placement_compliance::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let selector = config.engine.selector();
//! ```

mod engine;
mod error;
mod logging;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use std::path::Path;

use serde::Deserialize;

const ENV_PREFIX: &str = "PLACEMENT_COMPLIANCE";
const ENV_SEPARATOR: &str = "__";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields the standard
/// 28-day and calendar-month rules.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Cycle engine rules and model selection
    #[serde(default)]
    pub engine: EngineConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PLACEMENT_COMPLIANCE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PLACEMENT_COMPLIANCE__ENGINE__DEFAULT_MODEL=fixed_duration`
    /// - `PLACEMENT_COMPLIANCE__ENGINE__CALENDAR_MONTH__REPORT_DUE_DAY=7`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top
    ///
    /// The format is picked from the file extension (`.yaml`, `.toml`, ...).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cycle::CycleModelKind;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("PLACEMENT_COMPLIANCE__ENGINE__DEFAULT_MODEL");
        env::remove_var("PLACEMENT_COMPLIANCE__ENGINE__CALENDAR_MONTH__REPORT_DUE_DAY");
        env::remove_var("PLACEMENT_COMPLIANCE__LOGGING__JSON");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.engine, EngineConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PLACEMENT_COMPLIANCE__ENGINE__DEFAULT_MODEL", "fixed_duration");
        env::set_var("PLACEMENT_COMPLIANCE__ENGINE__CALENDAR_MONTH__REPORT_DUE_DAY", "7");
        env::set_var("PLACEMENT_COMPLIANCE__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.default_model, CycleModelKind::FixedDuration);
        assert_eq!(config.engine.calendar_month.report_due_day, 7);
        assert_eq!(config.engine.calendar_month.min_days_for_inclusion, 10);
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_from_yaml_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "engine:\n  fixed_duration:\n    cycle_duration_days: 14\n  institution_overrides:\n    legacy-u: fixed_duration\nlogging:\n  filter: warn"
        )
        .unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.engine.fixed_duration.cycle_duration_days, 14);
        assert_eq!(config.engine.fixed_duration.submission_grace_days, 5);
        assert_eq!(
            config.engine.institution_overrides.get("legacy-u"),
            Some(&CycleModelKind::FixedDuration)
        );
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let result = AppConfig::load_from_file("/nonexistent/placement-compliance.yaml");
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_from_yaml_str() {
        let config = AppConfig::from_yaml_str(
            "engine:\n  default_model: calendar_month\n  calendar_month:\n    min_days_for_inclusion: 15\n",
        )
        .unwrap();
        assert_eq!(config.engine.calendar_month.min_days_for_inclusion, 15);
        assert_eq!(config.engine.calendar_month.report_due_day, 5);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_from_yaml_str_rejects_unknown_model() {
        let result = AppConfig::from_yaml_str("engine:\n  default_model: weekly\n");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_validate_reports_first_problem() {
        let config = AppConfig::from_yaml_str("engine:\n  calendar_month:\n    report_due_day: 40\n")
            .unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidReportDueDay(40))
        );
    }
}
