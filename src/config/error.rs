//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration file is not valid YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Cycle duration must be between 1 and 366 days")]
    InvalidCycleDuration,

    #[error("Submission grace period must be between 1 and 366 days")]
    InvalidGraceDays,

    #[error("Visit grace period cannot exceed 366 days")]
    InvalidVisitGraceDays,

    #[error("Maximum cycle count must be at least one")]
    InvalidMaxCycles,

    #[error("Report due day must be between 1 and 31, got {0}")]
    InvalidReportDueDay(u32),

    #[error("Inclusion threshold cannot exceed 31 days, got {0}")]
    InvalidInclusionThreshold(u32),

    #[error("Maximum month count must be at least one")]
    InvalidMaxMonths,

    #[error("Invalid institution id in overrides: {0:?}")]
    InvalidInstitutionOverride(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
