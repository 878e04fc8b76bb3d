//! Error types for email screening

use thiserror::Error;

/// Errors raised at the fallible edges of the crate (configuration, parsing
/// of view parameters, JSON export)
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read a configuration file
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML or has unknown keys
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid configuration value for {field}: {details}")]
    InvalidConfig { field: String, details: String },

    /// Status filter string is not one of all/valid/risky/invalid
    #[error("Unknown status filter: {0}")]
    UnknownStatus(String),

    /// Failed to serialize records
    #[error("Failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for email screening operations
pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of a validation run that did not complete
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunError {
    /// The run was cancelled between candidates
    #[error("Validation cancelled after {completed} of {total} candidates")]
    Cancelled { completed: usize, total: usize },
}
