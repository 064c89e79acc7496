//! Error types for the Tabula table.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Record-set loading errors.
#[derive(Debug, Error)]
pub enum DataError {
    /// Record set failed to parse.
    #[error("Record parse error: {0}")]
    Parse(String),

    /// IO error while reading a record source.
    #[error("IO error: {0}")]
    Io(String),
}
