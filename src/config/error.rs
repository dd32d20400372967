//! Configuration loading errors.

use thiserror::Error;

/// Config load error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
    /// A value is outside its valid range
    #[error("Invalid value: {0}")]
    Invalid(String),
}
