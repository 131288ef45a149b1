//! Error types used throughout the application

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Datespace
///
/// Every variant carries the name of the offending input (`field`), e.g.
/// `"start"`, `"increment"` or `"round"`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DateSpaceError {
    /// A date string or increment string could not be parsed.
    #[error("Parse error in {field}: {message}")]
    Parse {
        /// Name of the offending input
        field: String,
        /// Human-readable description
        message: String,
    },

    /// A value has the right shape but unusable content.
    #[error("Validation error in {field}: {message}")]
    Validation {
        /// Name of the offending input
        field: String,
        /// Human-readable description
        message: String,
    },

    /// A value is of an entirely wrong kind.
    #[error("Type error in {field}: {message}")]
    Type {
        /// Name of the offending input
        field: String,
        /// Human-readable description
        message: String,
    },
}

impl DateSpaceError {
    /// Create a parse error for a field
    pub fn parse<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Parse { field: field.into(), message: message.into() }
    }

    /// Create a validation error for a field
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Create a type error for a field
    pub fn type_error<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Type { field: field.into(), message: message.into() }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Type { .. } => ErrorKind::Type,
        }
    }

    /// Name of the input that was rejected
    pub fn field(&self) -> &str {
        match self {
            Self::Parse { field, .. } | Self::Validation { field, .. } | Self::Type { field, .. } => {
                field
            }
        }
    }

    /// Human-readable detail without the field prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Parse { message, .. }
            | Self::Validation { message, .. }
            | Self::Type { message, .. } => message,
        }
    }
}

/// Error categories, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Parse,
    Validation,
    Type,
}

impl ErrorKind {
    /// Stable label suitable for logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Validation => "validation",
            Self::Type => "type",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type alias for Datespace operations
pub type Result<T> = std::result::Result<T, DateSpaceError>;
