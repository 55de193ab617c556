//! Custom error types for paysplit
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for paysplit operations
#[derive(Error, Debug)]
pub enum PaysplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Database errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Hashing and random number errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// A line was read but could not be used
    #[error(transparent)]
    Input(#[from] InputError),

    /// Standard input reached end of file
    #[error("Input closed")]
    InputClosed,
}

/// Reasons a line of numeric input is rejected
///
/// The display strings are shown to the user verbatim before re-prompting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    #[error("Invalid input. Please enter an integer.")]
    NotAnInteger,

    #[error("Please enter a positive value.")]
    NotPositive,

    #[error("Please enter a positive integer.")]
    NotPositiveInteger,
}

impl PaysplitError {
    /// Create a "duplicate" error for users
    pub fn duplicate_user(username: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "User",
            identifier: username.into(),
        }
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Errors that abort a single operation but leave the session usable
    ///
    /// Terminal I/O failures and end of input are not recoverable and must
    /// propagate to the caller instead.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::InputClosed)
    }
}

impl From<std::io::Error> for PaysplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PaysplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<rusqlite::Error> for PaysplitError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for paysplit operations
pub type PaysplitResult<T> = Result<T, PaysplitError>;
