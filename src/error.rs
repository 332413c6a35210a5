//! Custom error types for Tally
//!
//! The budget model itself never fails: invalid input is dropped by the
//! coordinator and deleting an unknown item is a no-op. The errors here cover
//! the ambient layers around it (configuration, file I/O, replay scripts).

use thiserror::Error;

/// The main error type for Tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A replay script row could not be understood
    #[error("Script error on row {row}: {message}")]
    Script { row: usize, message: String },

    /// An item handle string was malformed
    #[error("Invalid item handle: {0}")]
    InvalidHandle(String),
}

impl TallyError {
    /// Create a script error for the given (1-based) row
    pub fn script(row: usize, message: impl Into<String>) -> Self {
        Self::Script {
            row,
            message: message.into(),
        }
    }

    /// Check if this is a script error
    pub fn is_script(&self) -> bool {
        matches!(self, Self::Script { .. })
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TallyError {
    fn from(err: csv::Error) -> Self {
        let row = err
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(0);
        Self::script(row, err.to_string())
    }
}

/// Result type alias for Tally operations
pub type TallyResult<T> = Result<T, TallyError>;
