//! Error types for the user-data crate.

use thiserror::Error;

/// Raised when a stored item list is not a JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The text is not valid JSON, or is valid JSON of the wrong shape.
    #[error("invalid item list encoding: {message}")]
    Malformed {
        /// Parser message describing the failure.
        message: String,
    },
}

impl DecodeError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}
