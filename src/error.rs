// Error types module

use thiserror::Error;

/// Errors raised while configuring or finalizing a Thumbor URL
///
/// Two categories cover every failure:
/// - `InvalidArgument`: a supplied value is outside its documented domain
///   (negative dimension, out-of-range percentage, blank string, malformed crop)
/// - `InvalidState`: an operation was requested before its prerequisite
///   (alignment before resize, safe URL without a key)
///
/// Neither is retryable; the caller must fix its inputs or call sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl UrlError {
    /// Helper constructors for common error patterns
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        UrlError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        UrlError::InvalidState(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, UrlError::InvalidArgument { .. })
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, UrlError::InvalidState(_))
    }
}
