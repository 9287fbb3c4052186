//! Input errors for board requests
//!
//! Raised while turning request bodies into lists and tasks: blank or
//! oversized titles, unknown priorities, unparseable due dates. The backend
//! maps every one of them to a 400.

use thiserror::Error;

/// A request field that failed validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// Name of the offending JSON field
        field: String,
        /// Message returned to the client
        message: String,
    },
}

impl SharedError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }

    /// Client-facing message, without the field prefix
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
