/**
 * Backend Error Types
 *
 * This module defines the errors a board request can end in.
 *
 * # Error Categories
 *
 * ## Lookup Errors
 *
 * A board, list or task that does not exist, or exists on another user's
 * board, is reported as `NotFound`. Callers cannot tell the two apart.
 *
 * ## Input Errors
 *
 * Empty titles, unknown priorities, malformed ids and malformed JSON bodies
 * all surface as `SharedError::ValidationError` (400).
 *
 * ## Storage Errors
 *
 * Any `sqlx::Error` becomes `StorageError` (500). The detail is logged, the
 * response only carries a generic message.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use kanban_board::backend::error::BackendError;
///
/// let err = BackendError::not_found("List");
/// assert_eq!(err.message(), "List not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A board, list or task is absent from the caller's board
    #[error("{entity} not found")]
    NotFound {
        /// Kind of entity that was looked up
        entity: &'static str,
    },

    /// Missing or invalid credentials
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Invalid input (from shared validation)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// The store rejected a query or could not be reached
    #[error("Storage error: {0}")]
    StorageError(#[from] sqlx::Error),
}

impl BackendError {
    /// Create a not-found error for an entity kind ("Board", "List", "Task")
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a validation error for a request field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Get the HTTP status code for this error
    ///
    /// - `NotFound` - 404 Not Found
    /// - `Unauthorized` - 401 Unauthorized
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError` - 400 Bad Request
    /// - `StorageError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    ///
    /// Storage details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { entity } => format!("{} not found", entity),
            Self::Unauthorized { message } => message.clone(),
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(err) => err.message().to_string(),
            Self::StorageError(_) => "Storage failure".to_string(),
        }
    }
}
