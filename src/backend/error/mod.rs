//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and extractor rejection conversions
//! ```
//!
//! # Error Types
//!
//! - `NotFound` - Board, list or task missing (or not on the caller's board)
//! - `Unauthorized` - Missing or invalid bearer token
//! - `SharedError` - Validation failures on incoming data
//! - `StorageError` - The database rejected a query or is unreachable
//! - `HandlerError` - Ad-hoc failures with an explicit status code
//!
//! # HTTP Response Conversion
//!
//! All backend errors implement `IntoResponse`, so handlers return
//! `Result<_, BackendError>` and use `?` throughout. The body is always
//! `{"message": "...", "status": <code>}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
