//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the HTTP layer and the store. All types are designed for JSON
//! serialization over the board API.

/// Board, list and task structures
pub mod kanban;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use kanban::{Board, BoardList, Priority, Task};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
