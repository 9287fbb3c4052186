//! Common test utilities and helpers
//!
//! - Database and router fixtures
//! - Token signing helpers
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;
pub mod database;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
