//! Board Module
//!
//! The board hierarchy (board → lists → tasks) behind `/api/board`.
//!
//! - **`db`** - SQLite queries, all scoped to the owner's board
//! - **`service`** - `BoardService`, the operations the API exposes
//! - **`handlers`** - Axum handlers mapping HTTP onto the service

/// Database operations
pub mod db;

/// Board service
pub mod service;

/// HTTP handlers
pub mod handlers;

pub use service::BoardService;
