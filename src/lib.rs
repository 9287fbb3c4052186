//! Kanban Board - Main Library
//!
//! Backend for a personal kanban board: every authenticated user owns one
//! board, a board holds ordered lists, and lists hold ordered tasks.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared by the HTTP layer and the store
//!   - Board, list and task structures, request bodies
//!   - Configuration and shared error types
//!
//! - **`backend`** - Server-side code
//!   - Axum router, auth middleware, error responses
//!   - Board service and SQLite store
//!
//! # Usage
//!
//! ```rust,no_run
//! use kanban_board::backend::server::init::create_app;
//! use kanban_board::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation failures on incoming data
//! - `backend::BackendError` for everything surfaced over HTTP

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
