//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server exposing
//! the board API over a SQLite store.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`board`** - Board service, store queries and HTTP handlers
//! - **`auth`** - Bearer token verification
//! - **`middleware`** - Request middleware (authentication)
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── board/          - Board service, store, handlers
//! ├── auth/           - Token verification
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! HTTP request → `auth_middleware` (verifies the bearer token and attaches
//! the caller's identity) → board handler → `BoardService` → store → JSON.
//!
//! # State Management
//!
//! `AppState` holds the token secret and the board service, which owns the
//! connection pool. It is cloned into every handler; no other mutable state is
//! shared between requests.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Board service, store and handlers
pub mod board;

/// Backend error types
pub mod error;

/// Bearer token verification
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use server::create_app;
pub use board::BoardService;
pub use error::BackendError;
