//! Middleware Module
//!
//! HTTP middleware applied to the board routes.
//!
//! - **`auth`** - Verifies bearer tokens and attaches the caller's identity
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use kanban_board::backend::middleware::auth_middleware;
//!
//! let protected = routes.route_layer(from_fn_with_state(app_state, auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
