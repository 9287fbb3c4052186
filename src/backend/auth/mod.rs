//! Authentication Module
//!
//! Identity is established by an external issuer. This module only verifies
//! the bearer tokens it hands out and exposes their claims; the
//! [`auth_middleware`](crate::backend::middleware::auth_middleware) turns the
//! subject claim into the board owner for each request.

/// JWT token validation
pub mod sessions;

pub use sessions::{verify_token, Claims};
