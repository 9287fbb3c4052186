//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports and documentation
//! ├── router.rs        - Main router creation
//! └── board_routes.rs  - `/api/board` routes behind the auth middleware
//! ```
//!
//! # Routes
//!
//! - `GET /` - Liveness probe (public)
//! - `GET /api/board` - Caller's board with lists and tasks
//! - `POST /api/board/list` - Create a list
//! - `DELETE /api/board/list/{id}` - Delete a list and its tasks
//! - `POST /api/board/task` - Create a task
//! - `PUT /api/board/task/{id}` - Update or move a task
//! - `DELETE /api/board/task/{id}` - Delete a task
//!
//! Anything else falls through to a JSON 404.

/// Main router creation
pub mod router;

/// Board API routes
pub mod board_routes;

// Re-export commonly used functions
pub use router::create_router;
