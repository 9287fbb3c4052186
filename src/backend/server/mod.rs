//! Server Module
//!
//! Server initialization and shared state.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database pool creation and schema setup
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env` in the binary
//! 2. **Database**: Connect the SQLite pool, apply `schema.sql`
//! 3. **State Creation**: `AppState` with the secret and board service
//! 4. **Router Creation**: Board routes behind the auth middleware

/// Application state management
pub mod state;

/// Database loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
