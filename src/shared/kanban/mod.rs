//! Kanban Module
//!
//! Data structures for the board hierarchy:
//!
//! - `Board` - A user's single board, with its lists expanded
//! - `BoardList` - A titled column owning an ordered set of tasks
//! - `Task` - A unit of work with priority and optional due date
//!
//! Request bodies for the HTTP layer live next to the type they create or
//! modify.
//!
//! # Usage
//!
//! ```rust
//! use kanban_board::shared::kanban::{Board, BoardList, Task, Priority};
//! ```

pub mod board;
pub mod list;
pub mod task;
pub mod validation;

// Re-export all types
pub use board::{Board, StatusMessage};
pub use list::{BoardList, CreateListRequest};
pub use task::{CreateTaskRequest, Priority, Task, TaskChanges, UpdateTaskRequest};
pub use validation::{parse_due_date, validate_title};
