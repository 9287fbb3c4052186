//! List Data Structure
//!
//! A titled column on a board. Its tasks are the tasks whose `list_id`
//! points back at it, kept in insertion order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::task::Task;

/// A list with its tasks expanded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardList {
    /// Unique list ID
    pub id: Uuid,
    /// List title
    pub title: String,
    /// Board owning this list
    pub board_id: Uuid,
    /// Tasks in list order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl BoardList {
    /// Create an empty list on a board
    pub fn new(board_id: Uuid, title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            board_id,
            tasks: Vec::new(),
        }
    }

    /// Check whether a task belongs to this list
    pub fn contains_task(&self, task_id: Uuid) -> bool {
        self.tasks.iter().any(|task| task.id == task_id)
    }
}

/// Request to create a list on the caller's board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListRequest {
    pub title: String,
}
