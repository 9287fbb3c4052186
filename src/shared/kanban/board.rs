//! Board Data Structure
//!
//! The top-level container a user sees. Lists are always returned expanded,
//! each with its tasks, in board order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::list::BoardList;

/// A user's board with lists and tasks expanded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Unique board ID
    pub id: Uuid,
    /// Identity of the user owning the board (the token subject)
    pub owner_id: String,
    /// Lists in board order
    #[serde(default)]
    pub lists: Vec<BoardList>,
}

impl Board {
    /// Create an empty board for a user
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id: owner_id.into(),
            lists: Vec::new(),
        }
    }

    /// Find a list on this board by ID
    pub fn list(&self, list_id: Uuid) -> Option<&BoardList> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    /// Total number of tasks across all lists
    pub fn task_count(&self) -> usize {
        self.lists.iter().map(|list| list.tasks.len()).sum()
    }
}

/// Plain acknowledgement body for operations that return no entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
