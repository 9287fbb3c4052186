//! Task Data Structure
//!
//! Tasks belong to exactly one list. Moving a task between lists is an update
//! of its `list_id`.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::validation::{parse_due_date, validate_title};
use crate::shared::SharedError;

/// Task priority
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = SharedError;

    /// Accepts exactly the lowercase names used on the wire
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(SharedError::validation(
                "priority",
                format!("Unknown priority '{}'", other),
            )),
        }
    }
}

/// A unit of work on a list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task ID
    pub id: Uuid,
    /// Task title
    pub title: String,
    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
    /// List owning this task
    pub list_id: Uuid,
}

impl Task {
    /// Create a task with default priority and no optional fields
    pub fn new(list_id: Uuid, title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            due_date: None,
            priority: Priority::default(),
            list_id,
        }
    }

    /// Apply validated changes, leaving the owning list untouched
    pub fn apply(&mut self, changes: &TaskChanges) {
        if let Some(title) = &changes.title {
            self.title = title.clone();
        }
        if let Some(description) = &changes.description {
            self.description = description.clone();
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
    }
}

/// Request to create a task on a list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_due_date")]
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Option<Priority>,
    pub list_id: Uuid,
}

impl CreateTaskRequest {
    /// Build the task this request describes, after validating its title
    pub fn into_task(self) -> Result<Task, SharedError> {
        let title = validate_title(&self.title)?;
        Ok(Task {
            id: Uuid::new_v4(),
            title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority.unwrap_or_default(),
            list_id: self.list_id,
        })
    }
}

/// Partial update of a task, optionally moving it to another list
///
/// Absent fields are left unchanged. `description` and `dueDate` accept an
/// explicit `null` to clear the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable_due_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<Uuid>,
}

impl UpdateTaskRequest {
    /// Validate the request into the changes the store applies
    pub fn into_changes(self) -> Result<TaskChanges, SharedError> {
        let title = self.title.as_deref().map(validate_title).transpose()?;
        Ok(TaskChanges {
            title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            list_id: self.list_id,
        })
    }
}

/// Validated task changes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub priority: Option<Priority>,
    /// Destination list; a move happens only when it differs from the current one
    pub list_id: Option<Uuid>,
}

impl TaskChanges {
    /// Changes that only move the task
    pub fn move_to(list_id: Uuid) -> Self {
        Self {
            list_id: Some(list_id),
            ..Self::default()
        }
    }
}

/// Distinguishes a present `null` from an absent field
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Reads an optional due date in any format `parse_due_date` accepts
fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_due_date(&raw).map_err(|e| de::Error::custom(e.message())))
        .transpose()
}

fn deserialize_nullable_due_date<'de, D>(
    deserializer: D,
) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_due_date(deserializer).map(Some)
}
