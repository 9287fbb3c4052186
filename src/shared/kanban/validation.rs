//! Input validation shared by list and task requests.

use chrono::{DateTime, NaiveDate, Utc};

use crate::shared::SharedError;

/// Maximum accepted title length, in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Validate a list or task title and return it trimmed
pub fn validate_title(title: &str) -> Result<String, SharedError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(SharedError::validation("title", "Title is required"));
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(SharedError::validation(
            "title",
            format!("Title must be at most {} characters", MAX_TITLE_LENGTH),
        ));
    }
    Ok(trimmed.to_string())
}

/// Parse a due date given as RFC 3339 or as a plain `YYYY-MM-DD` day
///
/// A plain day is taken as midnight UTC.
pub fn parse_due_date(value: &str) -> Result<DateTime<Utc>, SharedError> {
    let value = value.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(at.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| {
            SharedError::validation(
                "dueDate",
                format!("Invalid due date '{}': expected RFC 3339 or YYYY-MM-DD", value),
            )
        })
}
