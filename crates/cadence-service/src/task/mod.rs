//! Task records and the scheduling rules applied to them.

mod schedule;

pub use schedule::{Completion, complete_task, next_date_for, normalize_task, validate_update};

use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;

/// A scheduled task.
///
/// Every field is kept as text the way clients send it: `date` is a
/// `YYYYMMDD` date and `repeat` holds rule text, blank for one-off tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub repeat: String,
}

impl Task {
    /// Whether the task carries a repeat rule.
    #[must_use]
    pub fn is_recurring(&self) -> bool {
        !self.repeat.trim().is_empty()
    }

    /// ## Summary
    /// Reads a single task from JSON.
    ///
    /// ## Errors
    /// Returns `ServiceError::SerializationError` for malformed JSON.
    pub fn from_json(text: &str) -> ServiceResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// ## Summary
    /// Reads a JSON array of tasks.
    ///
    /// ## Errors
    /// Returns `ServiceError::SerializationError` for malformed JSON.
    pub fn list_from_json(text: &str) -> ServiceResult<Vec<Self>> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests;
