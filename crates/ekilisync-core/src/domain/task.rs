//! Flat task record (`@tasks`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::TaskId;
use super::record::{Extra, iso_timestamp};

/// A single to-do entry.
///
/// Design:
/// - The collection under `@tasks` is the only owner; nothing references a Task.
/// - Timestamps and `due_date` are kept as the raw strings that were stored.
/// - Keys this struct does not know about live in `extra` and are written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(flatten, default)]
    pub extra: Extra,
}

impl Task {
    /// A fresh, not yet completed task stamped with `now`.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let stamp = iso_timestamp(now);
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: Some(stamp.clone()),
            updated_at: Some(stamp),
            due_date: None,
            extra: Extra::new(),
        }
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Copy with `completed` flipped. Timestamps are left alone.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}
