//! Grouped variant: a named list that embeds its own items (`@task_lists`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{TaskItemId, TaskListId};
use super::record::{Extra, iso_timestamp};

/// One entry inside a TaskList.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub id: TaskItemId,
    pub content: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten, default)]
    pub extra: Extra,
}

impl TaskItem {
    pub fn new(id: TaskItemId, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            content: content.into(),
            completed: false,
            created_at: Some(iso_timestamp(now)),
            extra: Extra::new(),
        }
    }

    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// A named group of items.
///
/// Items are owned by the list (composition): removing the list removes
/// them, and their ids only have to be unique within `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    pub id: TaskListId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<TaskItem>,
    #[serde(flatten, default)]
    pub extra: Extra,
}

impl TaskList {
    pub fn new(id: TaskListId, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Some(iso_timestamp(now)),
            items: Vec::new(),
            extra: Extra::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<TaskItem>) -> Self {
        self.items = items;
        self
    }

    pub fn item(&self, item_id: &TaskItemId) -> Option<&TaskItem> {
        self.items.iter().find(|item| &item.id == item_id)
    }
}
