use serde::{Deserialize, Serialize};

use crate::domain::{Completable, TaskList};

/// Completion summary shown in the header (`completed / total`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

impl TaskCounts {
    pub fn from_entries<T: Completable>(entries: &[T]) -> Self {
        let completed = entries.iter().filter(|e| e.is_completed()).count();
        Self {
            total: entries.len(),
            completed,
            active: entries.len() - completed,
        }
    }

    pub fn for_list(list: &TaskList) -> Self {
        Self::from_entries(&list.items)
    }

    /// `completed / total`, 0.0 for an empty collection.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}
