//! Flat task collection under `@tasks`.

use std::sync::Arc;

use crate::domain::{Task, TaskId};
use crate::error::Result;
use crate::ports::KeyValueStore;

use super::collection::Collection;
use super::{TASKS_KEY, log_failure};

#[derive(Clone)]
pub struct TaskRepository {
    tasks: Collection<Task>,
}

impl TaskRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            tasks: Collection::new(store, TASKS_KEY),
        }
    }

    /// All tasks in insertion order. Never fails: a store or decode error is
    /// logged and reported as an empty list.
    pub async fn get_tasks(&self) -> Vec<Task> {
        match self.try_get_tasks().await {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::error!(key = self.tasks.key(), error = ?e, "error getting tasks");
                Vec::new()
            }
        }
    }

    pub async fn try_get_tasks(&self) -> Result<Vec<Task>> {
        self.tasks.load().await
    }

    /// Appends `task` with `completed` forced to `false`.
    ///
    /// Not idempotent: adding the same id twice stores two entries.
    pub async fn add_task(&self, task: Task) -> Result<()> {
        let task = Task {
            completed: false,
            ..task
        };
        self.tasks
            .append(task)
            .await
            .inspect_err(log_failure("add task"))
    }

    /// Replaces the first task with the same id, keeping its position.
    /// An unknown id is a silent no-op.
    pub async fn update_task(&self, task: Task) -> Result<()> {
        self.tasks
            .replace(task)
            .await
            .map(|_| ())
            .inspect_err(log_failure("update task"))
    }

    /// Removes every task with this id. Unknown ids are a no-op.
    pub async fn delete_task(&self, id: &TaskId) -> Result<()> {
        self.tasks
            .remove(id)
            .await
            .map(|_| ())
            .inspect_err(log_failure("delete task"))
    }
}
