//! Grouped variant under `@task_lists`.
//!
//! Item 操作は親リストを探して埋め込み配列を変更し、最後に
//! `update_task_list` を呼びます。`update_task_list` がコレクション全体を
//! 読み直して書き戻すので、item 1 件の変更でもフル往復になります。

use std::sync::Arc;

use crate::domain::{TaskItem, TaskItemId, TaskList, TaskListId};
use crate::error::Result;
use crate::ports::KeyValueStore;

use super::collection::{Collection, push_entry, remove_entries, replace_entry};
use super::{TASK_LISTS_KEY, log_failure};

#[derive(Clone)]
pub struct TaskListRepository {
    lists: Collection<TaskList>,
}

impl TaskListRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            lists: Collection::new(store, TASK_LISTS_KEY),
        }
    }

    /// Never fails; errors are logged and reported as an empty list.
    pub async fn get_task_lists(&self) -> Vec<TaskList> {
        match self.try_get_task_lists().await {
            Ok(lists) => lists,
            Err(e) => {
                tracing::error!(key = self.lists.key(), error = ?e, "error getting task lists");
                Vec::new()
            }
        }
    }

    pub async fn try_get_task_lists(&self) -> Result<Vec<TaskList>> {
        self.lists.load().await
    }

    pub async fn get_task_list(&self, id: &TaskListId) -> Option<TaskList> {
        self.get_task_lists().await.into_iter().find(|l| &l.id == id)
    }

    /// Appends the list as given, items included.
    pub async fn add_task_list(&self, list: TaskList) -> Result<()> {
        self.lists
            .append(list)
            .await
            .inspect_err(log_failure("add task list"))
    }

    /// Unknown id is a silent no-op.
    pub async fn update_task_list(&self, list: TaskList) -> Result<()> {
        self.lists
            .replace(list)
            .await
            .map(|_| ())
            .inspect_err(log_failure("update task list"))
    }

    /// Deleting a list drops its items with it.
    pub async fn delete_task_list(&self, id: &TaskListId) -> Result<()> {
        self.lists
            .remove(id)
            .await
            .map(|_| ())
            .inspect_err(log_failure("delete task list"))
    }

    pub async fn add_item(&self, list_id: &TaskListId, item: TaskItem) -> Result<()> {
        self.with_list(list_id, "add item", |items| push_entry(items, item))
            .await
    }

    /// Replaces the item with the same id inside the list. Unknown list or
    /// item ids are a no-op.
    pub async fn update_item(&self, list_id: &TaskListId, item: TaskItem) -> Result<()> {
        self.with_list(list_id, "update item", |items| {
            replace_entry(items, item);
        })
        .await
    }

    pub async fn delete_item(&self, list_id: &TaskListId, item_id: &TaskItemId) -> Result<()> {
        self.with_list(list_id, "delete item", |items| {
            remove_entries(items, item_id);
        })
        .await
    }

    /// Loads every list, edits the parent's items, then persists through
    /// `update_task_list`. Does nothing when the parent is missing.
    async fn with_list<F>(&self, list_id: &TaskListId, action: &'static str, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<TaskItem>) + Send,
    {
        let lists = self
            .try_get_task_lists()
            .await
            .inspect_err(log_failure(action))?;

        let Some(mut list) = lists.into_iter().find(|l| &l.id == list_id) else {
            tracing::debug!(action, %list_id, "task list not found, nothing to do");
            return Ok(());
        };

        edit(&mut list.items);
        self.update_task_list(list).await
    }
}
