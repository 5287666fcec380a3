//! Repository - 3 つの独立したコレクションへの型付きアクセス
//!
//! | key           | 値                          | 型                     |
//! |---------------|-----------------------------|------------------------|
//! | `@tasks`      | JSON 配列                   | `Vec<Task>`            |
//! | `@task_lists` | JSON 配列（item は埋め込み）| `Vec<TaskList>`        |
//! | `@partner`    | JSON オブジェクト / なし    | `Option<Partner>`      |
//!
//! # エラー方針
//! - 読み込み（`get_*`）は失敗をログに出して空 / `None` を返す。初回起動時など
//!   キーが無い状態で画面が落ちないようにするため。
//! - 更新系はログに出したうえで `Err` を返す。呼び出し側が利用者に通知する。
//! - 更新系の内部読み込みは厳密（`try_get_*`）。壊れたコレクションを
//!   1 件だけの配列で上書きしない。
//!
//! # 並行性
//! ロックはありません。同じコレクションへの更新が同時に走ると、
//! 両方が古い配列を読んで後から書いた方が勝ちます（lost update）。

mod collection;
pub mod partner;
pub mod task_lists;
pub mod tasks;

use std::sync::Arc;

use crate::error::{EkiliError, Result};
use crate::ports::KeyValueStore;

pub use self::partner::PartnerRepository;
pub use self::task_lists::TaskListRepository;
pub use self::tasks::TaskRepository;

pub const TASKS_KEY: &str = "@tasks";
pub const TASK_LISTS_KEY: &str = "@task_lists";
pub const PARTNER_KEY: &str = "@partner";

/// Logs a failed write and hands the error back to the caller.
pub(crate) fn log_failure(action: &'static str) -> impl FnOnce(&EkiliError) {
    move |e| tracing::error!(action, key = e.key(), error = ?e, "repository write failed")
}

/// Entry point: one store, three repositories.
///
/// ```ignore
/// let app = Ekilisync::new(Arc::new(InMemoryStore::new()));
/// app.tasks().add_task(task).await?;
/// let tasks = app.tasks().get_tasks().await;
/// ```
#[derive(Clone)]
pub struct Ekilisync {
    store: Arc<dyn KeyValueStore>,
}

impl Ekilisync {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    pub fn tasks(&self) -> TaskRepository {
        TaskRepository::new(self.store.clone())
    }

    pub fn task_lists(&self) -> TaskListRepository {
        TaskListRepository::new(self.store.clone())
    }

    pub fn partner(&self) -> PartnerRepository {
        PartnerRepository::new(self.store.clone())
    }

    /// Removes every collection key and the partner in a single batch.
    pub async fn clear_all_data(&self) -> Result<()> {
        let keys = [TASKS_KEY, TASK_LISTS_KEY, PARTNER_KEY];
        self.store
            .multi_remove(&keys)
            .await
            .map_err(|e| EkiliError::store(&keys.join(","), e))
            .inspect_err(log_failure("clear all data"))?;
        tracing::info!(?keys, "all data cleared");
        Ok(())
    }
}
