//! Domain identifiers (strongly-typed IDs).
//!
//! 永続化されている id は不透明な文字列トークンです（画面側で生成）。
//! `Id<T>` は Phantom type パターンで TaskId / TaskListId などを区別しつつ、
//! JSON 上はただの文字列として読み書きします（`#[serde(transparent)]`）。
//!
//! ## 注意
//! - 一意性はどこでも検証しません。衝突しない id を作るのは呼び出し側の責任です。
//! - TaskItemId は親 TaskList の中でのみ一意です。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// IdMarker は各 ID 型のマーカー trait
///
/// `Id<T>` の derive が `T` に同じ trait を要求するので、supertrait にしておく。
pub trait IdMarker:
    fmt::Debug + Clone + Copy + PartialEq + Eq + Hash + PartialOrd + Ord + Send + Sync + 'static
{
    /// ログ出力用のエンティティ名（例: "task", "task_list"）
    fn entity() -> &'static str;
}

/// ジェネリック ID 型
///
/// ```ignore
/// let task_id = TaskId::new("a");
/// let list_id = TaskListId::new("a");
/// // 同じ文字列でも型が違うので混同できない
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    token: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn into_string(self) -> String {
        self.token
    }
}

impl<T: IdMarker> From<&str> for Id<T> {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl<T: IdMarker> From<String> for Id<T> {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

// ========================================
// マーカー型の定義
// ========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Task {}

impl IdMarker for Task {
    fn entity() -> &'static str {
        "task"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskList {}

impl IdMarker for TaskList {
    fn entity() -> &'static str {
        "task_list"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskItem {}

impl IdMarker for TaskItem {
    fn entity() -> &'static str {
        "task_item"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Partner {}

impl IdMarker for Partner {
    fn entity() -> &'static str {
        "partner"
    }
}

/// Identifier of a flat Task.
pub type TaskId = Id<Task>;

/// Identifier of a TaskList (grouped variant).
pub type TaskListId = Id<TaskList>;

/// Identifier of a TaskItem, unique only inside its parent list.
pub type TaskItemId = Id<TaskItem>;

/// Identifier of the Partner record.
pub type PartnerId = Id<Partner>;
