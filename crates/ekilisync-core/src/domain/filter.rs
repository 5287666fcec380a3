//! Status filter used by the list views (Active / Completed tabs).

use serde::{Deserialize, Serialize};

use super::task::Task;
use super::task_list::TaskItem;

/// Anything with a completion flag.
pub trait Completable {
    fn is_completed(&self) -> bool;
}

impl Completable for Task {
    fn is_completed(&self) -> bool {
        self.completed
    }
}

impl Completable for TaskItem {
    fn is_completed(&self) -> bool {
        self.completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    Active,
    Completed,
    All,
}

impl StatusFilter {
    pub fn matches<T: Completable>(self, entry: &T) -> bool {
        match self {
            StatusFilter::Active => !entry.is_completed(),
            StatusFilter::Completed => entry.is_completed(),
            StatusFilter::All => true,
        }
    }

    /// Keeps collection order.
    pub fn apply<'a, T: Completable>(self, entries: &'a [T]) -> Vec<&'a T> {
        entries.iter().filter(|e| self.matches(*e)).collect()
    }
}
