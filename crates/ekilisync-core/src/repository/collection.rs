//! Collection - 1 キーに保存された JSON 配列の読み書き
//!
//! すべての更新は「全件読み込み → デコード → メモリ上で変更 → エンコード → 全件書き込み」。
//! インデックスもキャッシュもありません。

use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::{Entity, Id};
use crate::error::{EkiliError, Result};
use crate::ports::KeyValueStore;

/// Append, keeping insertion order. Duplicate ids are not checked.
pub(crate) fn push_entry<E: Entity>(entries: &mut Vec<E>, entry: E) {
    entries.push(entry);
}

/// Replace the first entry with the same id in place.
/// Returns `false` (and leaves `entries` untouched) when the id is absent.
pub(crate) fn replace_entry<E: Entity>(entries: &mut [E], entry: E) -> bool {
    match entries.iter_mut().find(|e| e.id() == entry.id()) {
        Some(slot) => {
            *slot = entry;
            true
        }
        None => false,
    }
}

/// Drop every entry with the given id. Returns how many were removed.
pub(crate) fn remove_entries<E: Entity>(entries: &mut Vec<E>, id: &Id<E::Marker>) -> usize {
    let before = entries.len();
    entries.retain(|e| e.id() != id);
    before - entries.len()
}

pub(crate) struct Collection<E> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Clone for Collection<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            key: self.key,
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Collection<E> {
    pub(crate) fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _entity: PhantomData,
        }
    }

    pub(crate) fn key(&self) -> &'static str {
        self.key
    }

    /// Absent key is an empty collection; anything that is not a JSON array
    /// of `E` is a decode error.
    pub(crate) async fn load(&self) -> Result<Vec<E>> {
        let raw = self
            .store
            .get(self.key)
            .await
            .map_err(|e| EkiliError::store(self.key, e))?;

        let entries = match raw {
            None => Vec::new(),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| EkiliError::Decode {
                key: self.key.to_string(),
                source,
            })?,
        };
        tracing::debug!(key = self.key, entity = E::kind(), count = entries.len(), "collection loaded");
        Ok(entries)
    }

    pub(crate) async fn save(&self, entries: &[E]) -> Result<()> {
        let body = serde_json::to_string(entries).map_err(|source| EkiliError::Encode {
            key: self.key.to_string(),
            source,
        })?;
        self.store
            .set(self.key, body)
            .await
            .map_err(|e| EkiliError::store(self.key, e))?;
        tracing::debug!(key = self.key, entity = E::kind(), count = entries.len(), "collection saved");
        Ok(())
    }

    pub(crate) async fn append(&self, entry: E) -> Result<()> {
        let mut entries = self.load().await?;
        push_entry(&mut entries, entry);
        self.save(&entries).await
    }

    /// Nothing is written when the id is absent.
    pub(crate) async fn replace(&self, entry: E) -> Result<bool> {
        let mut entries = self.load().await?;
        let id = entry.id().clone();
        if !replace_entry(&mut entries, entry) {
            tracing::debug!(key = self.key, entity = E::kind(), %id, "replace skipped, id not found");
            return Ok(false);
        }
        self.save(&entries).await?;
        Ok(true)
    }

    /// Always rewrites the collection, even when nothing matched.
    pub(crate) async fn remove(&self, id: &Id<E::Marker>) -> Result<usize> {
        let mut entries = self.load().await?;
        let removed = remove_entries(&mut entries, id);
        self.save(&entries).await?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskItem, TaskItemId};

    fn item(id: &str, content: &str) -> TaskItem {
        TaskItem {
            id: TaskItemId::new(id),
            content: content.to_string(),
            completed: false,
            created_at: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn replace_entry_preserves_position() {
        let mut items = vec![item("1", "a"), item("2", "b"), item("3", "c")];

        assert!(replace_entry(&mut items, item("2", "B")));

        let contents: Vec<&str> = items.iter().map(|i| i.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "B", "c"]);
    }

    #[test]
    fn replace_entry_only_touches_first_duplicate() {
        let mut items = vec![item("1", "a"), item("1", "b")];

        assert!(replace_entry(&mut items, item("1", "x")));
        assert_eq!(items[0].content, "x");
        assert_eq!(items[1].content, "b");
    }

    #[test]
    fn replace_entry_missing_id_is_noop() {
        let mut items = vec![item("1", "a")];
        let before = items.clone();

        assert!(!replace_entry(&mut items, item("9", "z")));
        assert_eq!(items, before);
    }

    #[test]
    fn remove_entries_drops_all_duplicates() {
        let mut items = vec![item("1", "a"), item("2", "b"), item("1", "c")];

        assert_eq!(remove_entries(&mut items, &TaskItemId::new("1")), 2);
        assert_eq!(items, vec![item("2", "b")]);
        assert_eq!(remove_entries(&mut items, &TaskItemId::new("1")), 0);
    }

    #[test]
    fn push_entry_allows_duplicate_ids() {
        let mut items = vec![item("1", "a")];
        push_entry(&mut items, item("1", "a"));
        assert_eq!(items.len(), 2);
    }
}
