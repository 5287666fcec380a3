//! InMemoryStore - 開発・テスト用の KV ストア
//!
//! # 学習ポイント
//! - tokio の Mutex で HashMap を保護
//! - AtomicBool による障害注入（読み込み失敗・書き込み失敗）

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::ports::KeyValueStore;

/// InMemoryStore は HashMap ベースの KV ストア
///
/// Clone すると同じ中身を共有します。
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the write counter.
    pub async fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn fail_reads(&self, on: bool) {
        self.fail_reads.store(on, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, on: bool) {
        self.fail_writes.store(on, Ordering::SeqCst);
    }

    /// Number of successful `set` / `remove` / `multi_remove` calls.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.lock().await.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn check_read(&self) -> Result<(), StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected read failure".to_string()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected write failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_read()?;
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.check_write()?;
        self.entries.lock().await.insert(key.to_string(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check_write()?;
        self.entries.lock().await.remove(key);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<(), StoreError> {
        self.check_write()?;
        let mut entries = self.entries.lock().await;
        for key in keys {
            entries.remove(*key);
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_roundtrip() {
        let store = InMemoryStore::new();
        store.set("@tasks", "[]".to_string()).await.unwrap();

        assert_eq!(store.get("@tasks").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get("@partner").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let store = InMemoryStore::new();
        store.remove("@partner").await.unwrap();
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn test_multi_remove_is_one_batch() {
        let store = InMemoryStore::new()
            .with_entry("@tasks", "[]")
            .await
            .with_entry("@partner", "{}")
            .await
            .with_entry("other", "x")
            .await;

        store.multi_remove(&["@tasks", "@partner"]).await.unwrap();

        assert_eq!(store.keys().await, vec!["other".to_string()]);
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let store = InMemoryStore::new();
        store.fail_reads(true);
        assert!(matches!(store.get("k").await, Err(StoreError::Unavailable(_))));

        store.fail_reads(false);
        store.fail_writes(true);
        assert!(store.set("k", "v".to_string()).await.is_err());
        assert!(store.multi_remove(&["k"]).await.is_err());
        assert_eq!(store.writes(), 0);
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = InMemoryStore::new();
        let other = store.clone();
        store.set("k", "v".to_string()).await.unwrap();
        assert_eq!(other.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
