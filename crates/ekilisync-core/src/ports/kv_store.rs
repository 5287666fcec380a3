//! KeyValueStore port - 端末ローカルの非同期 KV ストア
//!
//! モバイル版の AsyncStorage に相当します。値は常に JSON 文字列ですが、
//! ストア自身は中身を解釈しません。

use async_trait::async_trait;

use crate::error::StoreError;

/// Opaque async string store.
///
/// # 設計原則
/// - 1 回の `set` / `remove` は単一キーに対してアトミック
/// - `multi_remove` は 1 回のバッチ要求として扱う
/// - ロックやトランザクションは提供しない（last writer wins）
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// `None` when the key has never been written (or was removed).
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    async fn multi_remove(&self, keys: &[&str]) -> Result<(), StoreError>;
}
