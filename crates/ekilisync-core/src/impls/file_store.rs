//! FileStore - キー空間全体を 1 つの JSON ファイルに保存する KV ストア
//!
//! ファイルの形式は `{ "@tasks": "<JSON 文字列>", "@partner": "..." }`。
//! 値は AsyncStorage と同じく JSON 文字列のまま保持します。
//!
//! # 実装詳細
//! - 呼び出しのたびにファイル全体を読み込む（キャッシュなし）
//! - 更新は一時ファイルに書いてから rename で置き換える
//! - 同一プロセス内の読み書きは Mutex で直列化（別プロセスとの競合は未対策）

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::ports::KeyValueStore;

type Entries = BTreeMap<String, String>;

pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<file name>.tmp` next to the data file, never the data file itself.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("ekilisync"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn load(&self) -> Result<Entries, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(Entries::new()),
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| StoreError::Corrupt(format!("{}: {e}", self.path.display()))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, entries: &Entries) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let body = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::Corrupt(format!("encode failed: {e}")))?;

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn mutate<F>(&self, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Entries) + Send,
    {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        f(&mut entries);
        self.persist(&entries).await
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let key = key.to_string();
        self.mutate(move |entries| {
            entries.insert(key, value);
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.mutate(|entries| {
            entries.remove(key);
        })
        .await
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<(), StoreError> {
        self.mutate(|entries| {
            for key in keys {
                entries.remove(*key);
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));

        assert_eq!(store.get("@tasks").await.unwrap(), None);
    }

    #[tokio::test]
    async fn values_survive_a_new_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data.json");

        FileStore::new(&path)
            .set("@tasks", r#"[{"id":"a"}]"#.to_string())
            .await
            .unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get("@tasks").await.unwrap().as_deref(),
            Some(r#"[{"id":"a"}]"#)
        );
        assert!(!dir.path().join("nested").join("data.json.tmp").exists());
    }

    #[tokio::test]
    async fn multi_remove_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data.json"));
        store.set("@tasks", "[]".to_string()).await.unwrap();
        store.set("@partner", "{}".to_string()).await.unwrap();
        store.set("@task_lists", "[]".to_string()).await.unwrap();

        store.multi_remove(&["@tasks", "@partner"]).await.unwrap();

        assert_eq!(store.get("@tasks").await.unwrap(), None);
        assert_eq!(store.get("@partner").await.unwrap(), None);
        assert_eq!(store.get("@task_lists").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn garbage_file_is_reported_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get("@tasks").await, Err(StoreError::Corrupt(_))));
    }

    #[tokio::test]
    async fn data_file_with_tmp_extension_is_not_its_own_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.tmp");
        let store = FileStore::new(&path);

        assert_eq!(store.temp_path(), dir.path().join("data.tmp.tmp"));

        store.set("@tasks", "[]".to_string()).await.unwrap();
        store.set("@partner", "{}".to_string()).await.unwrap();

        assert!(!dir.path().join("data.tmp.tmp").exists());
        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("@tasks").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(reopened.get("@partner").await.unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn temp_path_keeps_every_extension() {
        let store = FileStore::new("/var/lib/ekilisync/data.backup.json");
        assert_eq!(
            store.temp_path(),
            PathBuf::from("/var/lib/ekilisync/data.backup.json.tmp")
        );
    }
}
