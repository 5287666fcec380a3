//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryStore**: テスト・開発用の KV ストア（障害注入つき）
//! - **FileStore**: キー空間全体を 1 つの JSON ファイルに保存する KV ストア（CLI 用）

pub mod file_store;
pub mod inmem_store;

pub use self::file_store::FileStore;
pub use self::inmem_store::InMemoryStore;
