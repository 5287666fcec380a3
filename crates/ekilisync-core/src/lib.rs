//! ekilisync-core
//!
//! Local persistence for the Ekilisync to-do app.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, Task, TaskList/TaskItem, Partner, filter）
//! - **ports**: 抽象化レイヤー（KeyValueStore, Clock, IdGenerator）
//! - **impls**: 実装（InMemoryStore, FileStore）
//! - **repository**: コレクションの読み書き（TaskRepository, TaskListRepository, PartnerRepository）
//! - **settings**: 設定（defaults → file → env）
//! - **observability**: 完了数などの集計
//! - **error**: エラー型

pub mod domain;
pub mod error;
pub mod impls;
pub mod observability;
pub mod ports;
pub mod repository;
pub mod settings;

pub use error::{EkiliError, Result, StoreError};
pub use repository::{Ekilisync, PartnerRepository, TaskListRepository, TaskRepository};
