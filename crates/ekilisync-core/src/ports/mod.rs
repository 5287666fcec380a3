//! Ports - 抽象化レイヤー
//!
//! リポジトリが依存する外部機能をここで trait として定義します。
//! 実装（InMemory / File）は `impls` にあります。
//!
//! # 設計原則
//! - ストアは「文字列キー → 文字列値」の不透明な非同期 KV として扱う
//! - 時刻と id 生成は差し替え可能にして、テストを決定的にする

pub mod clock;
pub mod id_generator;
pub mod kv_store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::kv_store::KeyValueStore;
