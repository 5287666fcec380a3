//! Domain model (ids, records, filters).
//!
//! - **ids**: 型付きの不透明 id（TaskId, TaskListId, TaskItemId, PartnerId）
//! - **task**: フラットな Task（`@tasks`）
//! - **task_list**: TaskList / TaskItem（`@task_lists`、item は list に埋め込み）
//! - **partner**: Partner シングルトン（`@partner`）
//! - **record**: タイムスタンプ文字列と未知フィールドの扱い
//! - **entity**: Collection に格納できるレコードの trait
//! - **filter**: Active / Completed の絞り込み

pub mod entity;
pub mod filter;
pub mod ids;
pub mod partner;
pub mod record;
pub mod task;
pub mod task_list;

pub use entity::Entity;
pub use filter::{Completable, StatusFilter};
pub use ids::{Id, IdMarker, PartnerId, TaskId, TaskItemId, TaskListId};
pub use partner::Partner;
pub use record::{Extra, iso_timestamp};
pub use task::Task;
pub use task_list::{TaskItem, TaskList};
