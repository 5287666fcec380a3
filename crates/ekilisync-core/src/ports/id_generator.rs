//! IdGenerator port - ID 生成の抽象化
//!
//! 画面側が新しいレコードを作るときに使う id を生成します。
//! 永続化フォーマット上 id はただの文字列なので、どの生成方式でも読み書きできます。
//!
//! # 実装
//! - **UlidGenerator**: ULID ベース（小文字、時刻でソート可能）

use crate::domain::ids::{Id, IdMarker, PartnerId, TaskId, TaskItemId, TaskListId};
use crate::ports::Clock;
use ulid::Ulid;

/// IdGenerator は衝突しない不透明トークンを生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数タスクから使える）
pub trait IdGenerator: Send + Sync {
    fn next_token(&self) -> String;

    fn task_id(&self) -> TaskId {
        Id::new(self.next_token())
    }

    fn task_list_id(&self) -> TaskListId {
        Id::new(self.next_token())
    }

    fn task_item_id(&self) -> TaskItemId {
        Id::new(self.next_token())
    }

    fn partner_id(&self) -> PartnerId {
        Id::new(self.next_token())
    }
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// Clock を使って現在時刻ベースの ULID を生成します。
/// これにより、テスト時に FixedClock を使ってタイムスタンプ部分を固定できます。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Typed variant of `next_token`, handy when the marker is generic.
    pub fn generate<T: IdMarker>(&self) -> Id<T> {
        Id::new(self.next_token())
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn next_token(&self) -> String {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        ulid.to_string().to_lowercase()
    }
}
