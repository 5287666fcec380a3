//! Entity - コレクションに格納できるレコード
//!
//! `Collection<E>` は id での置換・削除しか行わないので、
//! 必要なのは「id を返せること」と serde 対応だけです。

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::ids::{Id, IdMarker};
use super::{Task, TaskItem, TaskList};

pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    type Marker: IdMarker;

    fn id(&self) -> &Id<Self::Marker>;

    /// ログ用の名前（"task", "task_list", ...）
    fn kind() -> &'static str {
        <Self::Marker as IdMarker>::entity()
    }
}

impl Entity for Task {
    type Marker = super::ids::Task;

    fn id(&self) -> &Id<Self::Marker> {
        &self.id
    }
}

impl Entity for TaskList {
    type Marker = super::ids::TaskList;

    fn id(&self) -> &Id<Self::Marker> {
        &self.id
    }
}

impl Entity for TaskItem {
    type Marker = super::ids::TaskItem;

    fn id(&self) -> &Id<Self::Marker> {
        &self.id
    }
}
