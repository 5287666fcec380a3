use std::sync::Arc;

use chrono::{TimeZone, Utc};
use ekilisync_core::Ekilisync;
use ekilisync_core::domain::{TaskItem, TaskList, iso_timestamp};
use ekilisync_core::impls::FileStore;
use ekilisync_core::ports::{FixedClock, IdGenerator, UlidGenerator};

#[tokio::test]
async fn lists_persist_across_process_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
    let ids = UlidGenerator::new(FixedClock::new(now));

    let list_id = ids.task_list_id();
    let item_id = ids.task_item_id();
    {
        let app = Ekilisync::new(Arc::new(FileStore::new(&path)));
        let list = TaskList::new(list_id.clone(), "Trip", now);
        app.task_lists().add_task_list(list).await.unwrap();
        app.task_lists()
            .add_item(&list_id, TaskItem::new(item_id.clone(), "Passport", now))
            .await
            .unwrap();
    }

    let app = Ekilisync::new(Arc::new(FileStore::new(&path)));
    let lists = app.task_lists().get_task_lists().await;
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].name, "Trip");
    assert_eq!(lists[0].created_at, Some(iso_timestamp(now)));
    assert_eq!(lists[0].item(&item_id).map(|i| i.content.as_str()), Some("Passport"));

    // 値は JSON 文字列のままファイルに入っている
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw["@task_lists"].is_string());
}
