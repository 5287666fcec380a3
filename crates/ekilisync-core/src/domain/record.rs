//! Record plumbing shared by every stored entity.
//!
//! - タイムスタンプは保存されている文字列のまま保持する（ISO-8601 の表記ゆれを壊さない）
//! - 構造体に無いフィールドは `Extra` に退避し、書き戻しで失わない

use chrono::{DateTime, SecondsFormat, Utc};

/// Unknown JSON keys of a record, written back as they were read.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// `2024-01-01T12:00:00.000Z`, the same shape the mobile app writes.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_with_millis_and_z() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 8, 15, 30).unwrap();
        assert_eq!(iso_timestamp(at), "2024-03-05T08:15:30.000Z");
    }
}
