use chrono::{DateTime, TimeZone, Utc};

/// Get current Unix timestamp in UTC (milliseconds)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a Unix timestamp (milliseconds) as RFC 3339 in UTC.
///
/// Out-of-range values fall back to the Unix epoch.
pub fn millis_to_rfc3339(millis: i64) -> String {
    let datetime: DateTime<Utc> = Utc
        .timestamp_millis_opt(millis)
        .single()
        .unwrap_or_default();
    datetime.to_rfc3339()
}

/// Format a Unix timestamp (milliseconds) as a short `HH:MM` label.
pub fn millis_to_clock_label(millis: i64) -> String {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_to_rfc3339() {
        // テスト項目: ミリ秒タイムスタンプを RFC 3339 形式に変換できる
        // when (操作):
        let formatted = millis_to_rfc3339(1_700_000_000_000);

        // then (期待する結果):
        assert_eq!(formatted, "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn test_millis_to_clock_label() {
        // テスト項目: ミリ秒タイムスタンプを HH:MM 形式に変換できる
        // when (操作):
        let label = millis_to_clock_label(1_700_000_000_000);

        // then (期待する結果):
        assert_eq!(label, "22:13");
    }

    #[test]
    fn test_now_millis_is_positive() {
        // テスト項目: 現在時刻は正の値
        assert!(now_millis() > 0);
    }
}
