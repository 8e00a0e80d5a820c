/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Human-readable timestamp format used by the dashboard UI and exports.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format a millisecond UTC timestamp for display, e.g. "2025-11-25 11:30".
///
/// Timestamps outside chrono's representable range render as an empty string.
pub fn format_millis(ts: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(ts) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => String::new(),
    }
}

/// Parse a display-format timestamp ("2025-11-25 11:30") as UTC milliseconds.
pub fn parse_display_millis(s: &str) -> Option<i64> {
    chrono::NaiveDateTime::parse_from_str(s, DISPLAY_FORMAT)
        .ok()
        .map(|dt| dt.and_utc().timestamp_millis())
}
