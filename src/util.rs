/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a millisecond timestamp for display (`YYYY-MM-DD HH:MM:SS`, UTC)
///
/// Out-of-range timestamps fall back to the raw number rather than
/// erroring; this only feeds documents, never stored data.
pub fn format_millis(ts: i64) -> String {
    chrono::DateTime::<chrono::Utc>::from_timestamp_millis(ts)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}
