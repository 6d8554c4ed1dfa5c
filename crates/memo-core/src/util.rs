//! Small text and clock helpers shared by the client modules.

/// Trim an optional setting, treating a blank value as unset.
///
/// Environment variables such as `MEMO_API_URL=" "` fall back to defaults.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Whether a memo service base URL uses a scheme the HTTP client can reach.
pub fn is_http_url(value: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.starts_with(*scheme))
}

/// Shorten an error response body so it fits in the error banner.
///
/// Keeps at most 180 characters of the trimmed body.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

/// Milliseconds since the Unix epoch; the basis of offline memo ids.
pub fn unix_millis_now() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Whether a form field counts as empty.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
