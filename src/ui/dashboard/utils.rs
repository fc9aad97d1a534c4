//! Dashboard utility functions
//!
//! String formatting helpers shared by the row builders and the detail
//! panel.

use std::collections::BTreeMap;

/// Returns the first 12 characters of an identifier.
pub fn short_id(id: &str) -> String {
    if id.chars().count() > 12 {
        id.chars().take(12).collect()
    } else {
        id.to_string()
    }
}

/// Strips a leading `sha256:` scheme prefix from an identifier.
pub fn strip_sha256(id: &str) -> &str {
    id.strip_prefix("sha256:").unwrap_or(id)
}

/// Trims a string to at most `n` characters, ending in `...` when cut.
///
/// Limits of 3 or less are not applied; the input is returned unchanged.
pub fn trim_to(s: &str, n: usize) -> String {
    if n <= 3 || s.chars().count() <= n {
        return s.to_string();
    }
    let prefix: String = s.chars().take(n - 3).collect();
    format!("{}...", prefix)
}

/// Joins a map as `k=v` pairs, comma separated; returns `-` if empty.
pub fn join_kv(map: &BTreeMap<String, String>) -> String {
    if map.is_empty() {
        return "-".to_string();
    }
    map.iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders a byte count as megabytes with one decimal, base-1024.
pub fn format_size_mb(bytes: i64) -> String {
    format!("{:.1}MB", bytes as f64 / 1024.0 / 1024.0)
}
