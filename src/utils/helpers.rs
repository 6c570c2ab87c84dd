//! Helper functions and utilities
//!
//! Small text helpers shared by the handlers.

/// Escape text for Telegram HTML parse mode
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render a fixed-width bar where `value` is scaled against `max_value`.
/// Halves round to even.
pub fn score_bar(value: i64, max_value: i64, length: usize) -> String {
    let filled = if max_value <= 0 {
        0
    } else {
        (length as f64 * value as f64 / max_value as f64).round_ties_even() as i64
    };
    let filled = filled.clamp(0, length as i64) as usize;

    format!("{}{}", "▮".repeat(filled), "▯".repeat(length - filled))
}

/// Percentage of `value` in `total`, rounded half to even
pub fn percentage(value: i64, total: i64) -> i64 {
    let total = if total <= 0 { 1 } else { total };
    (100.0 * value as f64 / total as f64).round_ties_even() as i64
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
