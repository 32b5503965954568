//! Formatting helpers shared by the pages.

use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthStr;

/// Spinner animation frames
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the given tick count.
pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick / 4 % SPINNER_FRAMES.len() as u64) as usize]
}

/// Group digits in thousands: `1247` -> `"1,247"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Signed change with an explicit plus: `3` -> `"+3"`.
pub fn format_change(change: i32) -> String {
    if change > 0 {
        format!("+{}", change)
    } else {
        change.to_string()
    }
}

/// Coarse age of `timestamp` relative to `now`, e.g. `"5 min ago"`.
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();
    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{} min ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{} h ago", seconds / 3600)
    } else {
        format!("{} d ago", seconds / 86_400)
    }
}

/// Truncate a string to `max_width` display columns, adding `...`.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1247), "1,247");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(3), "+3");
        assert_eq!(format_change(0), "0");
        assert_eq!(format_change(-2), "-2");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc::now();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5 min ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3 h ago");
        assert_eq!(relative_time(now - Duration::days(2), now), "2 d ago");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a longer message", 10), "a longe...");
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner(4), SPINNER_FRAMES[1]);
        assert_eq!(spinner(40), SPINNER_FRAMES[0]);
    }
}
