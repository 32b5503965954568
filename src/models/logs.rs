//! System log entries, the error summary and log filtering.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "info" => Some(LogLevel::Info),
            "warning" => Some(LogLevel::Warning),
            "error" => Some(LogLevel::Error),
            "critical" => Some(LogLevel::Critical),
            _ => None,
        }
    }
}

/// Kind of follow-up an entry suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogActionKind {
    Retry,
    ViewDetails,
    Ignore,
    ViewPost,
    ViewAnalytics,
}

/// A suggested follow-up shown next to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogAction {
    pub label: String,
    pub action: LogActionKind,
}

impl LogAction {
    pub fn new(label: &str, action: LogActionKind) -> Self {
        Self {
            label: label.to_string(),
            action,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    /// Originating subsystem, e.g. `Content Generation`
    pub module: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub actions: Option<Vec<LogAction>>,
}

/// One row of the "top errors" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCount {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u32,
}

/// Counts per severity plus the most frequent error kinds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorSummary {
    pub critical: u32,
    pub errors: u32,
    pub warnings: u32,
    pub info: u32,
    pub top_errors: Vec<ErrorCount>,
}

/// Severity filter values, cycled in this order.
pub const SEVERITY_FILTERS: [&str; 5] = ["all", "info", "warning", "error", "critical"];

/// Time-range filter values, cycled in this order.
pub const TIME_RANGES: [&str; 5] = ["1h", "24h", "7d", "30d", "all"];

/// Active log view filters. `"all"` disables a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFilters {
    /// One of [`TIME_RANGES`]
    pub time_range: String,
    pub severity: String,
    pub module: String,
    /// Case-insensitive substring of message or details
    pub search: String,
}

impl Default for LogFilters {
    fn default() -> Self {
        Self {
            time_range: "24h".to_string(),
            severity: "all".to_string(),
            module: "all".to_string(),
            search: String::new(),
        }
    }
}

/// Partial update of [`LogFilters`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogFiltersPatch {
    pub time_range: Option<String>,
    pub severity: Option<String>,
    pub module: Option<String>,
    pub search: Option<String>,
}

fn parse_time_range(value: &str) -> Option<Duration> {
    match value {
        "1h" => Some(Duration::hours(1)),
        "24h" => Some(Duration::hours(24)),
        "7d" => Some(Duration::days(7)),
        "30d" => Some(Duration::days(30)),
        _ => None,
    }
}

impl LogFilters {
    /// Shallow-merge `patch` into `self`.
    pub fn apply(&mut self, patch: LogFiltersPatch) {
        if let Some(time_range) = patch.time_range {
            self.time_range = time_range;
        }
        if let Some(severity) = patch.severity {
            self.severity = severity;
        }
        if let Some(module) = patch.module {
            self.module = module;
        }
        if let Some(search) = patch.search {
            self.search = search;
        }
    }

    /// The severity filter after the current one, wrapping around.
    pub fn next_severity(&self) -> &'static str {
        let position = SEVERITY_FILTERS
            .iter()
            .position(|s| *s == self.severity)
            .unwrap_or(0);
        SEVERITY_FILTERS[(position + 1) % SEVERITY_FILTERS.len()]
    }

    /// The time range after the current one, wrapping around.
    pub fn next_time_range(&self) -> &'static str {
        let position = TIME_RANGES
            .iter()
            .position(|r| *r == self.time_range)
            .unwrap_or(0);
        TIME_RANGES[(position + 1) % TIME_RANGES.len()]
    }

    /// Whether `entry` passes every active filter at time `now`.
    ///
    /// Unknown severity or time-range values do not filter anything.
    pub fn matches(&self, entry: &LogEntry, now: DateTime<Utc>) -> bool {
        if let Some(level) = LogLevel::parse(&self.severity) {
            if entry.level != level {
                return false;
            }
        }

        if self.module != "all" && !entry.module.eq_ignore_ascii_case(&self.module) {
            return false;
        }

        if let Some(window) = parse_time_range(&self.time_range) {
            if entry.timestamp < now - window {
                return false;
            }
        }

        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let in_message = entry.message.to_lowercase().contains(&needle);
            let in_details = entry
                .details
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !in_message && !in_details {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: LogLevel, module: &str, message: &str, age_minutes: i64) -> LogEntry {
        LogEntry {
            id: "1".to_string(),
            timestamp: Utc::now() - Duration::minutes(age_minutes),
            level,
            module: module.to_string(),
            message: message.to_string(),
            details: Some("Module: openai_service.py:127".to_string()),
            actions: None,
        }
    }

    #[test]
    fn test_default_filters_pass_recent_entries() {
        let filters = LogFilters::default();
        let e = entry(LogLevel::Info, "Social Posting", "posted", 2);
        assert!(filters.matches(&e, Utc::now()));
    }

    #[test]
    fn test_time_range_cycles() {
        let mut filters = LogFilters::default();
        assert_eq!(filters.next_time_range(), "7d");
        filters.time_range = "all".to_string();
        assert_eq!(filters.next_time_range(), "1h");
    }

    #[test]
    fn test_severity_filter() {
        let mut filters = LogFilters::default();
        filters.apply(LogFiltersPatch {
            severity: Some("error".to_string()),
            ..Default::default()
        });

        let now = Utc::now();
        assert!(filters.matches(&entry(LogLevel::Error, "x", "m", 0), now));
        assert!(!filters.matches(&entry(LogLevel::Info, "x", "m", 0), now));
    }

    #[test]
    fn test_time_range_excludes_old_entries() {
        let filters = LogFilters::default();
        let old = entry(LogLevel::Info, "x", "m", 60 * 25);
        assert!(!filters.matches(&old, Utc::now()));
    }

    #[test]
    fn test_search_checks_details() {
        let mut filters = LogFilters::default();
        filters.apply(LogFiltersPatch {
            search: Some("OPENAI".to_string()),
            ..Default::default()
        });
        assert!(filters.matches(&entry(LogLevel::Error, "x", "rate limit", 0), Utc::now()));
    }

    #[test]
    fn test_apply_is_shallow() {
        let mut filters = LogFilters::default();
        filters.apply(LogFiltersPatch {
            module: Some("Social Posting".to_string()),
            ..Default::default()
        });
        assert_eq!(filters.module, "Social Posting");
        assert_eq!(filters.time_range, "24h");
        assert_eq!(filters.severity, "all");
    }

    #[test]
    fn test_next_severity_wraps() {
        let mut filters = LogFilters::default();
        assert_eq!(filters.next_severity(), "info");
        filters.severity = "critical".to_string();
        assert_eq!(filters.next_severity(), "all");
    }

    #[test]
    fn test_action_kind_wire_names() {
        let json = serde_json::to_string(&LogActionKind::ViewDetails).unwrap();
        assert_eq!(json, r#""view_details""#);
    }
}
