//! Logs container: entries, error summary, filters and auto-refresh.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};

use super::{read, write, InFlight};
use crate::models::{ErrorSummary, LogEntry, LogFilters, LogFiltersPatch};
use crate::sources::LogsSource;

/// Auto-refresh period while enabled.
pub const LOGS_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogsState {
    /// `None` until the first successful fetch
    pub logs: Option<Vec<LogEntry>>,
    pub summary: Option<ErrorSummary>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub auto_refresh: bool,
    pub filters: LogFilters,
}

impl LogsState {
    /// Entries passing the current filters at `now`.
    pub fn visible_logs(&self, now: DateTime<Utc>) -> Vec<LogEntry> {
        self.logs
            .iter()
            .flatten()
            .filter(|entry| self.filters.matches(entry, now))
            .cloned()
            .collect()
    }
}

#[derive(Clone)]
pub struct LogsStore {
    state: Arc<RwLock<LogsState>>,
    source: Arc<dyn LogsSource>,
    in_flight: InFlight,
}

impl LogsStore {
    pub fn new(source: Arc<dyn LogsSource>) -> Self {
        Self {
            state: Arc::new(RwLock::new(LogsState::default())),
            source,
            in_flight: InFlight::default(),
        }
    }

    pub fn snapshot(&self) -> LogsState {
        read(&self.state).clone()
    }

    pub fn refresh_interval(&self) -> Duration {
        LOGS_REFRESH_INTERVAL
    }

    pub async fn fetch(&self) {
        let _guard = self.in_flight.begin("logs");
        {
            let mut state = write(&self.state);
            state.is_loading = true;
            state.error = None;
        }

        let result = self.source.load_logs().await;

        let mut state = write(&self.state);
        match result {
            Ok(batch) => {
                tracing::info!("Logs fetched ({} entries)", batch.logs.len());
                state.logs = Some(batch.logs);
                state.summary = Some(batch.summary);
            }
            Err(e) => {
                tracing::warn!("Logs fetch failed: {}", e);
                state.error = Some(e.to_string());
            }
        }
        state.is_loading = false;
    }

    pub fn set_auto_refresh(&self, enabled: bool) {
        write(&self.state).auto_refresh = enabled;
    }

    /// Shallow-merge new filter values.
    pub fn update_filters(&self, patch: LogFiltersPatch) {
        write(&self.state).filters.apply(patch);
    }

    pub fn visible_logs(&self, now: DateTime<Utc>) -> Vec<LogEntry> {
        read(&self.state).visible_logs(now)
    }
}
