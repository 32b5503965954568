//! Dashboard container: counters, today's metrics, health and queue.

use std::sync::{Arc, RwLock};

use super::{read, write, InFlight};
use crate::models::{DashboardMetrics, DashboardSnapshot};
use crate::sources::DashboardSource;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// `None` until the first successful fetch
    pub data: Option<DashboardSnapshot>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct DashboardStore {
    state: Arc<RwLock<DashboardState>>,
    source: Arc<dyn DashboardSource>,
    in_flight: InFlight,
}

impl DashboardStore {
    pub fn new(source: Arc<dyn DashboardSource>) -> Self {
        Self {
            state: Arc::new(RwLock::new(DashboardState::default())),
            source,
            in_flight: InFlight::default(),
        }
    }

    /// A copy of the current state for rendering.
    pub fn snapshot(&self) -> DashboardState {
        read(&self.state).clone()
    }

    pub async fn fetch(&self) {
        let _guard = self.in_flight.begin("dashboard");
        {
            let mut state = write(&self.state);
            state.is_loading = true;
            state.error = None;
        }

        let result = self.source.load_dashboard().await;

        let mut state = write(&self.state);
        match result {
            Ok(snapshot) => {
                tracing::info!(
                    "Dashboard fetched ({} activity items)",
                    snapshot.activity.len()
                );
                state.data = Some(snapshot);
            }
            Err(e) => {
                tracing::warn!("Dashboard fetch failed: {}", e);
                state.error = Some(e.to_string());
            }
        }
        state.is_loading = false;
    }

    /// Replace today's metrics wholesale.
    pub fn update_metrics(&self, metrics: DashboardMetrics) {
        let mut state = write(&self.state);
        state.data.get_or_insert_with(DashboardSnapshot::default).metrics = Some(metrics);
    }
}
