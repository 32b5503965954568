//! Page pollers: started on mount, stopped on unmount, never overlapping.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use common::{fixture_app, instant_backend};
use viralforge_admin::app::Route;
use viralforge_admin::error::AdminResult;
use viralforge_admin::fixtures;
use viralforge_admin::models::DashboardSnapshot;
use viralforge_admin::poller::{Poller, DASHBOARD_POLL_INTERVAL};
use viralforge_admin::sources::DashboardSource;
use viralforge_admin::store::{
    AccountsStore, DashboardStore, LogsStore, SettingsStore, LOGS_REFRESH_INTERVAL,
};

/// Dashboard source that counts loads.
#[derive(Default)]
struct CountingSource {
    loads: AtomicUsize,
}

#[async_trait]
impl DashboardSource for CountingSource {
    async fn load_dashboard(&self) -> AdminResult<DashboardSnapshot> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(fixtures::dashboard_snapshot(Utc::now()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_poller_runs_immediately_then_every_interval() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();
    let handle = Poller::spawn("test", Duration::from_secs(10), move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    tokio::time::sleep(Duration::from_secs(25)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 3);
    assert!(handle.is_running());

    drop(handle);
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_slow_runs_do_not_overlap() {
    let active = Arc::new(AtomicUsize::new(0));
    let max_active = Arc::new(AtomicUsize::new(0));
    let (a, m) = (active.clone(), max_active.clone());
    let _handle = Poller::spawn("slow", Duration::from_secs(1), move || {
        let (a, m) = (a.clone(), m.clone());
        async move {
            let now = a.fetch_add(1, Ordering::SeqCst) + 1;
            m.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_secs(3)).await;
            a.fetch_sub(1, Ordering::SeqCst);
        }
    });

    tokio::time::sleep(Duration::from_secs(20)).await;
    assert_eq!(max_active.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_dashboard_polls_while_mounted_only() {
    let source = Arc::new(CountingSource::default());
    let backend = Arc::new(instant_backend());
    let mut app = fixture_app();
    app.context = app.context.clone().with_stores(
        DashboardStore::new(source.clone()),
        SettingsStore::new(backend.clone()),
        AccountsStore::new(backend.clone()),
        LogsStore::new(backend),
    );

    app.start();
    assert_eq!(app.active_pollers(), vec!["dashboard"]);

    tokio::time::sleep(DASHBOARD_POLL_INTERVAL * 2 + Duration::from_secs(1)).await;
    assert_eq!(source.loads.load(Ordering::SeqCst), 3);

    app.navigate(Route::Content);
    assert!(app.active_pollers().is_empty());
    tokio::time::sleep(DASHBOARD_POLL_INTERVAL * 3).await;
    assert_eq!(source.loads.load(Ordering::SeqCst), 3);

    app.navigate(Route::Dashboard);
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(source.loads.load(Ordering::SeqCst), 4);
}

#[tokio::test(start_paused = true)]
async fn test_logs_auto_refresh_toggles_poller() {
    let mut app = fixture_app();
    app.navigate(Route::Logs);
    assert!(app.active_pollers().is_empty());

    app.toggle_log_auto_refresh();
    assert!(app.context.logs.snapshot().auto_refresh);
    assert_eq!(app.active_pollers(), vec!["logs"]);
    assert_eq!(app.context.logs.refresh_interval(), LOGS_REFRESH_INTERVAL);

    app.toggle_log_auto_refresh();
    assert!(app.active_pollers().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_quit_stops_pollers() {
    let mut app = fixture_app();
    app.start();
    assert!(!app.active_pollers().is_empty());
    app.quit();
    assert!(app.should_quit);
    assert!(app.active_pollers().is_empty());
}
