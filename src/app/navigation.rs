//! Navigation methods for the App: route changes and page lifecycle.
//!
//! Every page fetches what it shows when it mounts. The dashboard (and the
//! logs page with auto-refresh on) owns a poller for as long as it is
//! mounted; leaving the page drops the poller and stops the timer.

use std::future::Future;

use super::{App, AppMessage, Route};
use crate::poller::{Poller, DASHBOARD_POLL_INTERVAL};

const DASHBOARD_POLLER: &str = "dashboard";
const LOGS_POLLER: &str = "logs";

impl App {
    /// Switch to `route`, unmounting the current page first.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!("Navigate {} -> {}", self.route.path(), route.path());
        self.unmount();
        self.shell.close_menus();
        self.log_search_active = false;
        self.route = route;
        self.mount();
        self.mark_dirty();
    }

    pub(super) fn unmount(&mut self) {
        // Dropping the handles aborts the tasks
        self.pollers.clear();
    }

    pub(super) fn mount(&mut self) {
        match self.route {
            Route::Dashboard => self.start_dashboard_poller(),
            Route::Content | Route::Scheduling => {
                let state = self.context.settings.snapshot();
                if !state.is_loaded() && !state.is_loading {
                    self.spawn_fetch_settings();
                }
            }
            Route::Accounts => self.spawn_fetch_accounts(),
            Route::Analytics => {
                if self.context.dashboard.snapshot().data.is_none() {
                    self.spawn_fetch_dashboard();
                }
                if self.context.accounts.snapshot().accounts.is_none() {
                    self.spawn_fetch_accounts();
                }
            }
            Route::Logs => {
                if self.context.logs.snapshot().auto_refresh {
                    self.start_logs_poller();
                } else {
                    self.spawn_fetch_logs();
                }
            }
            Route::Login => {}
        }
    }

    /// Re-fetch whatever the current page shows.
    pub fn refresh(&mut self) {
        match self.route {
            Route::Dashboard => self.spawn_fetch_dashboard(),
            Route::Analytics => {
                self.spawn_fetch_dashboard();
                self.spawn_fetch_accounts();
            }
            Route::Content | Route::Scheduling => self.spawn_fetch_settings(),
            Route::Accounts => self.spawn_fetch_accounts(),
            Route::Logs => self.spawn_fetch_logs(),
            Route::Login => {}
        }
    }

    /// Flip logs auto-refresh, starting or stopping the poller on the logs page.
    pub fn toggle_log_auto_refresh(&mut self) {
        let enabled = !self.context.logs.snapshot().auto_refresh;
        self.context.logs.set_auto_refresh(enabled);
        tracing::info!("Logs auto-refresh {}", if enabled { "on" } else { "off" });

        if self.route != Route::Logs {
            return;
        }
        if enabled {
            self.start_logs_poller();
        } else {
            self.pollers.retain(|p| p.name() != LOGS_POLLER);
        }
    }

    /// Run `task` in the background and request a redraw when it finishes.
    pub(crate) fn spawn_task<Fut>(&self, task: Fut)
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            task.await;
            let _ = tx.send(AppMessage::StoreUpdated);
        });
    }

    fn spawn_fetch_dashboard(&self) {
        let store = self.context.dashboard.clone();
        self.spawn_task(async move { store.fetch().await });
    }

    fn spawn_fetch_settings(&self) {
        let store = self.context.settings.clone();
        self.spawn_task(async move { store.fetch().await });
    }

    fn spawn_fetch_accounts(&self) {
        let store = self.context.accounts.clone();
        self.spawn_task(async move { store.fetch().await });
    }

    fn spawn_fetch_logs(&self) {
        let store = self.context.logs.clone();
        self.spawn_task(async move { store.fetch().await });
    }

    fn start_dashboard_poller(&mut self) {
        let store = self.context.dashboard.clone();
        let tx = self.message_tx.clone();
        let handle = Poller::spawn(DASHBOARD_POLLER, DASHBOARD_POLL_INTERVAL, move || {
            let store = store.clone();
            let tx = tx.clone();
            async move {
                store.fetch().await;
                let _ = tx.send(AppMessage::StoreUpdated);
            }
        });
        self.pollers.push(handle);
    }

    fn start_logs_poller(&mut self) {
        self.pollers.retain(|p| p.name() != LOGS_POLLER);
        let store = self.context.logs.clone();
        let tx = self.message_tx.clone();
        let interval = store.refresh_interval();
        let handle = Poller::spawn(LOGS_POLLER, interval, move || {
            let store = store.clone();
            let tx = tx.clone();
            async move {
                store.fetch().await;
                let _ = tx.send(AppMessage::StoreUpdated);
            }
        });
        self.pollers.push(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{settle, test_app};
    use super::*;

    #[tokio::test]
    async fn test_dashboard_mount_starts_poller_and_fetches() {
        let mut app = test_app();
        app.start();
        assert_eq!(app.active_pollers(), vec!["dashboard"]);

        settle().await;
        assert!(app.context.dashboard.snapshot().data.is_some());
    }

    #[tokio::test]
    async fn test_leaving_dashboard_stops_poller() {
        let mut app = test_app();
        app.start();
        app.navigate(Route::Accounts);

        assert!(app.active_pollers().is_empty());
        settle().await;
        assert!(app.context.accounts.snapshot().accounts.is_some());
    }

    #[tokio::test]
    async fn test_logs_auto_refresh_poller_follows_toggle() {
        let mut app = test_app();
        app.navigate(Route::Logs);
        assert!(app.active_pollers().is_empty());

        app.toggle_log_auto_refresh();
        assert_eq!(app.active_pollers(), vec!["logs"]);

        app.toggle_log_auto_refresh();
        assert!(app.active_pollers().is_empty());
    }

    #[tokio::test]
    async fn test_auto_refresh_persists_across_visits() {
        let mut app = test_app();
        app.navigate(Route::Logs);
        app.toggle_log_auto_refresh();
        app.navigate(Route::Content);
        assert!(app.active_pollers().is_empty());

        app.navigate(Route::Logs);
        assert_eq!(app.active_pollers(), vec!["logs"]);
    }

    #[tokio::test]
    async fn test_navigate_closes_menus() {
        let mut app = test_app();
        app.shell.toggle_user_menu();
        app.navigate(Route::Analytics);
        assert!(!app.shell.user_menu_open);
        assert_eq!(app.route, Route::Analytics);
    }
}
