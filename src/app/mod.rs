//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Route`] - Which page is currently displayed
//! - [`ShellState`] - Sidebar and menu visibility
//! - [`AppContext`] - Config, API service and stores
//! - [`AppMessage`] - Messages for async communication

mod context;
pub mod forms;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use context::AppContext;
pub use messages::AppMessage;
pub use types::{Route, ShellState};

use tokio::sync::mpsc;

use crate::poller::PollHandle;

/// Ticks between redraws while idle (16ms ticks).
const IDLE_REDRAW_TICKS: u64 = 6;

/// Main application state
pub struct App {
    /// Page on screen
    pub route: Route,
    pub shell: ShellState,
    pub context: AppContext,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub should_quit: bool,
    /// Set when visible state changed since the last draw
    pub needs_redraw: bool,
    /// Incremented every event-loop tick; drives the spinner
    pub tick_count: u64,
    /// Selected row on the content settings page
    pub content_cursor: usize,
    /// Selected row on the scheduling page
    pub schedule_cursor: usize,
    /// Selected account on the accounts page
    pub accounts_cursor: usize,
    /// Token typed on the login page
    pub login_input: String,
    /// Whether keys edit the logs search box
    pub log_search_active: bool,
    /// One-line feedback shown in the footer
    pub status_message: Option<String>,
    /// Recurring tasks owned by the mounted page
    pollers: Vec<PollHandle>,
}

impl App {
    /// Create the app on the dashboard route without mounting it.
    ///
    /// Call [`App::start`] from inside the runtime to mount the first page.
    pub fn new(
        context: AppContext,
        message_tx: mpsc::UnboundedSender<AppMessage>,
        message_rx: mpsc::UnboundedReceiver<AppMessage>,
    ) -> Self {
        Self {
            route: Route::Dashboard,
            shell: ShellState::default(),
            context,
            message_tx,
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            content_cursor: 0,
            schedule_cursor: 0,
            accounts_cursor: 0,
            login_input: String::new(),
            log_search_active: false,
            status_message: None,
            pollers: Vec::new(),
        }
    }

    /// Mount the current route.
    pub fn start(&mut self) {
        tracing::info!("Starting on {}", self.route.path());
        self.mount();
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the tick counter; redraw periodically so spinners and
    /// timed status changes show up.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.tick_count % IDLE_REDRAW_TICKS == 0 {
            self.mark_dirty();
        }
    }

    /// Names of the running page pollers.
    pub fn active_pollers(&self) -> Vec<&'static str> {
        self.pollers
            .iter()
            .filter(|p| p.is_running())
            .map(|p| p.name())
            .collect()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.mark_dirty();
    }

    pub fn quit(&mut self) {
        self.unmount();
        self.should_quit = true;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::adapters::{InMemoryTokenStore, MockHttpClient, RecordingNavigator};
    use crate::config::AdminConfig;
    use crate::sources::MockBackend;

    /// App over fixture data with no artificial delays.
    pub fn test_app() -> App {
        let context = AppContext::new(
            AdminConfig::default(),
            Arc::new(MockHttpClient::new()),
            Arc::new(InMemoryTokenStore::new()),
            Arc::new(RecordingNavigator::new()),
            MockBackend::new()
                .with_load_delay(Duration::ZERO)
                .with_save_delay(Duration::ZERO),
        );
        let (tx, rx) = mpsc::unbounded_channel();
        App::new(context, tx, rx)
    }

    /// Let spawned tasks run to completion.
    pub async fn settle() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
