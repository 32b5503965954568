//! Shared helpers for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{fixture_app, draw};
//!
//! let mut app = fixture_app();
//! app.start();
//! let screen = draw(&app, 120, 40);
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc;

use viralforge_admin::adapters::{InMemoryTokenStore, MockHttpClient, RecordingNavigator, ReqwestHttpClient};
use viralforge_admin::api::{ApiClient, ApiService};
use viralforge_admin::app::{App, AppContext};
use viralforge_admin::config::AdminConfig;
use viralforge_admin::sources::MockBackend;
use viralforge_admin::ui;

/// Token accepted by the mock servers in these tests.
pub const TEST_TOKEN: &str = "test-token-12345";

/// Fixture backend that answers immediately.
pub fn instant_backend() -> MockBackend {
    MockBackend::new()
        .with_load_delay(Duration::ZERO)
        .with_save_delay(Duration::ZERO)
}

/// App in mock data mode over [`instant_backend`].
pub fn fixture_app() -> App {
    let context = AppContext::new(
        AdminConfig::default(),
        Arc::new(MockHttpClient::new()),
        Arc::new(InMemoryTokenStore::with_token(TEST_TOKEN)),
        Arc::new(RecordingNavigator::new()),
        instant_backend(),
    );
    let (tx, rx) = mpsc::unbounded_channel();
    App::new(context, tx, rx)
}

/// Real reqwest-backed service pointed at `base_url`.
pub struct LiveService {
    pub service: ApiService,
    pub tokens: Arc<InMemoryTokenStore>,
    pub navigator: Arc<RecordingNavigator>,
}

pub fn live_service(config: AdminConfig, tokens: InMemoryTokenStore) -> LiveService {
    let tokens = Arc::new(tokens);
    let navigator = Arc::new(RecordingNavigator::new());
    let http = ReqwestHttpClient::with_timeout(config.timeout()).expect("reqwest client");
    let client = ApiClient::new(config, Arc::new(http), tokens.clone(), navigator.clone());
    LiveService {
        service: ApiService::new(client),
        tokens,
        navigator,
    }
}

/// Render `app` into a `width` x `height` buffer and return its text.
pub fn draw(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| ui::render(f, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// Let spawned fetches finish.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}
