//! Application context: configuration, API service and the page stores.
//!
//! The context is built once at startup and passed to the [`App`]; stores
//! are shared handles, so cloning the context is cheap and every clone
//! observes the same state.
//!
//! [`App`]: super::App

use std::sync::Arc;

use tokio::sync::mpsc;

use super::AppMessage;
use crate::adapters::{ChannelNavigator, FileTokenStore, InMemoryTokenStore, ReqwestHttpClient};
use crate::api::{ApiClient, ApiService};
use crate::config::{AdminConfig, DataMode};
use crate::sources::{ApiBackend, MockBackend};
use crate::store::{AccountsStore, DashboardStore, LogsStore, SettingsStore};
use crate::traits::{HttpClient, HttpError, Navigator, TokenStore};

#[derive(Clone)]
pub struct AppContext {
    pub config: AdminConfig,
    pub api: ApiService,
    pub tokens: Arc<dyn TokenStore>,
    pub dashboard: DashboardStore,
    pub settings: SettingsStore,
    pub accounts: AccountsStore,
    pub logs: LogsStore,
}

impl AppContext {
    /// Wire the context from its collaborators.
    ///
    /// In [`DataMode::Api`] the dashboard, settings and accounts stores read
    /// through the API; logs always come from `mock` since the API has no
    /// log endpoint.
    pub fn new(
        config: AdminConfig,
        http: Arc<dyn HttpClient>,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        mock: MockBackend,
    ) -> Self {
        let api = ApiService::new(ApiClient::new(
            config.clone(),
            http,
            tokens.clone(),
            navigator,
        ));

        let mock = Arc::new(mock);
        let (dashboard, settings, accounts) = match config.data_mode {
            DataMode::Mock => (
                DashboardStore::new(mock.clone()),
                SettingsStore::new(mock.clone()),
                AccountsStore::new(mock.clone()),
            ),
            DataMode::Api => {
                let backend = Arc::new(ApiBackend::new(api.clone()));
                (
                    DashboardStore::new(backend.clone()),
                    SettingsStore::new(backend.clone()),
                    AccountsStore::new(backend),
                )
            }
        };
        tracing::info!(
            "Context ready (data mode: {}, api: {})",
            config.data_mode.as_str(),
            config.base_url
        );

        Self {
            config,
            api,
            tokens,
            dashboard,
            settings,
            accounts,
            logs: LogsStore::new(mock),
        }
    }

    /// Production wiring: reqwest transport, file token store and redirects
    /// delivered as [`AppMessage::Navigate`].
    pub fn production(
        config: AdminConfig,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Result<Self, HttpError> {
        let http = Arc::new(ReqwestHttpClient::with_timeout(config.timeout())?);
        let tokens: Arc<dyn TokenStore> = match (&config.token_path, FileTokenStore::new()) {
            (Some(path), _) => Arc::new(FileTokenStore::at(path)),
            (None, Some(store)) => Arc::new(store),
            (None, None) => {
                tracing::warn!("No home directory; auth token will not persist");
                Arc::new(InMemoryTokenStore::new())
            }
        };
        let navigator = Arc::new(ChannelNavigator::new(message_tx));
        Ok(Self::new(config, http, tokens, navigator, MockBackend::new()))
    }

    /// Replace the stores, keeping config and API wiring.
    pub fn with_stores(
        mut self,
        dashboard: DashboardStore,
        settings: SettingsStore,
        accounts: AccountsStore,
        logs: LogsStore,
    ) -> Self {
        self.dashboard = dashboard;
        self.settings = settings;
        self.accounts = accounts;
        self.logs = logs;
        self
    }
}
