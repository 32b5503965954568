//! Collaborators that feed the stores.
//!
//! Each store depends on one of these traits and never on a concrete
//! backend. [`MockBackend`] answers with fixtures after an artificial
//! delay; [`ApiBackend`] goes through the [`crate::api::ApiService`].

use async_trait::async_trait;

use crate::error::AdminResult;
use crate::models::{
    DashboardSnapshot, ErrorSummary, LogEntry, Platform, SettingsBundle, SocialAccount,
};

pub mod api;
pub mod mock;

pub use api::ApiBackend;
pub use mock::MockBackend;

/// Supplies the dashboard snapshot.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn load_dashboard(&self) -> AdminResult<DashboardSnapshot>;
}

/// Loads and persists both settings records.
#[async_trait]
pub trait SettingsSource: Send + Sync {
    async fn load_settings(&self) -> AdminResult<SettingsBundle>;

    async fn save_settings(&self, settings: &SettingsBundle) -> AdminResult<()>;
}

/// Connected social accounts.
#[async_trait]
pub trait AccountsSource: Send + Sync {
    async fn load_accounts(&self) -> AdminResult<Vec<SocialAccount>>;

    /// Begin connecting `platform`. `None` means the connection completes
    /// out of band and a later fetch will pick it up.
    async fn connect_account(&self, platform: Platform) -> AdminResult<Option<SocialAccount>>;

    async fn disconnect_account(&self, account_id: &str) -> AdminResult<()>;

    /// Re-read one account. `None` when it no longer exists.
    async fn refresh_account(&self, account_id: &str) -> AdminResult<Option<SocialAccount>>;
}

/// Everything one logs fetch produces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogBatch {
    pub logs: Vec<LogEntry>,
    pub summary: ErrorSummary,
}

/// System logs and their error summary.
#[async_trait]
pub trait LogsSource: Send + Sync {
    async fn load_logs(&self) -> AdminResult<LogBatch>;
}
