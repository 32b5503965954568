//! Fixture-backed collaborator with an artificial delay.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};

use super::{AccountsSource, DashboardSource, LogBatch, LogsSource, SettingsSource};
use crate::error::{AdminError, AdminResult};
use crate::fixtures;
use crate::models::{DashboardSnapshot, Platform, SettingsBundle, SocialAccount};

/// Delay before a fixture load resolves.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(300);

/// Delay before a simulated save resolves.
pub const DEFAULT_SAVE_DELAY: Duration = Duration::from_millis(1000);

/// How far a simulated token refresh pushes the expiry out.
const REFRESHED_TOKEN_DAYS: i64 = 60;

/// Serves fixtures after a delay. Clones share the failure switch.
#[derive(Debug, Clone)]
pub struct MockBackend {
    load_delay: Duration,
    save_delay: Duration,
    failure: Arc<Mutex<Option<String>>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            load_delay: DEFAULT_LOAD_DELAY,
            save_delay: DEFAULT_SAVE_DELAY,
            failure: Arc::new(Mutex::new(None)),
        }
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = delay;
        self
    }

    pub fn with_save_delay(mut self, delay: Duration) -> Self {
        self.save_delay = delay;
        self
    }

    /// Make every following operation fail with `message`.
    pub fn fail_with(&self, message: &str) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = Some(message.to_string());
        }
    }

    /// Stop failing.
    pub fn recover(&self) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = None;
        }
    }

    async fn simulate(&self, delay: Duration) -> AdminResult<()> {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let failure = self.failure.lock().ok().and_then(|f| f.clone());
        match failure {
            Some(message) => Err(AdminError::Unavailable(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DashboardSource for MockBackend {
    async fn load_dashboard(&self) -> AdminResult<DashboardSnapshot> {
        self.simulate(self.load_delay).await?;
        Ok(fixtures::dashboard_snapshot(Utc::now()))
    }
}

#[async_trait]
impl SettingsSource for MockBackend {
    async fn load_settings(&self) -> AdminResult<SettingsBundle> {
        self.simulate(self.load_delay).await?;
        Ok(SettingsBundle {
            content: fixtures::content_settings(),
            schedule: fixtures::schedule_settings(),
        })
    }

    async fn save_settings(&self, _settings: &SettingsBundle) -> AdminResult<()> {
        self.simulate(self.save_delay).await
    }
}

#[async_trait]
impl AccountsSource for MockBackend {
    async fn load_accounts(&self) -> AdminResult<Vec<SocialAccount>> {
        self.simulate(self.load_delay).await?;
        Ok(fixtures::accounts(Utc::now()))
    }

    async fn connect_account(&self, platform: Platform) -> AdminResult<Option<SocialAccount>> {
        self.simulate(self.load_delay).await?;
        tracing::info!("Connecting to {}...", platform.as_str());
        Ok(None)
    }

    async fn disconnect_account(&self, _account_id: &str) -> AdminResult<()> {
        self.simulate(self.load_delay).await
    }

    async fn refresh_account(&self, account_id: &str) -> AdminResult<Option<SocialAccount>> {
        self.simulate(self.load_delay).await?;
        let now = Utc::now();
        Ok(fixtures::accounts(now)
            .into_iter()
            .find(|a| a.id == account_id)
            .map(|mut account| {
                account.token_expires_at = now + ChronoDuration::days(REFRESHED_TOKEN_DAYS);
                account
            }))
    }
}

#[async_trait]
impl LogsSource for MockBackend {
    async fn load_logs(&self) -> AdminResult<LogBatch> {
        self.simulate(self.load_delay).await?;
        Ok(LogBatch {
            logs: fixtures::logs(Utc::now()),
            summary: fixtures::error_summary(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_load_dashboard_returns_fixtures() {
        let backend = MockBackend::new();
        let snapshot = backend.load_dashboard().await.unwrap();
        assert_eq!(snapshot.summary.map(|s| s.total_posts), Some(1247));
        assert_eq!(snapshot.activity.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_waits_for_delay() {
        let backend = MockBackend::new();
        let start = tokio::time::Instant::now();
        backend.load_accounts().await.unwrap();
        assert!(start.elapsed() >= DEFAULT_LOAD_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fail_with_and_recover() {
        let backend = MockBackend::new();
        backend.fail_with("backend down");

        let err = backend.load_logs().await.unwrap_err();
        assert_eq!(err.to_string(), "backend down");

        backend.recover();
        assert!(backend.load_logs().await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_unknown_account_is_none() {
        let backend = MockBackend::new();
        assert!(backend.refresh_account("99").await.unwrap().is_none());
        let refreshed = backend.refresh_account("1").await.unwrap().unwrap();
        assert!(refreshed.days_until_expiry(Utc::now()) >= REFRESHED_TOKEN_DAYS - 1);
    }
}
