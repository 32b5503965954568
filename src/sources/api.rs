//! Collaborator backed by the live HTTP API.
//!
//! The backend exposes a narrower surface than the dashboard shows, so
//! responses are mapped onto the models:
//! - the dashboard gets summary counters, service health and activity; the
//!   per-day metrics and queue panels stay empty;
//! - content settings carry only the model and a maximum length, which are
//!   overlaid onto the default generation settings; schedule settings have
//!   no endpoint and keep their defaults;
//! - accounts on networks other than Instagram and TikTok are skipped.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::{AccountsSource, DashboardSource, SettingsSource};
use crate::api::wire::{AccountStatus, ApiAccount, ApiContentSettings, ApiContentSettingsPartial};
use crate::api::ApiService;
use crate::error::AdminResult;
use crate::fixtures;
use crate::models::{
    AiModel, ContentLength, ContentSettings, DashboardSnapshot, Platform, SettingsBundle,
    SocialAccount, SystemStatus,
};

/// Token lifetime assumed when the backend does not report an expiry.
pub const ASSUMED_TOKEN_LIFETIME_DAYS: i64 = 60;

/// Caption length limits that stand for each length bucket.
const SHORT_MAX_LENGTH: u32 = 140;
const MEDIUM_MAX_LENGTH: u32 = 280;
const LONG_MAX_LENGTH: u32 = 600;

#[derive(Clone)]
pub struct ApiBackend {
    api: ApiService,
}

impl ApiBackend {
    pub fn new(api: ApiService) -> Self {
        Self { api }
    }
}

/// Map a backend account onto the model, or `None` for unsupported networks.
pub fn social_account(account: ApiAccount, now: DateTime<Utc>) -> Option<SocialAccount> {
    let Some(platform) = Platform::parse(&account.platform) else {
        tracing::debug!(
            "Skipping account {} on unsupported platform {}",
            account.id,
            account.platform
        );
        return None;
    };
    Some(SocialAccount {
        id: account.id,
        platform,
        username: account.username,
        is_connected: account.status == AccountStatus::Connected,
        token_expires_at: account
            .token_expires_at
            .unwrap_or(now + Duration::days(ASSUMED_TOKEN_LIFETIME_DAYS)),
        permissions: account.permissions,
        last_post_at: account.last_post,
        monthly_posts: account.monthly_posts,
    })
}

fn length_bucket(max_length: u32) -> ContentLength {
    if max_length <= SHORT_MAX_LENGTH {
        ContentLength::Short
    } else if max_length <= MEDIUM_MAX_LENGTH {
        ContentLength::Medium
    } else {
        ContentLength::Long
    }
}

fn max_length(length: ContentLength) -> u32 {
    match length {
        ContentLength::Short => SHORT_MAX_LENGTH,
        ContentLength::Medium => MEDIUM_MAX_LENGTH,
        ContentLength::Long => LONG_MAX_LENGTH,
    }
}

/// Overlay the backend's generation settings onto `base`.
pub fn content_from_api(api: &ApiContentSettings, mut base: ContentSettings) -> ContentSettings {
    match AiModel::parse(&api.ai_model) {
        Some(model) => base.ai_config.model = model,
        None => tracing::warn!("Unknown AI model from backend: {}", api.ai_model),
    }
    base.ai_config.content_length = length_bucket(api.max_length);
    base
}

/// The part of `content` the backend can store.
pub fn api_partial(content: &ContentSettings) -> ApiContentSettingsPartial {
    ApiContentSettingsPartial {
        ai_model: Some(content.ai_config.model.as_str().to_string()),
        max_length: Some(max_length(content.ai_config.content_length)),
        ..Default::default()
    }
}

#[async_trait]
impl DashboardSource for ApiBackend {
    async fn load_dashboard(&self) -> AdminResult<DashboardSnapshot> {
        let (summary, health, activity) = tokio::try_join!(
            self.api.dashboard_metrics(),
            self.api.system_health(),
            self.api.recent_activity(),
        )?;
        Ok(DashboardSnapshot {
            summary: Some(summary),
            metrics: None,
            system_status: Some(SystemStatus::from_service_health(&health, Utc::now())),
            queue_status: None,
            activity,
        })
    }
}

#[async_trait]
impl SettingsSource for ApiBackend {
    async fn load_settings(&self) -> AdminResult<SettingsBundle> {
        let api_settings = self.api.content_settings().await?;
        Ok(SettingsBundle {
            content: content_from_api(&api_settings, fixtures::content_settings()),
            schedule: fixtures::schedule_settings(),
        })
    }

    async fn save_settings(&self, settings: &SettingsBundle) -> AdminResult<()> {
        self.api
            .update_content_settings(&api_partial(&settings.content))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl AccountsSource for ApiBackend {
    async fn load_accounts(&self) -> AdminResult<Vec<SocialAccount>> {
        let now = Utc::now();
        let accounts = self.api.accounts().await?;
        Ok(accounts
            .into_iter()
            .filter_map(|a| social_account(a, now))
            .collect())
    }

    async fn connect_account(&self, platform: Platform) -> AdminResult<Option<SocialAccount>> {
        let credentials = serde_json::json!({});
        let account = self
            .api
            .connect_account(platform.as_str(), &credentials)
            .await?;
        Ok(social_account(account, Utc::now()))
    }

    async fn disconnect_account(&self, account_id: &str) -> AdminResult<()> {
        self.api.disconnect_account(account_id).await?;
        Ok(())
    }

    async fn refresh_account(&self, account_id: &str) -> AdminResult<Option<SocialAccount>> {
        let now = Utc::now();
        let accounts = self.api.accounts().await?;
        Ok(accounts
            .into_iter()
            .find(|a| a.id == account_id)
            .and_then(|a| social_account(a, now)))
    }
}
