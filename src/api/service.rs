//! Typed methods for each backend endpoint.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::client::ApiClient;
use super::wire::{
    ActivityItem, ApiAccount, ApiContentSettings, ApiContentSettingsPartial,
    ConnectAccountRequest, GenerateRequest, GenerateResponse, SchedulePostRequest, ScheduledPost,
    ServiceHealth, SummaryMetrics,
};
use crate::error::ApiError;

/// Range used by [`ApiService::analytics`] when none is chosen.
pub const DEFAULT_ANALYTICS_RANGE: &str = "7d";

/// The backend API, one method per endpoint. Cheap to clone.
#[derive(Clone)]
pub struct ApiService {
    client: Arc<ApiClient>,
}

impl ApiService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    // Dashboard

    pub async fn dashboard_metrics(&self) -> Result<SummaryMetrics, ApiError> {
        self.client.get_json("/dashboard/metrics").await
    }

    pub async fn system_health(&self) -> Result<ServiceHealth, ApiError> {
        self.client.get_json("/dashboard/health").await
    }

    pub async fn recent_activity(&self) -> Result<Vec<ActivityItem>, ApiError> {
        self.client.get_json("/dashboard/activity").await
    }

    // Content

    pub async fn content_settings(&self) -> Result<ApiContentSettings, ApiError> {
        self.client.get_json("/content/settings").await
    }

    /// Persist a partial update; returns the settings as stored.
    pub async fn update_content_settings(
        &self,
        settings: &ApiContentSettingsPartial,
    ) -> Result<ApiContentSettings, ApiError> {
        self.client.put_json("/content/settings", settings).await
    }

    // Accounts

    pub async fn accounts(&self) -> Result<Vec<ApiAccount>, ApiError> {
        self.client.get_json("/accounts").await
    }

    /// Begin connecting an account on `platform`.
    pub async fn connect_account(
        &self,
        platform: &str,
        credentials: &serde_json::Value,
    ) -> Result<ApiAccount, ApiError> {
        let body = ConnectAccountRequest {
            platform,
            credentials,
        };
        self.client.post_json("/accounts/connect", &body).await
    }

    pub async fn disconnect_account(&self, account_id: &str) -> Result<(), ApiError> {
        let path = format!("/accounts/{}", urlencoding::encode(account_id));
        self.client.delete(&path).await
    }

    // AI generation

    /// Generate content for `prompt`; returns the generated text.
    pub async fn generate_content(
        &self,
        prompt: &str,
        settings: Option<ApiContentSettingsPartial>,
    ) -> Result<String, ApiError> {
        let body = GenerateRequest {
            prompt: prompt.to_string(),
            settings,
        };
        let response: GenerateResponse = self.client.post_json("/ai/generate", &body).await?;
        Ok(response.content)
    }

    // Scheduling

    pub async fn schedule_post(
        &self,
        account_id: &str,
        content: &str,
        scheduled_time: DateTime<Utc>,
    ) -> Result<(), ApiError> {
        let body = SchedulePostRequest {
            account_id: account_id.to_string(),
            content: content.to_string(),
            scheduled_time,
        };
        self.client.post("/posts/schedule", &body).await
    }

    pub async fn scheduled_posts(&self) -> Result<Vec<ScheduledPost>, ApiError> {
        self.client.get_json("/posts/scheduled").await
    }

    // Analytics

    /// Analytics for a time window such as `7d` or `30d`.
    ///
    /// The payload shape is owned by the backend and returned as-is.
    pub async fn analytics(&self, range: &str) -> Result<serde_json::Value, ApiError> {
        let range = if range.is_empty() {
            DEFAULT_ANALYTICS_RANGE
        } else {
            range
        };
        let path = format!("/analytics?range={}", urlencoding::encode(range));
        self.client.get_json(&path).await
    }

    /// Liveness probe. Any failure counts as unhealthy.
    pub async fn health_check(&self) -> bool {
        match self.client.send(super::client::Method::Get, "/health", None).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("Health check failed: {}", e);
                false
            }
        }
    }
}
