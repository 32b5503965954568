//! Request and response bodies of the backend HTTP surface.
//!
//! Dashboard payloads share their shape with the models and are re-exported
//! from there; the rest use the backend's camelCase names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub use crate::models::{ActivityItem, ServiceHealth, ServiceState, SummaryMetrics};

/// Accept ids sent either as strings or as integers.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer id")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Connection state of an account as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Connected,
    Disconnected,
    Error,
}

/// An account from `GET /accounts` or `POST /accounts/connect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAccount {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub platform: String,
    pub username: String,
    pub status: AccountStatus,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub last_post: Option<DateTime<Utc>>,
    #[serde(default)]
    pub token_expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub monthly_posts: u32,
}

/// Body of `POST /accounts/connect`.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectAccountRequest<'a> {
    pub platform: &'a str,
    pub credentials: &'a serde_json::Value,
}

/// Generation settings served by `GET /content/settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContentSettings {
    pub ai_model: String,
    pub tone: String,
    pub max_length: u32,
    pub include_hashtags: bool,
    pub include_emojis: bool,
}

/// Partial form used by `PUT /content/settings` and `POST /ai/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContentSettingsPartial {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_hashtags: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_emojis: Option<bool>,
}

impl ApiContentSettings {
    /// Shallow-merge a partial update, as the backend does on `PUT`.
    pub fn merged(mut self, partial: &ApiContentSettingsPartial) -> Self {
        if let Some(ai_model) = &partial.ai_model {
            self.ai_model = ai_model.clone();
        }
        if let Some(tone) = &partial.tone {
            self.tone = tone.clone();
        }
        if let Some(max_length) = partial.max_length {
            self.max_length = max_length;
        }
        if let Some(include_hashtags) = partial.include_hashtags {
            self.include_hashtags = include_hashtags;
        }
        if let Some(include_emojis) = partial.include_emojis {
            self.include_emojis = include_emojis;
        }
        self
    }
}

/// Body of `POST /ai/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<ApiContentSettingsPartial>,
}

/// Answer of `POST /ai/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub content: String,
}

/// Body of `POST /posts/schedule`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePostRequest {
    pub account_id: String,
    pub content: String,
    pub scheduled_time: DateTime<Utc>,
}

/// An entry of `GET /posts/scheduled`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPost {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub account_id: String,
    pub content: String,
    pub scheduled_time: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_accepts_numeric_id() {
        let json = r#"{"id":7,"platform":"instagram","username":"@a","status":"connected"}"#;
        let account: ApiAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, "7");
        assert_eq!(account.followers, 0);
        assert!(account.permissions.is_empty());
    }

    #[test]
    fn test_partial_settings_omit_absent_fields() {
        let partial = ApiContentSettingsPartial {
            tone: Some("casual".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&partial).unwrap(), r#"{"tone":"casual"}"#);
    }

    #[test]
    fn test_merged_keeps_untouched_fields() {
        let settings = ApiContentSettings {
            ai_model: "gpt-4".to_string(),
            tone: "professional".to_string(),
            max_length: 280,
            include_hashtags: true,
            include_emojis: false,
        };
        let merged = settings.merged(&ApiContentSettingsPartial {
            include_emojis: Some(true),
            ..Default::default()
        });
        assert_eq!(merged.max_length, 280);
        assert!(merged.include_emojis);
    }

    #[test]
    fn test_schedule_request_camel_case() {
        let request = SchedulePostRequest {
            account_id: "1".to_string(),
            content: "hello".to_string(),
            scheduled_time: "2026-03-01T09:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["accountId"], "1");
        assert!(json.get("scheduledTime").is_some());
    }
}
