//! Connected social media accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publishing platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Instagram,
    Tiktok,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Instagram, Platform::Tiktok];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
        }
    }

    /// Parse a wire name; other networks are not supported.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "instagram" => Some(Platform::Instagram),
            "tiktok" => Some(Platform::Tiktok),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Tiktok => "TikTok",
        }
    }

    /// Two-letter badge text.
    pub fn short(&self) -> &'static str {
        match self {
            Platform::Instagram => "IG",
            Platform::Tiktok => "TT",
        }
    }
}

/// A social account the product posts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialAccount {
    pub id: String,
    pub platform: Platform,
    pub username: String,
    pub is_connected: bool,
    pub token_expires_at: DateTime<Utc>,
    pub permissions: Vec<String>,
    #[serde(default)]
    pub last_post_at: Option<DateTime<Utc>>,
    pub monthly_posts: u32,
}

impl SocialAccount {
    /// Whole days until the platform token expires (negative once expired).
    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        (self.token_expires_at - now).num_days()
    }

    /// Whether the platform token has expired at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.token_expires_at <= now
    }
}
