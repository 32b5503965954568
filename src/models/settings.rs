//! Content-generation and scheduling settings.
//!
//! Both settings records are updated by shallow merge: a patch carries one
//! `Option` per top-level field and a present field replaces the whole
//! top-level value. Field contracts are checked in [`crate::validation`]
//! before a patch is applied.

use serde::{Deserialize, Serialize};

// ============================================================================
// Content settings
// ============================================================================

/// Which kinds of content the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnabledContentTypes {
    pub facts: bool,
    pub quotes: bool,
    pub memes: bool,
    pub location: bool,
    pub educational: bool,
    pub custom: bool,
}

impl EnabledContentTypes {
    /// Display label and current flag for each type, in display order.
    pub fn entries(&self) -> [(&'static str, bool); 6] {
        [
            ("Facts & Trivia", self.facts),
            ("Motivational Quotes", self.quotes),
            ("Memes & Humor", self.memes),
            ("Location Content", self.location),
            ("Educational Tips", self.educational),
            ("Custom Prompts", self.custom),
        ]
    }

    /// Copy with the flag at `index` (display order) flipped.
    pub fn toggled(mut self, index: usize) -> Self {
        match index {
            0 => self.facts = !self.facts,
            1 => self.quotes = !self.quotes,
            2 => self.memes = !self.memes,
            3 => self.location = !self.location,
            4 => self.educational = !self.educational,
            5 => self.custom = !self.custom,
            _ => {}
        }
        self
    }
}

/// Generation model choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AiModel {
    #[default]
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "claude")]
    Claude,
    #[serde(rename = "gemini")]
    Gemini,
}

impl AiModel {
    pub const ALL: [AiModel; 3] = [AiModel::Gpt4, AiModel::Claude, AiModel::Gemini];

    /// Wire name, as used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            AiModel::Gpt4 => "gpt-4",
            AiModel::Claude => "claude",
            AiModel::Gemini => "gemini",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        AiModel::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            AiModel::Gpt4 => "GPT-4",
            AiModel::Claude => "Claude",
            AiModel::Gemini => "Gemini",
        }
    }

    /// The next model in selection order, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            AiModel::Gpt4 => AiModel::Claude,
            AiModel::Claude => AiModel::Gemini,
            AiModel::Gemini => AiModel::Gpt4,
        }
    }
}

/// Length bucket for generated captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl ContentLength {
    pub fn label(&self) -> &'static str {
        match self {
            ContentLength::Short => "Short",
            ContentLength::Medium => "Medium",
            ContentLength::Long => "Long",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ContentLength::Short => ContentLength::Medium,
            ContentLength::Medium => ContentLength::Long,
            ContentLength::Long => ContentLength::Short,
        }
    }
}

/// Languages offered by the language select.
pub const LANGUAGES: [&str; 5] = ["English", "Spanish", "French", "German", "Italian"];

/// AI generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub model: AiModel,
    /// 0 (conservative) to 100 (creative)
    pub creativity_level: u8,
    pub content_length: ContentLength,
    pub language: String,
    #[serde(default)]
    pub custom_instructions: Option<String>,
}

/// Which trend feeds are consulted for topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrendingSources {
    pub google_trends: bool,
    pub tiktok_discovery: bool,
    pub instagram_explore: bool,
    pub twitter_trending: bool,
    pub reddit_hot: bool,
    pub youtube_trending: bool,
}

impl TrendingSources {
    pub fn entries(&self) -> [(&'static str, bool); 6] {
        [
            ("Google Trends", self.google_trends),
            ("TikTok Discovery", self.tiktok_discovery),
            ("Instagram Explore", self.instagram_explore),
            ("Twitter Trending", self.twitter_trending),
            ("Reddit Hot", self.reddit_hot),
            ("YouTube Trending", self.youtube_trending),
        ]
    }

    pub fn toggled(mut self, index: usize) -> Self {
        match index {
            0 => self.google_trends = !self.google_trends,
            1 => self.tiktok_discovery = !self.tiktok_discovery,
            2 => self.instagram_explore = !self.instagram_explore,
            3 => self.twitter_trending = !self.twitter_trending,
            4 => self.reddit_hot = !self.reddit_hot,
            5 => self.youtube_trending = !self.youtube_trending,
            _ => {}
        }
        self
    }
}

/// Image styles offered by the media select.
pub const IMAGE_STYLES: [&str; 5] = ["Realistic", "Artistic", "Minimalist", "Cartoon", "Abstract"];

/// Voice providers offered by the media select.
pub const VOICE_PROVIDERS: [&str; 4] = ["ElevenLabs", "Azure", "Google", "Amazon"];

/// Media generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSettings {
    pub image_style: String,
    /// `[min, max]` video length in seconds
    pub video_length_range: (u32, u32),
    pub voice_provider: String,
    pub voice_id: String,
    pub background_music: bool,
}

/// The full content-generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSettings {
    pub enabled_types: EnabledContentTypes,
    pub ai_config: AiConfig,
    pub trending_sources: TrendingSources,
    pub media_settings: MediaSettings,
}

/// Partial update of [`ContentSettings`]; also the `PUT` body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentSettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_types: Option<EnabledContentTypes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_config: Option<AiConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending_sources: Option<TrendingSources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_settings: Option<MediaSettings>,
}

impl ContentSettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.enabled_types.is_none()
            && self.ai_config.is_none()
            && self.trending_sources.is_none()
            && self.media_settings.is_none()
    }
}

impl ContentSettings {
    /// Shallow-merge `patch` into `self`.
    pub fn apply(&mut self, patch: ContentSettingsPatch) {
        if let Some(enabled_types) = patch.enabled_types {
            self.enabled_types = enabled_types;
        }
        if let Some(ai_config) = patch.ai_config {
            self.ai_config = ai_config;
        }
        if let Some(trending_sources) = patch.trending_sources {
            self.trending_sources = trending_sources;
        }
        if let Some(media_settings) = patch.media_settings {
            self.media_settings = media_settings;
        }
    }
}

// ============================================================================
// Schedule settings
// ============================================================================

/// Daily post targets per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostsPerDay {
    pub instagram: u32,
    pub tiktok: u32,
}

/// A `[start, end]` pair of `HH:MM` times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow(pub String, pub String);

impl TimeWindow {
    pub fn new(start: &str, end: &str) -> Self {
        Self(start.to_string(), end.to_string())
    }

    pub fn start(&self) -> &str {
        &self.0
    }

    pub fn end(&self) -> &str {
        &self.1
    }
}

/// Named posting windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindows {
    pub morning: TimeWindow,
    pub afternoon: TimeWindow,
    pub evening: TimeWindow,
}

impl TimeWindows {
    pub fn named(&self) -> [(&'static str, &TimeWindow); 3] {
        [
            ("morning", &self.morning),
            ("afternoon", &self.afternoon),
            ("evening", &self.evening),
        ]
    }
}

/// Automatic scheduling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    pub auto_schedule: bool,
    pub posts_per_day: PostsPerDay,
    pub time_windows: TimeWindows,
    pub time_zones: Vec<String>,
    /// `YYYY-MM-DD` dates with no posting
    pub blackout_dates: Vec<String>,
}

/// Partial update of [`ScheduleSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleSettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_schedule: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_per_day: Option<PostsPerDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_windows: Option<TimeWindows>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zones: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blackout_dates: Option<Vec<String>>,
}

impl ScheduleSettings {
    /// Shallow-merge `patch` into `self`.
    pub fn apply(&mut self, patch: ScheduleSettingsPatch) {
        if let Some(auto_schedule) = patch.auto_schedule {
            self.auto_schedule = auto_schedule;
        }
        if let Some(posts_per_day) = patch.posts_per_day {
            self.posts_per_day = posts_per_day;
        }
        if let Some(time_windows) = patch.time_windows {
            self.time_windows = time_windows;
        }
        if let Some(time_zones) = patch.time_zones {
            self.time_zones = time_zones;
        }
        if let Some(blackout_dates) = patch.blackout_dates {
            self.blackout_dates = blackout_dates;
        }
    }
}

/// Both settings records as one unit, as fetched and saved together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsBundle {
    pub content: ContentSettings,
    pub schedule: ScheduleSettings,
}
