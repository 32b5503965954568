//! Editable fields of the content and scheduling pages.
//!
//! Each field turns a key press into a patch for the settings store; the
//! store validates the patch, so a field may propose an out-of-range value
//! and have it rejected there.

use crate::models::{
    ContentSettings, ContentSettingsPatch, PostsPerDay, ScheduleSettings, ScheduleSettingsPatch,
    IMAGE_STYLES, LANGUAGES, VOICE_PROVIDERS,
};

/// Creativity moves in steps of this size.
pub const CREATIVITY_STEP: i32 = 5;

/// Video bounds move in steps of this many seconds.
pub const VIDEO_STEP: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentField {
    ContentType(usize),
    Model,
    Creativity,
    Length,
    Language,
    TrendSource(usize),
    ImageStyle,
    VideoMin,
    VideoMax,
    VoiceProvider,
    BackgroundMusic,
}

/// Fields in display order.
pub fn content_fields() -> Vec<ContentField> {
    let mut fields: Vec<ContentField> = (0..6).map(ContentField::ContentType).collect();
    fields.extend([
        ContentField::Model,
        ContentField::Creativity,
        ContentField::Length,
        ContentField::Language,
    ]);
    fields.extend((0..6).map(ContentField::TrendSource));
    fields.extend([
        ContentField::ImageStyle,
        ContentField::VideoMin,
        ContentField::VideoMax,
        ContentField::VoiceProvider,
        ContentField::BackgroundMusic,
    ]);
    fields
}

fn next_in<'a>(options: &[&'a str], current: &str) -> &'a str {
    let index = options.iter().position(|o| *o == current).map_or(0, |i| i + 1);
    options[index % options.len()]
}

fn offset(value: u32, delta: i32) -> u32 {
    (i64::from(value) + i64::from(delta)).max(0) as u32
}

impl ContentField {
    /// Section heading the field is grouped under.
    pub fn section(&self) -> &'static str {
        match self {
            ContentField::ContentType(_) => "Content Types",
            ContentField::Model
            | ContentField::Creativity
            | ContentField::Length
            | ContentField::Language => "AI Configuration",
            ContentField::TrendSource(_) => "Trending Sources",
            _ => "Media Settings",
        }
    }

    pub fn label(&self, settings: &ContentSettings) -> String {
        match self {
            ContentField::ContentType(i) => settings.enabled_types.entries()[*i].0.to_string(),
            ContentField::Model => "AI Model".to_string(),
            ContentField::Creativity => "Creativity Level".to_string(),
            ContentField::Length => "Content Length".to_string(),
            ContentField::Language => "Language".to_string(),
            ContentField::TrendSource(i) => settings.trending_sources.entries()[*i].0.to_string(),
            ContentField::ImageStyle => "Image Style".to_string(),
            ContentField::VideoMin => "Min Video Length".to_string(),
            ContentField::VideoMax => "Max Video Length".to_string(),
            ContentField::VoiceProvider => "Voice Provider".to_string(),
            ContentField::BackgroundMusic => "Background Music".to_string(),
        }
    }

    /// Boolean state for toggle fields, `None` for valued fields.
    pub fn checked(&self, settings: &ContentSettings) -> Option<bool> {
        match self {
            ContentField::ContentType(i) => Some(settings.enabled_types.entries()[*i].1),
            ContentField::TrendSource(i) => Some(settings.trending_sources.entries()[*i].1),
            ContentField::BackgroundMusic => Some(settings.media_settings.background_music),
            _ => None,
        }
    }

    pub fn value(&self, settings: &ContentSettings) -> String {
        let ai = &settings.ai_config;
        let media = &settings.media_settings;
        match self {
            ContentField::Model => ai.model.label().to_string(),
            ContentField::Creativity => format!("{}%", ai.creativity_level),
            ContentField::Length => ai.content_length.label().to_string(),
            ContentField::Language => ai.language.clone(),
            ContentField::ImageStyle => media.image_style.clone(),
            ContentField::VideoMin => format!("{}s", media.video_length_range.0),
            ContentField::VideoMax => format!("{}s", media.video_length_range.1),
            ContentField::VoiceProvider => media.voice_provider.clone(),
            _ => match self.checked(settings) {
                Some(true) => "On".to_string(),
                _ => "Off".to_string(),
            },
        }
    }

    /// Patch for the activate key: flip a toggle or cycle a choice.
    pub fn toggle(&self, settings: &ContentSettings) -> Option<ContentSettingsPatch> {
        let mut ai = settings.ai_config.clone();
        let mut media = settings.media_settings.clone();
        match self {
            ContentField::ContentType(i) => {
                return Some(ContentSettingsPatch {
                    enabled_types: Some(settings.enabled_types.toggled(*i)),
                    ..Default::default()
                })
            }
            ContentField::TrendSource(i) => {
                return Some(ContentSettingsPatch {
                    trending_sources: Some(settings.trending_sources.toggled(*i)),
                    ..Default::default()
                })
            }
            ContentField::Model => ai.model = ai.model.next(),
            ContentField::Length => ai.content_length = ai.content_length.next(),
            ContentField::Language => ai.language = next_in(&LANGUAGES, &ai.language).to_string(),
            ContentField::ImageStyle => {
                media.image_style = next_in(&IMAGE_STYLES, &media.image_style).to_string()
            }
            ContentField::VoiceProvider => {
                media.voice_provider = next_in(&VOICE_PROVIDERS, &media.voice_provider).to_string()
            }
            ContentField::BackgroundMusic => media.background_music = !media.background_music,
            ContentField::Creativity | ContentField::VideoMin | ContentField::VideoMax => {
                return None
            }
        }
        Some(self.patch(ai, media))
    }

    /// Patch for the increase/decrease keys on numeric fields.
    pub fn adjust(&self, settings: &ContentSettings, direction: i32) -> Option<ContentSettingsPatch> {
        let mut ai = settings.ai_config.clone();
        let mut media = settings.media_settings.clone();
        match self {
            ContentField::Creativity => {
                let level = offset(u32::from(ai.creativity_level), direction * CREATIVITY_STEP);
                ai.creativity_level = level.min(u32::from(u8::MAX)) as u8;
            }
            ContentField::VideoMin => {
                media.video_length_range.0 =
                    offset(media.video_length_range.0, direction * VIDEO_STEP)
            }
            ContentField::VideoMax => {
                media.video_length_range.1 =
                    offset(media.video_length_range.1, direction * VIDEO_STEP)
            }
            _ => return None,
        }
        Some(self.patch(ai, media))
    }

    fn patch(
        &self,
        ai: crate::models::AiConfig,
        media: crate::models::MediaSettings,
    ) -> ContentSettingsPatch {
        match self.section() {
            "AI Configuration" => ContentSettingsPatch {
                ai_config: Some(ai),
                ..Default::default()
            },
            _ => ContentSettingsPatch {
                media_settings: Some(media),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleField {
    AutoSchedule,
    InstagramPerDay,
    TiktokPerDay,
}

pub const SCHEDULE_FIELDS: [ScheduleField; 3] = [
    ScheduleField::AutoSchedule,
    ScheduleField::InstagramPerDay,
    ScheduleField::TiktokPerDay,
];

impl ScheduleField {
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleField::AutoSchedule => "Auto-schedule",
            ScheduleField::InstagramPerDay => "Instagram posts per day",
            ScheduleField::TiktokPerDay => "TikTok posts per day",
        }
    }

    pub fn value(&self, settings: &ScheduleSettings) -> String {
        match self {
            ScheduleField::AutoSchedule => {
                if settings.auto_schedule { "On" } else { "Off" }.to_string()
            }
            ScheduleField::InstagramPerDay => settings.posts_per_day.instagram.to_string(),
            ScheduleField::TiktokPerDay => settings.posts_per_day.tiktok.to_string(),
        }
    }

    pub fn toggle(&self, settings: &ScheduleSettings) -> Option<ScheduleSettingsPatch> {
        match self {
            ScheduleField::AutoSchedule => Some(ScheduleSettingsPatch {
                auto_schedule: Some(!settings.auto_schedule),
                ..Default::default()
            }),
            _ => None,
        }
    }

    pub fn adjust(&self, settings: &ScheduleSettings, direction: i32) -> Option<ScheduleSettingsPatch> {
        let PostsPerDay { instagram, tiktok } = settings.posts_per_day;
        let posts = match self {
            ScheduleField::AutoSchedule => return None,
            ScheduleField::InstagramPerDay => PostsPerDay {
                instagram: offset(instagram, direction),
                tiktok,
            },
            ScheduleField::TiktokPerDay => PostsPerDay {
                instagram,
                tiktok: offset(tiktok, direction),
            },
        };
        Some(ScheduleSettingsPatch {
            posts_per_day: Some(posts),
            ..Default::default()
        })
    }
}
