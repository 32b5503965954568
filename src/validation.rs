//! Field contracts for settings patches.
//!
//! A patch is checked as a whole before it is merged; the first broken
//! contract is reported and nothing is applied.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::models::{
    AiConfig, ContentSettingsPatch, MediaSettings, PostsPerDay, ScheduleSettingsPatch, TimeWindows,
};

pub const CREATIVITY_MAX: u8 = 100;
pub const VIDEO_LENGTH_MIN_SECS: u32 = 10;
pub const VIDEO_LENGTH_MAX_SECS: u32 = 60;
pub const POSTS_PER_DAY_MAX: u32 = 24;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Check every present field of a content settings patch.
pub fn validate_content_patch(patch: &ContentSettingsPatch) -> Result<(), ValidationError> {
    if let Some(ai_config) = &patch.ai_config {
        validate_ai_config(ai_config)?;
    }
    if let Some(media) = &patch.media_settings {
        validate_media_settings(media)?;
    }
    Ok(())
}

/// Check every present field of a schedule settings patch.
pub fn validate_schedule_patch(patch: &ScheduleSettingsPatch) -> Result<(), ValidationError> {
    if let Some(posts) = &patch.posts_per_day {
        validate_posts_per_day(posts)?;
    }
    if let Some(windows) = &patch.time_windows {
        validate_time_windows(windows)?;
    }
    if let Some(zones) = &patch.time_zones {
        if zones.iter().any(|z| z.trim().is_empty()) {
            return Err(ValidationError::Empty { field: "time_zones" });
        }
    }
    if let Some(dates) = &patch.blackout_dates {
        for date in dates {
            validate_date(date)?;
        }
    }
    Ok(())
}

pub fn validate_ai_config(config: &AiConfig) -> Result<(), ValidationError> {
    if config.creativity_level > CREATIVITY_MAX {
        return Err(ValidationError::OutOfRange {
            field: "creativity_level",
            value: i64::from(config.creativity_level),
            min: 0,
            max: i64::from(CREATIVITY_MAX),
        });
    }
    if config.language.trim().is_empty() {
        return Err(ValidationError::Empty { field: "language" });
    }
    Ok(())
}

pub fn validate_media_settings(media: &MediaSettings) -> Result<(), ValidationError> {
    let (low, high) = media.video_length_range;
    for value in [low, high] {
        if !(VIDEO_LENGTH_MIN_SECS..=VIDEO_LENGTH_MAX_SECS).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "video_length_range",
                value: i64::from(value),
                min: i64::from(VIDEO_LENGTH_MIN_SECS),
                max: i64::from(VIDEO_LENGTH_MAX_SECS),
            });
        }
    }
    if low > high {
        return Err(ValidationError::InvertedRange {
            field: "video_length_range",
            low: i64::from(low),
            high: i64::from(high),
        });
    }
    if media.image_style.trim().is_empty() {
        return Err(ValidationError::Empty { field: "image_style" });
    }
    Ok(())
}

fn validate_posts_per_day(posts: &PostsPerDay) -> Result<(), ValidationError> {
    for (field, value) in [
        ("posts_per_day.instagram", posts.instagram),
        ("posts_per_day.tiktok", posts.tiktok),
    ] {
        if value > POSTS_PER_DAY_MAX {
            return Err(ValidationError::OutOfRange {
                field,
                value: i64::from(value),
                min: 0,
                max: i64::from(POSTS_PER_DAY_MAX),
            });
        }
    }
    Ok(())
}

fn validate_time_windows(windows: &TimeWindows) -> Result<(), ValidationError> {
    for (name, window) in windows.named() {
        let start = parse_clock(window.start())
            .filter(|m| *m < MINUTES_PER_DAY)
            .ok_or_else(|| ValidationError::InvalidTime {
                field: format!("{}.start", name),
                value: window.start().to_string(),
            })?;
        let end = parse_clock(window.end()).ok_or_else(|| ValidationError::InvalidTime {
            field: format!("{}.end", name),
            value: window.end().to_string(),
        })?;
        if start >= end {
            return Err(ValidationError::WindowOrder {
                window: name.to_string(),
                start: window.start().to_string(),
                end: window.end().to_string(),
            });
        }
    }
    Ok(())
}

fn validate_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidDate {
            value: value.to_string(),
        })
}

/// Minutes since midnight for an `HH:MM` string. `24:00` is accepted.
pub fn parse_clock(value: &str) -> Option<u32> {
    let (hours, minutes) = value.split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if minutes > 59 {
        return None;
    }
    let total = hours * 60 + minutes;
    (total <= MINUTES_PER_DAY).then_some(total)
}
