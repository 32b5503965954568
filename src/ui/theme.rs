//! Color theme constants for the ViralForge admin UI
//!
//! Defines the dark palette used throughout the UI.

use ratatui::style::Color;

use crate::models::{ActivityStatus, HealthLevel, LogLevel};

// ============================================================================
// Base Palette
// ============================================================================

/// Border color for panels and cards
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and values
pub const COLOR_ACCENT: Color = Color::White;

/// Brand color for the logo and the active sidebar item
pub const COLOR_BRAND: Color = Color::Rgb(139, 92, 246); // violet #8B5CF6

/// Dim text for labels and secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background of the selected row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 30, 46);

// ============================================================================
// Status Colors
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_WARNING: Color = Color::Yellow;

pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_OFFLINE: Color = Color::Gray;

pub fn health_color(level: HealthLevel) -> Color {
    match level {
        HealthLevel::Online => COLOR_SUCCESS,
        HealthLevel::Warning => COLOR_WARNING,
        HealthLevel::Error => COLOR_ERROR,
        HealthLevel::Offline => COLOR_OFFLINE,
    }
}

pub fn activity_color(status: ActivityStatus) -> Color {
    match status {
        ActivityStatus::Success => COLOR_SUCCESS,
        ActivityStatus::Warning => COLOR_WARNING,
        ActivityStatus::Error => COLOR_ERROR,
    }
}

pub fn log_level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => Color::Cyan,
        LogLevel::Warning => COLOR_WARNING,
        LogLevel::Error => COLOR_ERROR,
        LogLevel::Critical => Color::LightRed,
    }
}
