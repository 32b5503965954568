//! Status Indicator Component
//!
//! Loading spinners, error banners and health dots.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::models::HealthLevel;
use crate::ui::helpers::spinner;
use crate::ui::theme::{health_color, COLOR_DIM, COLOR_ERROR, COLOR_WARNING};

/// What a page shows instead of (or above) its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, tick: u64 },
    /// Error banner with the retry hint
    Error { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, tick: u64) -> Self {
        Self::Spinner {
            message: message.into(),
            tick,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Render a status indicator as lines
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    match indicator {
        StatusIndicatorType::Spinner { message, tick } => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("  {} ", spinner(*tick)), Style::default().fg(COLOR_WARNING)),
                Span::styled(message.clone(), Style::default().fg(COLOR_WARNING)),
            ]),
        ],
        StatusIndicatorType::Error { message } => vec![Line::from(vec![
            Span::styled(
                format!(" Error: {} ", message),
                Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
            ),
            Span::styled("[r] retry", Style::default().fg(COLOR_DIM)),
        ])],
    }
}

/// A `● Label  state` line for the health panel.
pub fn health_line(label: &str, level: HealthLevel, state: &str) -> Line<'static> {
    let color = health_color(level);
    Line::from(vec![
        Span::styled(" ● ", Style::default().fg(color)),
        Span::raw(format!("{:<14}", label)),
        Span::styled(state.to_string(), Style::default().fg(color)),
    ])
}
