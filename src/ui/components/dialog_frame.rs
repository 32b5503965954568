//! Dialog Frame Component
//!
//! A centered overlay with rounded borders. Clears what is underneath and
//! returns the inner area for content.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER};

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Content width (not including borders)
    pub content_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_width: u16, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            content_width,
        }
    }
}

/// Compute the dialog rectangle centered in `area`, clamped to fit.
pub fn dialog_rect(area: Rect, config: &DialogFrameConfig) -> Rect {
    let width = (config.content_width + 2).min(area.width);
    let height = (config.content_height + 2).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render a dialog frame and return the inner content area
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, config: &DialogFrameConfig) -> Rect {
    let dialog_area = dialog_rect(area, config);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}
