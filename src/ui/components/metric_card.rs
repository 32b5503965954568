//! Metric Card Component
//!
//! A bordered card with a title, a large value and a one-line detail.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

#[derive(Debug, Clone)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub detail: String,
    pub detail_color: Color,
}

impl MetricCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            detail: String::new(),
            detail_color: COLOR_DIM,
        }
    }

    pub fn detail(mut self, detail: impl Into<String>, color: Color) -> Self {
        self.detail = detail.into();
        self.detail_color = color;
        self
    }
}

pub fn render_metric_card(frame: &mut Frame, area: Rect, card: &MetricCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", card.title),
            Style::default().fg(COLOR_DIM),
        ));

    let lines = vec![
        Line::from(Span::styled(
            card.value.clone(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.detail.clone(),
            Style::default().fg(card.detail_color),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
