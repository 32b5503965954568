//! Login page: a centered card where the API token is entered.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::shell::BRAND_NAME;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_WARNING};

/// The typed token, masked.
pub fn masked(input: &str) -> String {
    "•".repeat(input.chars().count())
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(COLOR_BORDER)),
        area,
    );

    let config = DialogFrameConfig::new("Sign In", 48, 9);
    let inner = render_dialog_frame(frame, area, &config);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                " V ",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .bg(COLOR_BRAND)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} Admin", BRAND_NAME),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("API token", Style::default().fg(COLOR_DIM))),
        Line::from(Span::styled(
            format!("> {}_", masked(&app.login_input)),
            Style::default().fg(COLOR_ACCENT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[enter] sign in  [esc] quit",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    if let Some(message) = &app.status_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(COLOR_WARNING),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_counts_chars() {
        assert_eq!(masked(""), "");
        assert_eq!(masked("abc"), "•••");
        assert_eq!(masked("é1"), "••");
    }
}
