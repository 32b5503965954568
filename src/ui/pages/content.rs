//! Content settings page.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{render_state, row_style, section};
use crate::app::forms::{content_fields, ContentField};
use crate::app::App;
use crate::models::ContentSettings;
use crate::store::{SaveStatus, SettingsState};
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS, COLOR_WARNING};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.context.settings.snapshot();
    let Some(area) = render_state(
        frame,
        area,
        state.content.is_some(),
        state.error.as_deref(),
        "Loading settings...",
        app.tick_count,
    ) else {
        return;
    };
    let Some(content) = &state.content else {
        return;
    };

    let (mut lines, cursor_line) = field_lines(content, app.content_cursor);
    lines.insert(0, save_line(&state));
    lines.insert(1, Line::from(""));

    // Keep the cursor row on screen
    let cursor_line = cursor_line + 2;
    let scroll = cursor_line.saturating_sub(area.height.saturating_sub(1) as usize);
    frame.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), area);
}

/// The `[s] Save` line with the current save status.
pub(super) fn save_line(state: &SettingsState) -> Line<'static> {
    let color = match state.save_status {
        SaveStatus::Idle | SaveStatus::Saving => COLOR_WARNING,
        SaveStatus::Success => COLOR_SUCCESS,
        SaveStatus::Error => COLOR_ERROR,
    };
    Line::from(vec![
        Span::styled("[s] Save Settings  ", Style::default().fg(COLOR_DIM)),
        Span::styled(state.save_status.label(), Style::default().fg(color)),
    ])
}

fn field_line(field: &ContentField, content: &ContentSettings, selected: bool) -> Line<'static> {
    let marker = if selected { "›" } else { " " };
    let body = match field.checked(content) {
        Some(checked) => format!(
            "{} [{}] {}",
            marker,
            if checked { "x" } else { " " },
            field.label(content)
        ),
        None => {
            let mut text = format!("{} {:<20} < {} >", marker, field.label(content), field.value(content));
            if *field == ContentField::Creativity {
                let filled = (content.ai_config.creativity_level as usize).min(100) / 10;
                text.push_str(&format!("  {}{}", "█".repeat(filled), "░".repeat(10 - filled)));
            }
            text
        }
    };
    Line::from(Span::styled(body, row_style(selected)))
}

/// Lines grouped by section, plus the index of the cursor's line.
fn field_lines(content: &ContentSettings, cursor: usize) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut cursor_line = 0;
    let mut current_section = "";
    for (i, field) in content_fields().iter().enumerate() {
        if field.section() != current_section {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            current_section = field.section();
            lines.push(section(current_section));
        }
        if i == cursor {
            cursor_line = lines.len();
        }
        lines.push(field_line(field, content, i == cursor));
    }
    (lines, cursor_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_field_lines_group_sections() {
        let (lines, cursor_line) = field_lines(&fixtures::content_settings(), 0);
        assert_eq!(text(&lines[0]), "Content Types");
        assert_eq!(cursor_line, 1);
        assert!(text(&lines[1]).contains("[x] Facts & Trivia"));
        assert!(lines.iter().any(|l| text(l) == "Media Settings"));
    }

    #[test]
    fn test_creativity_line_shows_bar() {
        let content = fixtures::content_settings();
        let line = field_line(&ContentField::Creativity, &content, true);
        let text = text(&line);
        assert!(text.contains("< 70% >"));
        assert!(text.contains("███████░░░"));
    }

    #[test]
    fn test_save_line_reports_status() {
        let state = SettingsState {
            save_status: SaveStatus::Success,
            ..Default::default()
        };
        assert!(text(&save_line(&state)).contains("Settings saved"));
    }
}
