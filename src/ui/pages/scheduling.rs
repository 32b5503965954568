//! Scheduling page.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::content::save_line;
use super::{render_state, row_style, section};
use crate::app::forms::SCHEDULE_FIELDS;
use crate::app::App;
use crate::models::ScheduleSettings;
use crate::ui::theme::COLOR_DIM;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.context.settings.snapshot();
    let Some(area) = render_state(
        frame,
        area,
        state.schedule.is_some(),
        state.error.as_deref(),
        "Loading schedule...",
        app.tick_count,
    ) else {
        return;
    };
    let Some(schedule) = &state.schedule else {
        return;
    };

    let mut lines = vec![save_line(&state), Line::from("")];
    lines.extend(schedule_lines(schedule, app.schedule_cursor));
    frame.render_widget(Paragraph::new(lines), area);
}

fn schedule_lines(schedule: &ScheduleSettings, cursor: usize) -> Vec<Line<'static>> {
    let mut lines = vec![section("Posting")];
    for (i, field) in SCHEDULE_FIELDS.iter().enumerate() {
        let selected = i == cursor;
        let marker = if selected { "›" } else { " " };
        lines.push(Line::from(Span::styled(
            format!("{} {:<26} < {} >", marker, field.label(), field.value(schedule)),
            row_style(selected),
        )));
    }

    lines.push(Line::from(""));
    lines.push(section("Time Windows"));
    for (name, window) in schedule.time_windows.named() {
        lines.push(Line::from(format!(
            "  {:<10} {} - {}",
            name,
            window.start(),
            window.end()
        )));
    }

    lines.push(Line::from(""));
    lines.push(section("Time Zones"));
    lines.push(Line::from(format!("  {}", schedule.time_zones.join(", "))));

    lines.push(Line::from(""));
    lines.push(section("Blackout Dates"));
    if schedule.blackout_dates.is_empty() {
        lines.push(Line::from(Span::styled("  None", Style::default().fg(COLOR_DIM))));
    } else {
        lines.extend(
            schedule
                .blackout_dates
                .iter()
                .map(|d| Line::from(format!("  {}", d))),
        );
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_schedule_lines() {
        let lines = schedule_lines(&fixtures::schedule_settings(), 1);
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.to_string()).collect())
            .collect();
        assert!(text[2].starts_with("›"));
        assert!(text[2].contains("< 2 >"));
        assert!(text.iter().any(|l| l.contains("18:00 - 24:00")));
        assert!(text.iter().any(|l| l.contains("America/New_York")));
    }
}
