//! System logs page: error summary, filters and the filtered log list.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{cards_height, render_cards, render_state};
use crate::app::App;
use crate::models::{ErrorSummary, LogEntry, LogFilters};
use crate::store::LogsState;
use crate::ui::components::MetricCard;
use crate::ui::theme::{log_level_color, COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_WARNING};

pub fn render(frame: &mut Frame, area: Rect, app: &App, now: DateTime<Utc>) {
    let state = app.context.logs.snapshot();
    let Some(area) = render_state(
        frame,
        area,
        state.logs.is_some(),
        state.error.as_deref(),
        "Loading logs...",
        app.tick_count,
    ) else {
        return;
    };

    let cards = state.summary.as_ref().map(summary_cards).unwrap_or_default();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(cards_height(area.width, cards.len())),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    render_cards(frame, rows[0], &cards);
    frame.render_widget(
        Paragraph::new(filter_line(&state, app.log_search_active)),
        rows[1],
    );

    let visible = state.visible_logs(now);
    let lines: Vec<Line> = if visible.is_empty() {
        vec![Line::from(Span::styled(
            "No log entries match the current filters",
            Style::default().fg(COLOR_DIM),
        ))]
    } else {
        visible.iter().flat_map(entry_lines).collect()
    };
    frame.render_widget(Paragraph::new(lines), rows[2]);
}

fn summary_cards(summary: &ErrorSummary) -> Vec<MetricCard> {
    let top = summary
        .top_errors
        .first()
        .map(|e| format!("top: {} ({})", e.kind, e.count))
        .unwrap_or_default();
    vec![
        MetricCard::new("Critical", summary.critical.to_string()).detail(top, COLOR_ERROR),
        MetricCard::new("Errors", summary.errors.to_string()),
        MetricCard::new("Warnings", summary.warnings.to_string()),
        MetricCard::new("Info", summary.info.to_string()),
    ]
}

fn filter_line(state: &LogsState, search_active: bool) -> Line<'static> {
    let LogFilters {
        time_range,
        severity,
        search,
        ..
    } = &state.filters;
    let cursor = if search_active { "_" } else { "" };
    let refresh = if state.auto_refresh { "on" } else { "off" };
    let label = Style::default().fg(COLOR_DIM);
    let value = Style::default().fg(COLOR_ACCENT);

    Line::from(vec![
        Span::styled("Time ", label),
        Span::styled(time_range.clone(), value),
        Span::styled("   Severity ", label),
        Span::styled(severity.clone(), value),
        Span::styled("   Search ", label),
        Span::styled(format!("{}{}", search, cursor), value),
        Span::styled("   Auto-refresh ", label),
        Span::styled(
            refresh,
            if state.auto_refresh {
                Style::default().fg(COLOR_WARNING)
            } else {
                value
            },
        ),
    ])
}

fn entry_lines(entry: &LogEntry) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            entry.timestamp.format("%m-%d %H:%M:%S ").to_string(),
            Style::default().fg(COLOR_DIM),
        ),
        Span::styled(
            format!("{:<9}", entry.level.as_str().to_uppercase()),
            Style::default()
                .fg(log_level_color(entry.level))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{:<20}", entry.module), Style::default().fg(COLOR_ACCENT)),
        Span::raw(entry.message.clone()),
    ])];

    if let Some(details) = &entry.details {
        lines.push(Line::from(Span::styled(
            format!("    {}", details),
            Style::default().fg(COLOR_DIM),
        )));
    }
    if let Some(actions) = entry.actions.as_ref().filter(|a| !a.is_empty()) {
        let labels: Vec<String> = actions.iter().map(|a| format!("[{}]", a.label)).collect();
        lines.push(Line::from(Span::styled(
            format!("    {}", labels.join(" ")),
            Style::default().fg(COLOR_DIM),
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_entry_lines_include_details_and_actions() {
        let logs = fixtures::logs(Utc::now());
        let error = logs.iter().find(|l| l.actions.is_some()).unwrap();
        let lines = entry_lines(error);
        assert!(lines.len() >= 2);
        assert!(text(&lines[0]).contains(&error.message));
    }

    #[test]
    fn test_filter_line_marks_search_cursor() {
        let mut state = LogsState::default();
        state.filters.search = "api".to_string();
        let line = text(&filter_line(&state, true));
        assert!(line.contains("Search api_"));
        assert!(line.contains("Auto-refresh off"));
    }

    #[test]
    fn test_summary_cards() {
        let cards = summary_cards(&fixtures::error_summary());
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[2].value, "12");
    }
}
