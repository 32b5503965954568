//! Page renderers, one module per route.
//!
//! Every page follows the same state rules: with no data yet and no error
//! it shows a spinner; with an error it shows the banner (above stale data
//! when there is some); otherwise it renders its data.

mod accounts;
mod analytics;
mod content;
mod dashboard;
pub mod login;
mod logs;
mod scheduling;

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::components::{
    render_metric_card, render_status_indicator, MetricCard, StatusIndicatorType,
};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::app::{App, Route};

/// Rows taken by one row of metric cards.
const CARD_HEIGHT: u16 = 4;

pub fn subtitle(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "Monitor your ViralForge AI system performance",
        Route::Content => "Configure AI content generation",
        Route::Scheduling => "Plan when and how often content is posted",
        Route::Accounts => "Manage connected social media accounts",
        Route::Analytics => "Track your content performance",
        Route::Logs => "Monitor system activity and errors",
        Route::Login => "",
    }
}

/// Render the current route's page into `area`.
pub fn render_page(frame: &mut Frame, area: Rect, app: &App) {
    let area = area.inner(ratatui::layout::Margin::new(1, 0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    render_header(frame, rows[0], app.route);

    let now = Utc::now();
    let body = rows[1];
    match app.route {
        Route::Dashboard => dashboard::render(frame, body, app, now),
        Route::Content => content::render(frame, body, app),
        Route::Scheduling => scheduling::render(frame, body, app),
        Route::Accounts => accounts::render(frame, body, app, now),
        Route::Analytics => analytics::render(frame, body, app),
        Route::Logs => logs::render(frame, body, app, now),
        Route::Login => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect, route: Route) {
    let lines = vec![
        Line::from(Span::styled(
            route.title(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle(route), Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Handle the no-data and error states shared by every page.
///
/// Returns the area left for data, or `None` when there is nothing more to
/// draw.
fn render_state(
    frame: &mut Frame,
    area: Rect,
    has_data: bool,
    error: Option<&str>,
    loading_message: &str,
    tick: u64,
) -> Option<Rect> {
    match (has_data, error) {
        (false, None) => {
            let spinner = StatusIndicatorType::spinner(loading_message, tick);
            frame.render_widget(Paragraph::new(render_status_indicator(&spinner)), area);
            None
        }
        (false, Some(message)) => {
            let banner = StatusIndicatorType::error(message);
            frame.render_widget(Paragraph::new(render_status_indicator(&banner)), area);
            None
        }
        (true, Some(message)) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(area);
            let banner = StatusIndicatorType::error(message);
            frame.render_widget(Paragraph::new(render_status_indicator(&banner)), rows[0]);
            Some(rows[1])
        }
        (true, None) => Some(area),
    }
}

/// Height needed for `count` cards at this width.
fn cards_height(width: u16, count: usize) -> u16 {
    let columns = LayoutContext::metric_columns(width);
    (count.div_ceil(columns) as u16) * CARD_HEIGHT
}

/// Lay out metric cards in a grid.
fn render_cards(frame: &mut Frame, area: Rect, cards: &[MetricCard]) {
    let columns = LayoutContext::metric_columns(area.width);
    let row_count = cards.len().div_ceil(columns);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); row_count])
        .split(area);

    for (row_area, chunk) in rows.iter().zip(cards.chunks(columns)) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for (cell, card) in cells.iter().zip(chunk) {
            render_metric_card(frame, *cell, card);
        }
    }
}

/// Style for the row under the cursor.
fn row_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .bg(super::theme::COLOR_SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Section heading line.
fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(super::theme::COLOR_BRAND)
            .add_modifier(Modifier::BOLD),
    ))
}
