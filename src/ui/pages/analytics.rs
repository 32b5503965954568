//! Analytics page: performance overview and per-platform breakdown.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{cards_height, render_cards, render_state, section};
use crate::app::App;
use crate::models::{Platform, SocialAccount, SummaryMetrics};
use crate::ui::components::MetricCard;
use crate::ui::helpers::format_thousands;
use crate::ui::theme::{COLOR_BRAND, COLOR_DIM};

/// Width of the breakdown bars at 100%.
const BAR_WIDTH: usize = 30;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let dashboard = app.context.dashboard.snapshot();
    let summary = dashboard.data.as_ref().and_then(|d| d.summary.clone());
    let Some(area) = render_state(
        frame,
        area,
        dashboard.data.is_some(),
        dashboard.error.as_deref(),
        "Loading analytics...",
        app.tick_count,
    ) else {
        return;
    };

    let cards = summary.as_ref().map(overview_cards).unwrap_or_default();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(cards_height(area.width, cards.len())),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(section("Performance Overview")), rows[0]);
    render_cards(frame, rows[1], &cards);

    let accounts = app.context.accounts.snapshot().accounts.unwrap_or_default();
    let mut lines = vec![Line::from(""), section("Posts This Month by Platform")];
    lines.extend(breakdown_lines(&accounts));
    frame.render_widget(Paragraph::new(lines), rows[2]);
}

fn overview_cards(summary: &SummaryMetrics) -> Vec<MetricCard> {
    vec![
        MetricCard::new("Total Posts", format_thousands(summary.total_posts)),
        MetricCard::new("Engagement Rate", format!("{}%", summary.engagement_rate)),
        MetricCard::new("Active Accounts", summary.active_accounts.to_string()),
        MetricCard::new("Scheduled Posts", summary.scheduled_posts.to_string()),
    ]
}

/// Monthly post totals per platform with bars scaled to the busiest one.
fn breakdown_lines(accounts: &[SocialAccount]) -> Vec<Line<'static>> {
    let totals: Vec<(Platform, u32)> = Platform::ALL
        .iter()
        .map(|p| {
            let total = accounts
                .iter()
                .filter(|a| a.platform == *p)
                .map(|a| a.monthly_posts)
                .sum();
            (*p, total)
        })
        .collect();
    let max = totals.iter().map(|(_, t)| *t).max().unwrap_or(0);
    if max == 0 {
        return vec![Line::from(Span::styled(
            "  No posts yet",
            Style::default().fg(COLOR_DIM),
        ))];
    }

    totals
        .into_iter()
        .map(|(platform, total)| {
            let filled = (total as usize * BAR_WIDTH).div_ceil(max as usize);
            Line::from(vec![
                Span::raw(format!("  {:<10}", platform.label())),
                Span::styled("█".repeat(filled), Style::default().fg(COLOR_BRAND)),
                Span::raw(format!(" {}", total)),
            ])
        })
        .collect()
}
