//! Dashboard page: summary cards, system health, queue and activity.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{cards_height, render_cards, render_state};
use crate::app::App;
use crate::models::{DashboardSnapshot, Platform, QueueStatus, SystemStatus};
use crate::ui::components::{health_line, MetricCard};
use crate::ui::helpers::{format_change, format_thousands, relative_time, truncate_string};
use crate::ui::theme::{activity_color, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

pub fn render(frame: &mut Frame, area: Rect, app: &App, now: DateTime<Utc>) {
    let state = app.context.dashboard.snapshot();
    let Some(area) = render_state(
        frame,
        area,
        state.data.is_some(),
        state.error.as_deref(),
        "Loading dashboard...",
        app.tick_count,
    ) else {
        return;
    };
    if let Some(data) = &state.data {
        render_data(frame, area, data, now);
    }
}

pub(super) fn summary_cards(data: &DashboardSnapshot) -> Vec<MetricCard> {
    let mut cards = Vec::new();
    if let Some(summary) = &data.summary {
        cards.extend([
            MetricCard::new("Total Posts", format_thousands(summary.total_posts)),
            MetricCard::new("Active Accounts", summary.active_accounts.to_string()),
            MetricCard::new("Scheduled Posts", summary.scheduled_posts.to_string()),
            MetricCard::new("Engagement Rate", format!("{}%", summary.engagement_rate)),
        ]);
    }
    if let Some(metrics) = &data.metrics {
        let change_color = if metrics.posts_today_change < 0 {
            COLOR_ERROR
        } else {
            COLOR_SUCCESS
        };
        let platforms = &metrics.platforms_active;
        let badges = Platform::ALL
            .iter()
            .map(|p| {
                let on = match p {
                    Platform::Instagram => platforms.instagram,
                    Platform::Tiktok => platforms.tiktok,
                };
                format!("{} {}", p.short(), if on { "✅" } else { "❌" })
            })
            .collect::<Vec<_>>()
            .join(" ");
        cards.extend([
            MetricCard::new("Posts Today", metrics.posts_today.to_string()).detail(
                format!("{} from yesterday", format_change(metrics.posts_today_change)),
                change_color,
            ),
            MetricCard::new("Next Post", metrics.next_post_time.clone()).detail(
                format!("in {} minutes", metrics.next_post_in_minutes),
                COLOR_DIM,
            ),
            MetricCard::new(
                "Platforms Active",
                format!("{}/{}", platforms.active_count(), crate::models::PlatformsActive::total()),
            )
            .detail(badges, COLOR_DIM),
            MetricCard::new("System Uptime", format!("{}%", metrics.uptime_percentage))
                .detail(format!("{} days", metrics.uptime_days), COLOR_SUCCESS),
        ]);
    }
    cards
}

fn health_lines(status: Option<&SystemStatus>, now: DateTime<Utc>) -> Vec<Line<'static>> {
    let Some(status) = status else {
        return vec![Line::from(Span::styled(
            " Status unavailable",
            Style::default().fg(COLOR_DIM),
        ))];
    };
    vec![
        health_line("API Server", status.api_server.health(), status.api_server.label()),
        health_line(
            "Content Gen",
            status.content_generator.health(),
            status.content_generator.label(),
        ),
        health_line("Scheduler", status.scheduler.health(), status.scheduler.label()),
        health_line("Database", status.database.health(), status.database.label()),
        Line::from(""),
        Line::from(Span::styled(
            format!(" Last Updated: {}", relative_time(status.last_updated, now)),
            Style::default().fg(COLOR_DIM),
        )),
    ]
}

fn queue_lines(queue: Option<&QueueStatus>) -> Vec<Line<'static>> {
    let Some(queue) = queue else {
        return vec![Line::from(Span::styled(
            " Queue unavailable",
            Style::default().fg(COLOR_DIM),
        ))];
    };
    let mut lines = vec![
        Line::from(format!(" Pending Tasks   {}", queue.pending_tasks)),
        Line::from(format!(" Processing      {}", queue.processing)),
    ];
    if queue.failed > 0 {
        lines.push(Line::from(Span::styled(
            format!(" Failed          {}", queue.failed),
            Style::default().fg(COLOR_ERROR),
        )));
    }
    lines
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" {} ", title))
}

fn render_data(frame: &mut Frame, area: Rect, data: &DashboardSnapshot, now: DateTime<Utc>) {
    let cards = summary_cards(data);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(cards_height(area.width, cards.len())),
            Constraint::Min(8),
        ])
        .split(area);
    render_cards(frame, rows[0], &cards);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    frame.render_widget(
        Paragraph::new(health_lines(data.system_status.as_ref(), now)).block(panel("System Health")),
        cols[0],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(cols[1]);
    frame.render_widget(
        Paragraph::new(queue_lines(data.queue_status.as_ref())).block(panel("Queue Status")),
        right[0],
    );

    let width = right[1].width.saturating_sub(16) as usize;
    let activity: Vec<Line> = if data.activity.is_empty() {
        vec![Line::from(Span::styled(" No recent activity", Style::default().fg(COLOR_DIM)))]
    } else {
        data.activity
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled(" ● ", Style::default().fg(activity_color(item.status))),
                    Span::raw(truncate_string(&item.message, width)),
                    Span::styled(
                        format!("  {}", relative_time(item.timestamp, now)),
                        Style::default().fg(COLOR_DIM),
                    ),
                ])
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(activity).block(panel("Recent Activity")), right[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_summary_cards_format_values() {
        let cards = summary_cards(&fixtures::dashboard_snapshot(Utc::now()));
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["1,247", "23", "156", "8.4%", "12", "15:45", "2/2", "99.97%"]
        );
        assert_eq!(cards[4].detail, "+3 from yesterday");
        assert_eq!(cards[6].detail, "IG ✅ TT ✅");
    }

    #[test]
    fn test_cards_skip_missing_sections() {
        let mut data = fixtures::dashboard_snapshot(Utc::now());
        data.metrics = None;
        assert_eq!(summary_cards(&data).len(), 4);
    }

    #[test]
    fn test_health_lines_fallback() {
        let lines = health_lines(None, Utc::now());
        assert_eq!(lines.len(), 1);
    }
}
