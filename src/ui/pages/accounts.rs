//! Social accounts page.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{render_state, row_style};
use crate::app::App;
use crate::models::SocialAccount;
use crate::ui::helpers::relative_time;
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS, COLOR_WARNING};

/// Tokens expiring within this many days are flagged.
const EXPIRY_WARNING_DAYS: i64 = 7;

pub fn render(frame: &mut Frame, area: Rect, app: &App, now: DateTime<Utc>) {
    let state = app.context.accounts.snapshot();
    let Some(area) = render_state(
        frame,
        area,
        state.accounts.is_some(),
        state.error.as_deref(),
        "Loading accounts...",
        app.tick_count,
    ) else {
        return;
    };
    let accounts = state.accounts.unwrap_or_default();

    let lines: Vec<Line> = if accounts.is_empty() {
        vec![Line::from(Span::styled(
            "No accounts connected. Press [i] for Instagram or [t] for TikTok.",
            Style::default().fg(COLOR_DIM),
        ))]
    } else {
        let cursor = app.accounts_cursor.min(accounts.len() - 1);
        accounts
            .iter()
            .enumerate()
            .flat_map(|(i, account)| account_lines(account, i == cursor, now))
            .collect()
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn expiry_span(account: &SocialAccount, now: DateTime<Utc>) -> Span<'static> {
    let days = account.days_until_expiry(now);
    if account.is_expired(now) {
        Span::styled("Token expired", Style::default().fg(COLOR_ERROR))
    } else if days <= EXPIRY_WARNING_DAYS {
        Span::styled(
            format!("Token expires in {} days", days),
            Style::default().fg(COLOR_WARNING),
        )
    } else {
        Span::styled(
            format!("Token expires in {} days", days),
            Style::default().fg(COLOR_DIM),
        )
    }
}

fn account_lines(account: &SocialAccount, selected: bool, now: DateTime<Utc>) -> Vec<Line<'static>> {
    let (status, color) = if account.is_connected {
        ("Connected", COLOR_SUCCESS)
    } else {
        ("Disconnected", COLOR_ERROR)
    };
    let marker = if selected { "›" } else { " " };
    let last_post = account
        .last_post_at
        .map(|t| relative_time(t, now))
        .unwrap_or_else(|| "never".to_string());

    vec![
        Line::from(vec![
            Span::styled(
                format!("{} {:<10}", marker, account.platform.label()),
                row_style(selected).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{:<20}", account.username), row_style(selected)),
            Span::styled(status, Style::default().fg(color)),
        ]),
        Line::from(vec![
            Span::raw("    "),
            expiry_span(account, now),
            Span::styled(
                format!(
                    "  ·  {} posts this month  ·  last post {}",
                    account.monthly_posts, last_post
                ),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        Line::from(Span::styled(
            format!("    Permissions: {}", account.permissions.join(", ")),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(""),
    ]
}
