//! Layout shell: top bar, sidebar, footer and the menu overlays.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_ERROR, COLOR_SELECTED_BG,
    COLOR_WARNING,
};
use crate::app::{App, Route};

pub const BRAND_NAME: &str = "ViralForge AI";

/// User initials shown in the top bar.
const USER_INITIALS: &str = "AD";

pub const USER_MENU_ITEMS: [&str; 3] = ["Profile Settings", "API Keys", "Sign Out"];

pub fn render_top_bar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(inner);

    let brand = Line::from(vec![
        Span::styled(
            " V ",
            Style::default()
                .fg(COLOR_ACCENT)
                .bg(COLOR_BRAND)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", BRAND_NAME),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", app.context.config.environment),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(brand), cols[0]);

    let user = Line::from(vec![
        Span::styled("🔔", Style::default().fg(COLOR_DIM)),
        Span::styled("• ", Style::default().fg(COLOR_ERROR)),
        Span::styled(
            format!(" {} ", USER_INITIALS),
            Style::default().fg(COLOR_ACCENT).bg(COLOR_BRAND),
        ),
        Span::styled(" [u]", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(user).alignment(Alignment::Right), cols[1]);
}

fn nav_lines(active: Route, collapsed: bool) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Route::NAV
        .iter()
        .enumerate()
        .map(|(i, route)| {
            let selected = *route == active;
            let style = if selected {
                Style::default()
                    .fg(COLOR_BRAND)
                    .bg(COLOR_SELECTED_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_ACCENT)
            };
            let text = if collapsed {
                format!(" {} ", route.icon())
            } else {
                format!(" {} {}  {}", route.icon(), route.label(), i + 1)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    lines.push(Line::from(""));
    let toggle = if collapsed { " » " } else { " « Collapse [" };
    lines.push(Line::from(Span::styled(toggle, Style::default().fg(COLOR_DIM))));
    lines
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER));
    let lines = nav_lines(app.route, app.shell.sidebar_collapsed);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Keybinding hints for the current page.
pub fn key_hints(route: Route) -> &'static str {
    match route {
        Route::Dashboard | Route::Analytics => "[1-6] pages  [r] refresh",
        Route::Content => "[↑↓] select  [space] toggle  [+/-] adjust  [s] save",
        Route::Scheduling => "[↑↓] select  [space] toggle  [+/-] adjust  [s] save",
        Route::Accounts => "[↑↓] select  [i/t] connect  [d] disconnect  [f] refresh token",
        Route::Logs => "[v] severity  [t] time  [/] search  [a] auto-refresh",
        Route::Login => "[enter] sign in  [esc] quit",
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let left = match &app.status_message {
        Some(message) => Span::styled(format!(" {}", message), Style::default().fg(COLOR_WARNING)),
        None => Span::styled(format!(" {}", key_hints(app.route)), Style::default().fg(COLOR_DIM)),
    };
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16)])
        .split(area);
    frame.render_widget(Paragraph::new(Line::from(left)), cols[0]);
    frame.render_widget(
        Paragraph::new(Span::styled("[[] menu  [q] quit ", Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Right),
        cols[1],
    );
}

/// Navigation overlay for terminals too narrow for the sidebar.
pub fn render_mobile_menu(frame: &mut Frame, area: Rect, app: &App) {
    let config = DialogFrameConfig::new("Navigate", 24, Route::NAV.len() as u16 + 2);
    let inner = render_dialog_frame(frame, area, &config);
    frame.render_widget(Paragraph::new(nav_lines(app.route, false)), inner);
}

pub fn render_user_menu(frame: &mut Frame, area: Rect) {
    let config = DialogFrameConfig::new("Admin", 24, USER_MENU_ITEMS.len() as u16);
    let inner = render_dialog_frame(frame, area, &config);
    let lines: Vec<Line> = USER_MENU_ITEMS
        .iter()
        .map(|item| {
            if *item == "Sign Out" {
                Line::from(vec![
                    Span::styled(format!(" {}", item), Style::default().fg(COLOR_ERROR)),
                    Span::styled("  [o]", Style::default().fg(COLOR_DIM)),
                ])
            } else {
                Line::from(Span::styled(format!(" {}", item), Style::default().fg(COLOR_DIM)))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_nav_lists_every_page_in_order() {
        let lines = text(&nav_lines(Route::Dashboard, false));
        assert!(lines[0].contains("Dashboard"));
        assert!(lines[5].contains("Logs"));
        assert!(lines[7].contains("Collapse"));
    }

    #[test]
    fn test_collapsed_nav_shows_icons_only() {
        let lines = text(&nav_lines(Route::Logs, true));
        assert!(!lines[0].contains("Dashboard"));
        assert_eq!(lines[0].trim(), Route::Dashboard.icon());
    }
}
