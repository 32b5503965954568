//! UI rendering for the ViralForge admin dashboard
//!
//! Layout:
//! - Top bar with brand, environment tag and user menu
//! - Left sidebar with one entry per page (collapsible, hidden when narrow)
//! - Page area: title, subtitle and the page body
//! - Footer with status message or keybind hints
//!
//! The login page replaces the whole shell.

mod components;
pub mod helpers;
pub mod layout;
mod pages;
mod shell;
pub mod theme;

pub use helpers::format_thousands;
pub use layout::LayoutContext;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Route};

/// Render the UI for the current route
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if app.route == Route::Login {
        pages::login::render(frame, area, app);
        return;
    }

    let ctx = LayoutContext::from_rect(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    shell::render_top_bar(frame, rows[0], app);

    let sidebar_width = ctx.sidebar_width(app.shell.sidebar_collapsed);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(rows[1]);
    if sidebar_width > 0 {
        shell::render_sidebar(frame, cols[0], app);
    }
    pages::render_page(frame, cols[1], app);
    shell::render_footer(frame, rows[2], app);

    if app.shell.mobile_menu_open {
        shell::render_mobile_menu(frame, area, app);
    }
    if app.shell.user_menu_open {
        shell::render_user_menu(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{settle, test_app};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[tokio::test]
    async fn test_dashboard_renders_loading_then_data() {
        let mut app = test_app();
        let text = draw(&app, 140, 40);
        assert!(text.contains("ViralForge AI"));
        assert!(text.contains("Loading dashboard..."));

        app.start();
        settle().await;
        let text = draw(&app, 140, 40);
        assert!(text.contains("1,247"));
        assert!(text.contains("8.4%"));
        assert!(text.contains("System Health"));
    }

    #[tokio::test]
    async fn test_every_page_renders_without_panic() {
        let mut app = test_app();
        for route in Route::NAV.iter().chain(std::iter::once(&Route::Login)) {
            app.navigate(*route);
            settle().await;
            for (w, h) in [(140, 40), (60, 16), (20, 5)] {
                let text = draw(&app, w, h);
                assert!(!text.trim().is_empty());
            }
        }
    }

    #[tokio::test]
    async fn test_narrow_terminal_hides_sidebar() {
        let app = test_app();
        let wide = draw(&app, 120, 30);
        let narrow = draw(&app, 70, 30);
        assert!(wide.contains("Collapse"));
        assert!(!narrow.contains("Collapse"));
    }

    #[tokio::test]
    async fn test_user_menu_overlay() {
        let mut app = test_app();
        app.shell.toggle_user_menu();
        let text = draw(&app, 120, 30);
        assert!(text.contains("Sign Out"));
    }

    #[tokio::test]
    async fn test_login_page_masks_token() {
        let mut app = test_app();
        app.navigate(Route::Login);
        app.login_input = "secret".to_string();
        let text = draw(&app, 100, 30);
        assert!(text.contains("••••••"));
        assert!(!text.contains("secret"));
    }
}
