//! Full-screen rendering through the public API.

mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use common::{draw, fixture_app, settle};
use viralforge_admin::app::Route;

fn press(app: &mut viralforge_admin::app::App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[tokio::test]
async fn test_dashboard_shows_fixture_counters() {
    let mut app = fixture_app();
    app.start();
    settle().await;

    let screen = draw(&app, 140, 45);
    assert!(screen.contains("ViralForge AI"));
    assert!(screen.contains("1,247"));
    assert!(screen.contains("156"));
    assert!(screen.contains("Recent Activity"));
    assert!(screen.contains("development"));
}

#[tokio::test]
async fn test_each_page_shows_its_title() {
    let mut app = fixture_app();
    for route in Route::NAV {
        app.navigate(route);
        settle().await;
        let screen = draw(&app, 140, 45);
        assert!(
            screen.contains(route.title()),
            "{} page missing its title",
            route.path()
        );
    }
}

#[tokio::test]
async fn test_error_banner_offers_retry() {
    let backend = common::instant_backend();
    backend.fail_with("Network Error");
    let mut app = fixture_app();
    app.context = app.context.clone().with_stores(
        viralforge_admin::store::DashboardStore::new(std::sync::Arc::new(backend.clone())),
        app.context.settings.clone(),
        app.context.accounts.clone(),
        app.context.logs.clone(),
    );
    app.start();
    settle().await;

    let screen = draw(&app, 120, 40);
    assert!(screen.contains("Network Error"));
    assert!(screen.contains("retry"));

    backend.recover();
    press(&mut app, KeyCode::Char('r'));
    settle().await;
    let screen = draw(&app, 120, 40);
    assert!(!screen.contains("Network Error"));
    assert!(screen.contains("1,247"));
}

#[tokio::test]
async fn test_sidebar_collapses_and_hides_on_narrow_terminals() {
    let mut app = fixture_app();
    assert!(draw(&app, 120, 30).contains("Collapse"));

    press(&mut app, KeyCode::Char('['));
    assert!(app.shell.sidebar_collapsed);
    assert!(!draw(&app, 120, 30).contains("Collapse"));

    press(&mut app, KeyCode::Char('['));
    assert!(!draw(&app, 60, 30).contains("Collapse"));
}

#[tokio::test]
async fn test_sign_out_shows_login() {
    let mut app = fixture_app();
    press(&mut app, KeyCode::Char('u'));
    press(&mut app, KeyCode::Char('o'));

    assert_eq!(app.route, Route::Login);
    let screen = draw(&app, 100, 30);
    assert!(screen.contains("Sign In"));
    assert!(screen.contains("Signed out"));
}
