//! Key and message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::forms::{content_fields, SCHEDULE_FIELDS};
use super::{App, AppMessage, Route};
use crate::error::AdminResult;
use crate::models::{LogFiltersPatch, Platform};

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::Navigate(route) => {
                if route == Route::Login && self.route != Route::Login {
                    self.set_status("Session expired. Enter an API token to continue.");
                }
                self.navigate(route);
            }
            AppMessage::StoreUpdated => {}
            AppMessage::Status(message) => self.set_status(message),
            AppMessage::Quit => self.quit(),
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }
        if self.route == Route::Login {
            self.handle_login_key(key);
            return;
        }
        if self.log_search_active {
            self.handle_search_key(key);
            return;
        }
        if self.shell.user_menu_open {
            match key.code {
                KeyCode::Char('o') => self.sign_out(),
                KeyCode::Esc | KeyCode::Char('u') => self.shell.user_menu_open = false,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.navigate(Route::NAV[index]);
            }
            KeyCode::Tab => self.navigate(self.route.next()),
            KeyCode::BackTab => self.navigate(self.route.previous()),
            KeyCode::Char('[') => self.shell.toggle_sidebar(),
            KeyCode::Char('m') => self.shell.toggle_mobile_menu(),
            KeyCode::Char('u') => self.shell.toggle_user_menu(),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Esc => {
                if !self.shell.close_menus() {
                    self.status_message = None;
                }
            }
            _ => match self.route {
                Route::Content => self.handle_content_key(key),
                Route::Scheduling => self.handle_schedule_key(key),
                Route::Accounts => self.handle_accounts_key(key),
                Route::Logs => self.handle_logs_key(key),
                _ => {}
            },
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_login(),
            KeyCode::Backspace => {
                self.login_input.pop();
            }
            KeyCode::Esc => self.quit(),
            KeyCode::Char(c) => self.login_input.push(c),
            _ => {}
        }
    }

    /// Store the typed token and return to the dashboard.
    pub fn submit_login(&mut self) {
        let token = self.login_input.trim().to_string();
        if token.is_empty() {
            self.set_status("Enter an API token");
            return;
        }
        match self.context.tokens.save(&token) {
            Ok(()) => {
                tracing::info!("Token stored");
                self.login_input.clear();
                self.status_message = None;
                self.navigate(Route::Dashboard);
            }
            Err(e) => {
                tracing::error!("Failed to store token: {}", e);
                self.set_status(format!("Could not store token: {}", e));
            }
        }
    }

    /// Forget the token and show the login page.
    pub fn sign_out(&mut self) {
        if let Err(e) = self.context.tokens.clear() {
            tracing::warn!("Failed to clear token: {}", e);
        }
        self.navigate(Route::Login);
        self.set_status("Signed out");
    }

    fn handle_content_key(&mut self, key: KeyEvent) {
        let fields = content_fields();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.content_cursor = self.content_cursor.saturating_sub(1)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.content_cursor = (self.content_cursor + 1).min(fields.len() - 1)
            }
            KeyCode::Char('s') => self.save_settings(),
            code => {
                let Some(content) = self.context.settings.snapshot().content else {
                    return;
                };
                let field = fields[self.content_cursor.min(fields.len() - 1)];
                let patch = match code {
                    KeyCode::Char(' ') | KeyCode::Enter => field.toggle(&content),
                    KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                        field.adjust(&content, 1)
                    }
                    KeyCode::Char('-') | KeyCode::Left => field.adjust(&content, -1),
                    _ => None,
                };
                if let Some(patch) = patch {
                    let result = self.context.settings.update_content(patch);
                    self.report_update(result);
                }
            }
        }
    }

    fn handle_schedule_key(&mut self, key: KeyEvent) {
        let last = SCHEDULE_FIELDS.len() - 1;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.schedule_cursor = self.schedule_cursor.saturating_sub(1)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.schedule_cursor = (self.schedule_cursor + 1).min(last)
            }
            KeyCode::Char('s') => self.save_settings(),
            code => {
                let Some(schedule) = self.context.settings.snapshot().schedule else {
                    return;
                };
                let field = SCHEDULE_FIELDS[self.schedule_cursor.min(last)];
                let patch = match code {
                    KeyCode::Char(' ') | KeyCode::Enter => field.toggle(&schedule),
                    KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                        field.adjust(&schedule, 1)
                    }
                    KeyCode::Char('-') | KeyCode::Left => field.adjust(&schedule, -1),
                    _ => None,
                };
                if let Some(patch) = patch {
                    let result = self.context.settings.update_schedule(patch);
                    self.report_update(result);
                }
            }
        }
    }

    fn report_update(&mut self, result: AdminResult<bool>) {
        match result {
            Ok(true) => self.status_message = None,
            Ok(false) => self.set_status("Settings are still loading"),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Save settings in the background unless a save is already running.
    pub fn save_settings(&mut self) {
        if self.context.settings.is_saving() {
            return;
        }
        let store = self.context.settings.clone();
        self.spawn_task(async move { store.save().await });
    }

    fn handle_accounts_key(&mut self, key: KeyEvent) {
        let accounts = self.context.accounts.snapshot().accounts.unwrap_or_default();
        let selected = accounts
            .get(self.accounts_cursor.min(accounts.len().saturating_sub(1)))
            .map(|a| a.id.clone());
        let store = self.context.accounts.clone();

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.accounts_cursor = self.accounts_cursor.saturating_sub(1)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.accounts_cursor =
                    (self.accounts_cursor + 1).min(accounts.len().saturating_sub(1))
            }
            KeyCode::Char('i') => self.spawn_task(async move {
                store.connect(Platform::Instagram).await;
            }),
            KeyCode::Char('t') => self.spawn_task(async move {
                store.connect(Platform::Tiktok).await;
            }),
            KeyCode::Char('d') => {
                if let Some(id) = selected {
                    self.accounts_cursor = self.accounts_cursor.saturating_sub(1);
                    self.spawn_task(async move { store.disconnect(&id).await });
                }
            }
            KeyCode::Char('f') => {
                if let Some(id) = selected {
                    self.spawn_task(async move { store.refresh(&id).await });
                }
            }
            _ => {}
        }
    }

    fn handle_logs_key(&mut self, key: KeyEvent) {
        let filters = self.context.logs.snapshot().filters;
        match key.code {
            KeyCode::Char('a') => self.toggle_log_auto_refresh(),
            KeyCode::Char('v') => self.context.logs.update_filters(LogFiltersPatch {
                severity: Some(filters.next_severity().to_string()),
                ..Default::default()
            }),
            KeyCode::Char('t') => self.context.logs.update_filters(LogFiltersPatch {
                time_range: Some(filters.next_time_range().to_string()),
                ..Default::default()
            }),
            KeyCode::Char('/') => self.log_search_active = true,
            _ => {}
        }
    }

    /// Handle a bracketed paste: appended to the login token or log search.
    pub fn handle_paste(&mut self, text: &str) {
        let text = text.trim_end_matches(['\r', '\n']);
        if self.route == Route::Login {
            self.mark_dirty();
            self.login_input.push_str(text.trim());
        } else if self.log_search_active {
            self.mark_dirty();
            let mut search = self.context.logs.snapshot().filters.search;
            search.push_str(text);
            self.context.logs.update_filters(LogFiltersPatch {
                search: Some(search),
                ..Default::default()
            });
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let mut search = self.context.logs.snapshot().filters.search;
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.log_search_active = false;
                return;
            }
            KeyCode::Backspace => {
                search.pop();
            }
            KeyCode::Char(c) => search.push(c),
            _ => return,
        }
        self.context.logs.update_filters(LogFiltersPatch {
            search: Some(search),
            ..Default::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{settle, test_app};
    use super::*;
    use crate::store::SaveStatus;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn test_paste_fills_login_token() {
        let mut app = test_app();
        app.navigate(Route::Login);
        app.handle_paste("  pasted-token\n");
        assert_eq!(app.login_input, "pasted-token");

        app.navigate(Route::Dashboard);
        app.handle_paste("ignored");
        assert_eq!(app.login_input, "pasted-token");
    }

    #[tokio::test]
    async fn test_number_keys_navigate() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.route, Route::Accounts);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.route, Route::Analytics);
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_content_toggle_updates_store() {
        let mut app = test_app();
        app.navigate(Route::Content);
        settle().await;
        let before = app.context.settings.snapshot().content.unwrap();

        press(&mut app, KeyCode::Char(' '));

        let after = app.context.settings.snapshot().content.unwrap();
        assert_ne!(before.enabled_types, after.enabled_types);
        assert!(app.status_message.is_none());
    }

    #[tokio::test]
    async fn test_invalid_adjustment_shows_status() {
        let mut app = test_app();
        app.navigate(Route::Content);
        settle().await;

        // Creativity row
        app.content_cursor = 7;
        for _ in 0..7 {
            press(&mut app, KeyCode::Char('+'));
        }

        let level = app.context.settings.snapshot().content.unwrap().ai_config.creativity_level;
        assert_eq!(level, 100);
        assert!(app.status_message.is_some());
    }

    #[tokio::test]
    async fn test_save_key_runs_save() {
        let mut app = test_app();
        app.navigate(Route::Scheduling);
        settle().await;

        press(&mut app, KeyCode::Char('s'));
        settle().await;

        assert_eq!(app.context.settings.snapshot().save_status, SaveStatus::Success);
    }

    #[tokio::test]
    async fn test_login_submit_saves_token() {
        let mut app = test_app();
        app.navigate(Route::Login);
        type_text(&mut app, "secret-token");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.context.tokens.load().as_deref(), Some("secret-token"));
        assert_eq!(app.route, Route::Dashboard);
        assert!(app.login_input.is_empty());
    }

    #[tokio::test]
    async fn test_empty_login_is_rejected() {
        let mut app = test_app();
        app.navigate(Route::Login);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Login);
        assert_eq!(app.status_message.as_deref(), Some("Enter an API token"));
    }

    #[tokio::test]
    async fn test_sign_out_from_user_menu() {
        let mut app = test_app();
        app.context.tokens.save("t").unwrap();
        press(&mut app, KeyCode::Char('u'));
        press(&mut app, KeyCode::Char('o'));

        assert_eq!(app.route, Route::Login);
        assert!(app.context.tokens.load().is_none());
    }

    #[tokio::test]
    async fn test_navigate_message_to_login_sets_status() {
        let mut app = test_app();
        app.handle_message(AppMessage::Navigate(Route::Login));
        assert_eq!(app.route, Route::Login);
        assert!(app.status_message.unwrap().contains("Session expired"));
    }

    #[tokio::test]
    async fn test_log_filter_keys() {
        let mut app = test_app();
        app.navigate(Route::Logs);
        press(&mut app, KeyCode::Char('v'));
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "api");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));

        let filters = app.context.logs.snapshot().filters;
        assert_eq!(filters.severity, "info");
        assert_eq!(filters.search, "api");
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_disconnect_selected_account() {
        let mut app = test_app();
        app.navigate(Route::Accounts);
        settle().await;

        press(&mut app, KeyCode::Char('d'));
        settle().await;

        let accounts = app.context.accounts.snapshot().accounts.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id, "2");
    }
}
