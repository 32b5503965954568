//! Routes and layout-shell state.

/// A page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Content,
    Scheduling,
    Accounts,
    Analytics,
    Logs,
    Login,
}

impl Route {
    /// Pages listed in the sidebar, in order.
    pub const NAV: [Route; 6] = [
        Route::Dashboard,
        Route::Content,
        Route::Scheduling,
        Route::Accounts,
        Route::Analytics,
        Route::Logs,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Content => "/content",
            Route::Scheduling => "/scheduling",
            Route::Accounts => "/accounts",
            Route::Analytics => "/analytics",
            Route::Logs => "/logs",
            Route::Login => "/login",
        }
    }

    /// Resolve a path. `/` resolves to the dashboard.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" | "/dashboard" => Some(Route::Dashboard),
            "/content" => Some(Route::Content),
            "/scheduling" => Some(Route::Scheduling),
            "/accounts" => Some(Route::Accounts),
            "/analytics" => Some(Route::Analytics),
            "/logs" => Some(Route::Logs),
            "/login" => Some(Route::Login),
            _ => None,
        }
    }

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Content => "Content",
            Route::Scheduling => "Scheduling",
            Route::Accounts => "Accounts",
            Route::Analytics => "Analytics",
            Route::Logs => "Logs",
            Route::Login => "Sign In",
        }
    }

    /// Page heading.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Content => "Content Settings",
            Route::Scheduling => "Scheduling",
            Route::Accounts => "Social Accounts",
            Route::Analytics => "Analytics",
            Route::Logs => "System Logs",
            Route::Login => "Sign In",
        }
    }

    /// Sidebar glyph shown when collapsed.
    pub fn icon(&self) -> &'static str {
        match self {
            Route::Dashboard => "◆",
            Route::Content => "✎",
            Route::Scheduling => "◷",
            Route::Accounts => "☺",
            Route::Analytics => "▤",
            Route::Logs => "≡",
            Route::Login => "→",
        }
    }

    /// Position in [`Route::NAV`], `None` for the login page.
    pub fn nav_index(&self) -> Option<usize> {
        Route::NAV.iter().position(|r| r == self)
    }

    /// The next sidebar page, wrapping around.
    pub fn next(&self) -> Route {
        match self.nav_index() {
            Some(i) => Route::NAV[(i + 1) % Route::NAV.len()],
            None => Route::Dashboard,
        }
    }

    /// The previous sidebar page, wrapping around.
    pub fn previous(&self) -> Route {
        match self.nav_index() {
            Some(i) => Route::NAV[(i + Route::NAV.len() - 1) % Route::NAV.len()],
            None => Route::Dashboard,
        }
    }
}

/// Presentation-only state of the layout shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    pub sidebar_collapsed: bool,
    /// Navigation overlay used when the terminal is too narrow for the sidebar
    pub mobile_menu_open: bool,
    pub user_menu_open: bool,
}

impl ShellState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    /// Close any open menu. Returns whether one was open.
    pub fn close_menus(&mut self) -> bool {
        let was_open = self.mobile_menu_open || self.user_menu_open;
        self.mobile_menu_open = false;
        self.user_menu_open = false;
        was_open
    }
}
