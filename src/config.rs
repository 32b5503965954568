//! Runtime configuration.
//!
//! Configuration comes from environment variables with builder-style
//! overrides for tests and CLI flags.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `VIRALFORGE_API_BASE_URL` | `http://localhost:8000/api` |
//! | `VIRALFORGE_API_TIMEOUT_MS` | `10000` |
//! | `VIRALFORGE_ENV` | `development` |
//! | `VIRALFORGE_DATA_MODE` | `mock` |
//! | `VIRALFORGE_TOKEN_PATH` | `~/.viralforge/auth.json` |

use std::path::PathBuf;
use std::time::Duration;

/// Default API base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default environment tag.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Where the stores get their data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataMode {
    /// Canned fixtures after an artificial delay.
    #[default]
    Mock,
    /// The real backend through the API client.
    Api,
}

impl DataMode {
    /// Parse `mock` / `api` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mock" => Some(DataMode::Mock),
            "api" | "live" => Some(DataMode::Api),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataMode::Mock => "mock",
            DataMode::Api => "api",
        }
    }
}

/// Configuration for the dashboard and its API client.
///
/// # Example
///
/// ```
/// use viralforge_admin::config::{AdminConfig, DataMode};
///
/// let config = AdminConfig::default()
///     .with_base_url("http://127.0.0.1:9000/api")
///     .with_data_mode(DataMode::Api);
/// assert_eq!(config.url_for("/health"), "http://127.0.0.1:9000/api/health");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdminConfig {
    /// Base URL every API path is appended to (no trailing slash)
    pub base_url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Environment tag shown in the top bar
    pub environment: String,
    /// Mock fixtures or live API
    pub data_mode: DataMode,
    /// Override for the token file location
    pub token_path: Option<PathBuf>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            data_mode: DataMode::Mock,
            token_path: None,
        }
    }
}

impl AdminConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the environment tag.
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Choose mock fixtures or the live API.
    pub fn with_data_mode(mut self, data_mode: DataMode) -> Self {
        self.data_mode = data_mode;
        self
    }

    /// Store the token somewhere other than the default location.
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Full URL for an API path such as `/dashboard/metrics`.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("VIRALFORGE_API_BASE_URL").filter(|v| !v.is_empty()) {
            config = config.with_base_url(url);
        }

        if let Some(raw) = lookup("VIRALFORGE_API_TIMEOUT_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.timeout_ms = ms,
                _ => tracing::warn!("Ignoring invalid VIRALFORGE_API_TIMEOUT_MS={:?}", raw),
            }
        }

        if let Some(env) = lookup("VIRALFORGE_ENV").filter(|v| !v.is_empty()) {
            config.environment = env;
        }

        if let Some(raw) = lookup("VIRALFORGE_DATA_MODE") {
            match DataMode::parse(&raw) {
                Some(mode) => config.data_mode = mode,
                None => tracing::warn!("Ignoring invalid VIRALFORGE_DATA_MODE={:?}", raw),
            }
        }

        if let Some(path) = lookup("VIRALFORGE_TOKEN_PATH").filter(|v| !v.is_empty()) {
            config.token_path = Some(PathBuf::from(path));
        }

        config
    }
}
