//! `AdminConfig::from_env` against the real process environment.

use serial_test::serial;

use viralforge_admin::config::{AdminConfig, DataMode};

const VARS: [&str; 5] = [
    "VIRALFORGE_API_BASE_URL",
    "VIRALFORGE_API_TIMEOUT_MS",
    "VIRALFORGE_ENV",
    "VIRALFORGE_DATA_MODE",
    "VIRALFORGE_TOKEN_PATH",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_without_variables_uses_defaults() {
    clear_env();
    assert_eq!(AdminConfig::from_env(), AdminConfig::default());
}

#[test]
#[serial]
fn test_from_env_reads_every_variable() {
    clear_env();
    std::env::set_var("VIRALFORGE_API_BASE_URL", "https://api.example.com/api/");
    std::env::set_var("VIRALFORGE_API_TIMEOUT_MS", "2500");
    std::env::set_var("VIRALFORGE_ENV", "staging");
    std::env::set_var("VIRALFORGE_DATA_MODE", "api");
    std::env::set_var("VIRALFORGE_TOKEN_PATH", "/tmp/vf-token.json");

    let config = AdminConfig::from_env();
    clear_env();

    assert_eq!(config.base_url, "https://api.example.com/api");
    assert_eq!(config.timeout_ms, 2500);
    assert_eq!(config.environment, "staging");
    assert_eq!(config.data_mode, DataMode::Api);
    assert_eq!(
        config.token_path.as_deref(),
        Some(std::path::Path::new("/tmp/vf-token.json"))
    );
    assert_eq!(config.url_for("/health"), "https://api.example.com/api/health");
}

#[test]
#[serial]
fn test_from_env_ignores_invalid_values() {
    clear_env();
    std::env::set_var("VIRALFORGE_API_TIMEOUT_MS", "soon");
    std::env::set_var("VIRALFORGE_DATA_MODE", "carrier-pigeon");

    let config = AdminConfig::from_env();
    clear_env();

    assert_eq!(config.timeout_ms, AdminConfig::default().timeout_ms);
    assert_eq!(config.data_mode, DataMode::Mock);
}
