//! Backend health probe for `--health`.
//!
//! Hits `/health` through the same [`ApiService`] the dashboard uses, so the
//! configured base URL, timeout and stored token all apply.

use std::time::Instant;

use crate::api::ApiService;

/// Result of a health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheckResult {
    pub base_url: String,
    pub api_healthy: bool,
    pub response_time_ms: Option<u64>,
    pub token_present: bool,
}

/// Probe the API once and time the round trip.
pub async fn run_health_checks(api: &ApiService) -> HealthCheckResult {
    let client = api.client();
    let token_present = client.tokens().load().is_some();

    let start = Instant::now();
    let api_healthy = api.health_check().await;
    let elapsed = start.elapsed().as_millis() as u64;

    tracing::info!(
        "Health check against {}: healthy={} ({}ms)",
        client.config().base_url,
        api_healthy,
        elapsed
    );

    HealthCheckResult {
        base_url: client.config().base_url.clone(),
        api_healthy,
        response_time_ms: api_healthy.then_some(elapsed),
        token_present,
    }
}

/// Lines printed for a probe result.
pub fn format_health_check_results(result: &HealthCheckResult) -> Vec<String> {
    let mut lines = Vec::new();
    if result.api_healthy {
        match result.response_time_ms {
            Some(ms) => lines.push(format!("✓ API responding at {} ({}ms)", result.base_url, ms)),
            None => lines.push(format!("✓ API healthy at {}", result.base_url)),
        }
    } else {
        lines.push(format!("✗ API not responding at {}", result.base_url));
        lines.push("  Check VIRALFORGE_API_BASE_URL or start one with --serve-mock.".to_string());
    }

    if result.token_present {
        lines.push("✓ API token stored".to_string());
    } else {
        lines.push("• No API token stored; protected endpoints will return 401".to_string());
    }
    lines
}

/// Print probe results to stdout.
pub fn display_health_check_results(result: &HealthCheckResult) {
    println!();
    for line in format_health_check_results(result) {
        println!("{}", line);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{
        InMemoryTokenStore, MockHttpClient, MockResponse, RecordingNavigator,
    };
    use crate::api::ApiClient;
    use crate::config::AdminConfig;
    use std::sync::Arc;

    fn service(http: Arc<MockHttpClient>, tokens: InMemoryTokenStore) -> ApiService {
        ApiService::new(ApiClient::new(
            AdminConfig::default().with_base_url("http://mock/api"),
            http,
            Arc::new(tokens),
            Arc::new(RecordingNavigator::new()),
        ))
    }

    #[tokio::test]
    async fn test_healthy_api_reports_timing() {
        let http = Arc::new(MockHttpClient::new());
        http.set_response("http://mock/api/health", MockResponse::json(200, serde_json::json!({"status": "ok"})));
        let result = run_health_checks(&service(http, InMemoryTokenStore::with_token("t"))).await;

        assert!(result.api_healthy);
        assert!(result.token_present);
        assert!(result.response_time_ms.is_some());
        let lines = format_health_check_results(&result);
        assert!(lines[0].starts_with("✓ API responding at http://mock/api"));
    }

    #[tokio::test]
    async fn test_failing_api_is_unhealthy() {
        let http = Arc::new(MockHttpClient::new());
        http.set_response("http://mock/api/health", MockResponse::status(503));
        let result = run_health_checks(&service(http, InMemoryTokenStore::new())).await;

        assert!(!result.api_healthy);
        assert!(!result.token_present);
        assert_eq!(result.response_time_ms, None);
        let lines = format_health_check_results(&result);
        assert!(lines[0].starts_with("✗ API not responding"));
        assert!(lines.last().unwrap().contains("No API token"));
    }
}
