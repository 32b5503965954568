//! HTTP client wrapper for the ViralForge backend.
//!
//! Adds the base URL, the bearer token and the JSON content type to every
//! request, bounds each request by the configured timeout, and collapses
//! every failure into an [`ApiError`]. A 401 answer clears the stored token
//! and redirects to the login route before the error is returned.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::app::Route;
use crate::config::AdminConfig;
use crate::error::ApiError;
use crate::traits::{Headers, HttpClient, HttpError, Navigator, Response, TokenStore};

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Single-shot request/response client. No retries.
pub struct ApiClient {
    config: AdminConfig,
    http: Arc<dyn HttpClient>,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: AdminConfig,
        http: Arc<dyn HttpClient>,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            http,
            tokens,
            navigator,
        }
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// The token store the bearer token is read from.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    fn request_headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(token) = self.tokens.load() {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    fn normalize_transport(&self, err: HttpError) -> ApiError {
        match err {
            HttpError::Timeout(_) => ApiError::timeout(self.config.timeout_ms),
            HttpError::InvalidUrl(detail) => ApiError::invalid_url(&detail),
            HttpError::ConnectionFailed(_) | HttpError::Io(_) | HttpError::Other(_) => {
                ApiError::network()
            }
        }
    }

    fn handle_unauthorized(&self, method: Method, url: &str) {
        tracing::warn!("{} {} returned 401, clearing token", method.as_str(), url);
        if let Err(e) = self.tokens.clear() {
            tracing::warn!("Failed to clear auth token: {}", e);
        }
        self.navigator.redirect(Route::Login);
    }

    /// Issue one request and return the raw 2xx response.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<Response, ApiError> {
        let url = self.config.url_for(path);
        let headers = self.request_headers();
        let body = body.unwrap_or("");

        tracing::debug!("{} {}", method.as_str(), url);

        let request = async {
            match method {
                Method::Get => self.http.get(&url, &headers).await,
                Method::Post => self.http.post(&url, body, &headers).await,
                Method::Put => self.http.put(&url, body, &headers).await,
                Method::Delete => self.http.delete(&url, &headers).await,
            }
        };

        let response = match tokio::time::timeout(self.config.timeout(), request).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                tracing::debug!("{} {} failed: {}", method.as_str(), url, err);
                return Err(self.normalize_transport(err));
            }
            Err(_) => {
                tracing::debug!("{} {} timed out", method.as_str(), url);
                return Err(ApiError::timeout(self.config.timeout_ms));
            }
        };

        if response.is_success() {
            return Ok(response);
        }

        if response.status == 401 {
            self.handle_unauthorized(method, &url);
        }
        Err(ApiError::from_status(response.status))
    }

    fn decode<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
        response
            .json()
            .map_err(|e| ApiError::decode(response.status, &e.to_string()))
    }

    fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
        serde_json::to_string(body).map_err(|e| ApiError::encode(&e.to_string()))
    }

    /// `GET path`, decoding the body as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::Get, path, None).await?;
        Self::decode(&response)
    }

    /// `POST path` with a JSON body, decoding the answer as `T`.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::encode(body)?;
        let response = self.send(Method::Post, path, Some(&body)).await?;
        Self::decode(&response)
    }

    /// `POST path` with a JSON body, ignoring the answer body.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let body = Self::encode(body)?;
        self.send(Method::Post, path, Some(&body)).await.map(|_| ())
    }

    /// `PUT path` with a JSON body, decoding the answer as `T`.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::encode(body)?;
        let response = self.send(Method::Put, path, Some(&body)).await?;
        Self::decode(&response)
    }

    /// `DELETE path`, ignoring the answer body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{
        InMemoryTokenStore, MockHttpClient, MockResponse, RecordingNavigator,
    };
    use std::time::Duration;

    const BASE: &str = "http://api.test/api";

    struct Harness {
        http: Arc<MockHttpClient>,
        tokens: InMemoryTokenStore,
        navigator: RecordingNavigator,
        client: ApiClient,
    }

    fn harness(token: Option<&str>) -> Harness {
        let http = Arc::new(MockHttpClient::new());
        let tokens = match token {
            Some(t) => InMemoryTokenStore::with_token(t),
            None => InMemoryTokenStore::new(),
        };
        let navigator = RecordingNavigator::new();
        let config = AdminConfig::default().with_base_url(BASE).with_timeout_ms(1_000);
        let client = ApiClient::new(
            config,
            http.clone(),
            Arc::new(tokens.clone()),
            Arc::new(navigator.clone()),
        );
        Harness {
            http,
            tokens,
            navigator,
            client,
        }
    }

    #[tokio::test]
    async fn test_bearer_header_when_token_present() {
        let h = harness(Some("abc123"));
        h.http.set_response(
            "http://api.test/api/health",
            MockResponse::json(200, serde_json::json!({"status": "ok"})),
        );

        h.client.send(Method::Get, "/health", None).await.unwrap();

        let requests = h.http.get_requests();
        assert_eq!(requests[0].authorization(), Some("Bearer abc123"));
        assert_eq!(
            requests[0].headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_unsized_bodies_are_encoded() {
        let h = harness(Some("abc123"));
        h.http
            .set_default_response(MockResponse::json(200, serde_json::json!({"ok": true})));

        h.client.post("/content/generate", "launch day").await.unwrap();
        let ids: &[u32] = &[1, 2];
        let answer: serde_json::Value = h.client.put_json("/accounts/order", ids).await.unwrap();
        let _: serde_json::Value = h.client.post_json("/tags", ["a", "b"].as_slice()).await.unwrap();

        assert_eq!(answer["ok"], true);
        let bodies: Vec<_> = h.http.get_requests().into_iter().map(|r| r.body).collect();
        assert_eq!(
            bodies,
            vec![
                Some("\"launch day\"".to_string()),
                Some("[1,2]".to_string()),
                Some("[\"a\",\"b\"]".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_authorization_without_token() {
        let h = harness(None);
        h.http
            .set_default_response(MockResponse::json(200, serde_json::json!({})));

        h.client.send(Method::Get, "/health", None).await.unwrap();

        assert_eq!(h.http.get_requests()[0].authorization(), None);
    }

    #[tokio::test]
    async fn test_401_clears_token_and_redirects() {
        let h = harness(Some("stale"));
        h.http.set_default_response(MockResponse::status(401));

        let err = h.client.send(Method::Get, "/accounts", None).await.unwrap_err();

        assert_eq!(err.status, 401);
        assert!(err.is_unauthorized());
        assert_eq!(h.tokens.load(), None);
        assert_eq!(h.navigator.last(), Some(Route::Login));
    }

    #[tokio::test]
    async fn test_non_401_failure_keeps_token() {
        let h = harness(Some("good"));
        h.http.set_default_response(MockResponse::status(500));

        let err = h.client.send(Method::Get, "/error", None).await.unwrap_err();

        assert_eq!(err.message, "Request failed with status code 500");
        assert_eq!(err.error_code(), "ERR_BAD_RESPONSE");
        assert_eq!(h.tokens.load(), Some("good".to_string()));
        assert!(h.navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let h = harness(None);
        h.http.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));

        let err = h.client.send(Method::Get, "/health", None).await.unwrap_err();

        assert_eq!(err.message, "Network Error");
        assert_eq!(err.status, 500);
        assert_eq!(err.error_code(), "ERR_NETWORK");
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_response_times_out() {
        let h = harness(None);
        h.http.set_default_response(MockResponse::Delayed(
            Duration::from_secs(5),
            Box::new(MockResponse::json(200, serde_json::json!({}))),
        ));

        let err = h.client.send(Method::Get, "/health", None).await.unwrap_err();

        assert_eq!(err.message, "timeout of 1000ms exceeded");
        assert_eq!(err.error_code(), "ECONNABORTED");
    }

    #[tokio::test]
    async fn test_bad_body_is_decode_error() {
        let h = harness(None);
        h.http
            .set_default_response(MockResponse::json(200, serde_json::json!({"nope": true})));

        let err = h
            .client
            .get_json::<crate::models::SummaryMetrics>("/dashboard/metrics")
            .await
            .unwrap_err();

        assert_eq!(err.status, 200);
        assert_eq!(err.error_code(), "ERR_DECODE");
    }

    #[tokio::test]
    async fn test_put_sends_json_body() {
        let h = harness(None);
        h.http.set_method_response(
            "PUT",
            "http://api.test/api/content/settings",
            MockResponse::json(200, serde_json::json!({"ok": true})),
        );

        let answer: serde_json::Value = h
            .client
            .put_json("/content/settings", &serde_json::json!({"tone": "casual"}))
            .await
            .unwrap();

        assert_eq!(answer["ok"], true);
        let request = &h.http.get_requests()[0];
        assert_eq!(request.method, "PUT");
        assert_eq!(request.body.as_deref(), Some(r#"{"tone":"casual"}"#));
    }
}
