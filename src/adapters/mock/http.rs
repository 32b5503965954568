//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors and records every request it receives.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET, POST, PUT or DELETE)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST and PUT requests)
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Value of the `Authorization` header, if one was sent.
    pub fn authorization(&self) -> Option<&str> {
        self.headers.get("Authorization").map(String::as_str)
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
    /// Wait before producing the inner response
    Delayed(Duration, Box<MockResponse>),
}

impl MockResponse {
    /// A JSON response with the given status.
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }

    /// An empty-bodied response with the given status.
    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::new(status, Bytes::new()))
    }
}

/// Mock HTTP client for testing.
///
/// Responses are matched by `"METHOD url"` first, then by exact URL, then by
/// URL prefix, then the default response.
///
/// # Example
///
/// ```ignore
/// use viralforge_admin::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://localhost:8000/api/health",
///     MockResponse::json(200, serde_json::json!({"status": "ok"})),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a URL, regardless of method.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a response for a specific method and URL.
    pub fn set_method_response(&self, method: &str, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(format!("{} {}", method, url), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn find_response(&self, method: &str, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(&format!("{} {}", method, url)) {
            return Some(response.clone());
        }
        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }
        for (pattern, response) in responses.iter() {
            if !pattern.contains(' ') && url.starts_with(pattern.as_str()) {
                return Some(response.clone());
            }
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }

    async fn respond(&self, method: &str, url: &str) -> Result<Response, HttpError> {
        let mut next = self.find_response(method, url);
        loop {
            match next {
                Some(MockResponse::Success(response)) => return Ok(response),
                Some(MockResponse::Error(err)) => return Err(err),
                Some(MockResponse::Delayed(delay, inner)) => {
                    tokio::time::sleep(delay).await;
                    next = Some(*inner);
                }
                None => {
                    return Err(HttpError::Other(format!(
                        "No mock response for {} {}",
                        method, url
                    )))
                }
            }
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.respond("GET", url).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.respond("POST", url).await
    }

    async fn put(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("PUT", url, headers, Some(body.to_string()));
        self.respond("PUT", url).await
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("DELETE", url, headers, None);
        self.respond("DELETE", url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exact_url_match() {
        let client = MockHttpClient::new();
        client.set_response("http://x/api/health", MockResponse::status(200));

        let response = client.get("http://x/api/health", &Headers::new()).await.unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_method_specific_match_wins() {
        let client = MockHttpClient::new();
        client.set_response("http://x/api/content/settings", MockResponse::status(200));
        client.set_method_response("PUT", "http://x/api/content/settings", MockResponse::status(204));

        let get = client.get("http://x/api/content/settings", &Headers::new()).await.unwrap();
        let put = client
            .put("http://x/api/content/settings", "{}", &Headers::new())
            .await
            .unwrap();

        assert_eq!(get.status, 200);
        assert_eq!(put.status, 204);
    }

    #[tokio::test]
    async fn test_prefix_and_default() {
        let client = MockHttpClient::new();
        client.set_response("http://x/api/accounts", MockResponse::status(200));
        client.set_default_response(MockResponse::status(404));

        let by_prefix = client.delete("http://x/api/accounts/7", &Headers::new()).await.unwrap();
        let by_default = client.get("http://x/api/other", &Headers::new()).await.unwrap();

        assert_eq!(by_prefix.status, 200);
        assert_eq!(by_default.status, 404);
    }

    #[tokio::test]
    async fn test_requests_are_recorded() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::status(200));
        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "Bearer t".to_string());

        client.post("http://x/api/ai/generate", "{\"prompt\":\"p\"}", &headers).await.unwrap();

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].authorization(), Some("Bearer t"));
        assert_eq!(requests[0].body.as_deref(), Some("{\"prompt\":\"p\"}"));
    }

    #[tokio::test]
    async fn test_unconfigured_url_is_error() {
        let client = MockHttpClient::new();
        let result = client.get("http://x/none", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }
}
