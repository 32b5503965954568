//! Fixture-serving stand-in for the ViralForge backend.
//!
//! Serves every endpoint the [`ApiService`](crate::api::ApiService) calls
//! under `/api`, backed by the canned data in [`fixtures`](crate::fixtures).
//! Writes (settings updates, account connect/disconnect, scheduled posts)
//! are kept in memory for the life of the server. `/api/error` always
//! answers 500.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post},
    Router,
};
use chrono::{Duration, Utc};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::api::wire::{
    AccountStatus, ApiAccount, ApiContentSettings, ApiContentSettingsPartial, GenerateRequest,
    GenerateResponse, SchedulePostRequest, ScheduledPost,
};
use crate::fixtures;
use crate::models::Platform;

/// Default listen address for `--serve-mock`.
pub const DEFAULT_MOCK_ADDR: &str = "127.0.0.1:8000";

/// Shared state for the mock server handlers.
#[derive(Clone)]
pub struct MockServerState {
    /// When set, protected routes require `Authorization: Bearer <token>`
    required_token: Option<Arc<str>>,
    content_settings: Arc<RwLock<ApiContentSettings>>,
    accounts: Arc<RwLock<Vec<ApiAccount>>>,
    scheduled: Arc<RwLock<Vec<ScheduledPost>>>,
}

impl Default for MockServerState {
    fn default() -> Self {
        Self {
            required_token: None,
            content_settings: Arc::new(RwLock::new(fixtures::api_content_settings())),
            accounts: Arc::new(RwLock::new(fixtures::api_accounts(Utc::now()))),
            scheduled: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl MockServerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject protected requests that do not carry this bearer token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(Arc::from(token));
        self
    }
}

/// Build the router with every endpoint nested under `/api`.
pub fn router(state: MockServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/dashboard/metrics", get(dashboard_metrics))
        .route("/dashboard/health", get(dashboard_health))
        .route("/dashboard/activity", get(dashboard_activity))
        .route(
            "/content/settings",
            get(content_settings).put(update_content_settings),
        )
        .route("/accounts", get(list_accounts))
        .route("/accounts/connect", post(connect_account))
        .route("/accounts/:id", delete(disconnect_account))
        .route("/ai/generate", post(generate_content))
        .route("/posts/schedule", post(schedule_post))
        .route("/posts/scheduled", get(scheduled_posts))
        .route("/analytics", get(analytics))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    let api = Router::new()
        .route("/health", get(health))
        .route("/error", get(always_error))
        .merge(protected)
        .with_state(state);

    Router::new().nest("/api", api).layer(cors)
}

/// Start the mock server on `addr` (port 0 picks a free port).
///
/// Returns the server task and the bound address.
pub async fn serve(
    addr: SocketAddr,
    state: MockServerState,
) -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tracing::info!("Mock API listening on http://{}/api", actual_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Mock API server error: {}", e);
        }
    });

    Ok((handle, actual_addr))
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn require_bearer(
    State(state): State<MockServerState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(expected) = &state.required_token {
        let presented = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        if presented != Some(expected.as_ref()) {
            tracing::debug!("Rejected {} without valid bearer token", request.uri());
            return detail(StatusCode::UNAUTHORIZED, "Not authenticated");
        }
    }
    next.run(request).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn always_error() -> Response {
    detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

async fn dashboard_metrics() -> impl IntoResponse {
    Json(fixtures::summary_metrics())
}

async fn dashboard_health() -> impl IntoResponse {
    Json(fixtures::service_health())
}

async fn dashboard_activity() -> impl IntoResponse {
    Json(fixtures::recent_activity(Utc::now()))
}

async fn content_settings(State(state): State<MockServerState>) -> impl IntoResponse {
    Json(state.content_settings.read().await.clone())
}

async fn update_content_settings(
    State(state): State<MockServerState>,
    Json(partial): Json<ApiContentSettingsPartial>,
) -> impl IntoResponse {
    let mut settings = state.content_settings.write().await;
    *settings = settings.clone().merged(&partial);
    Json(settings.clone())
}

async fn list_accounts(State(state): State<MockServerState>) -> impl IntoResponse {
    Json(state.accounts.read().await.clone())
}

#[derive(Debug, Deserialize)]
struct ConnectBody {
    platform: String,
    #[serde(default)]
    #[allow(dead_code)]
    credentials: serde_json::Value,
}

async fn connect_account(
    State(state): State<MockServerState>,
    Json(body): Json<ConnectBody>,
) -> Response {
    let Some(platform) = Platform::parse(&body.platform) else {
        return detail(StatusCode::BAD_REQUEST, "Unsupported platform");
    };

    let mut accounts = state.accounts.write().await;
    let next_id = accounts
        .iter()
        .filter_map(|a| a.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
        + 1;
    let account = ApiAccount {
        id: next_id.to_string(),
        platform: platform.as_str().to_string(),
        username: format!("@new_{}_account", platform.as_str()),
        status: AccountStatus::Connected,
        followers: 0,
        last_post: None,
        token_expires_at: Some(Utc::now() + Duration::days(60)),
        permissions: Vec::new(),
        monthly_posts: 0,
    };
    accounts.push(account.clone());
    tracing::info!("Mock API connected {} account {}", platform.label(), account.id);
    (StatusCode::CREATED, Json(account)).into_response()
}

async fn disconnect_account(
    State(state): State<MockServerState>,
    Path(id): Path<String>,
) -> Response {
    let mut accounts = state.accounts.write().await;
    let before = accounts.len();
    accounts.retain(|a| a.id != id);
    if accounts.len() == before {
        return detail(StatusCode::NOT_FOUND, "Account not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn generate_content(Json(request): Json<GenerateRequest>) -> impl IntoResponse {
    Json(GenerateResponse {
        content: format!("{} #viral #trending", request.prompt.trim()),
    })
}

async fn schedule_post(
    State(state): State<MockServerState>,
    Json(request): Json<SchedulePostRequest>,
) -> impl IntoResponse {
    let post = ScheduledPost {
        id: uuid::Uuid::new_v4().to_string(),
        account_id: request.account_id,
        content: request.content,
        scheduled_time: request.scheduled_time,
        status: Some("scheduled".to_string()),
    };
    state.scheduled.write().await.push(post.clone());
    (StatusCode::CREATED, Json(post))
}

async fn scheduled_posts(State(state): State<MockServerState>) -> impl IntoResponse {
    Json(state.scheduled.read().await.clone())
}

#[derive(Debug, Deserialize)]
struct AnalyticsQuery {
    range: Option<String>,
}

async fn analytics(
    State(state): State<MockServerState>,
    Query(query): Query<AnalyticsQuery>,
) -> impl IntoResponse {
    let summary = fixtures::summary_metrics();
    let accounts = state.accounts.read().await;
    let posts_for = |platform: Platform| -> u32 {
        accounts
            .iter()
            .filter(|a| a.platform == platform.as_str())
            .map(|a| a.monthly_posts)
            .sum()
    };
    Json(json!({
        "range": query.range.unwrap_or_else(|| crate::api::DEFAULT_ANALYTICS_RANGE.to_string()),
        "totalPosts": summary.total_posts,
        "engagementRate": summary.engagement_rate,
        "postsByPlatform": {
            "instagram": posts_for(Platform::Instagram),
            "tiktok": posts_for(Platform::Tiktok),
        },
    }))
}
