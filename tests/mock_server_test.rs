//! The fixture-serving mock backend, driven through the real API service
//! and the API-mode stores.

mod common;

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use common::{live_service, LiveService, TEST_TOKEN};
use viralforge_admin::adapters::InMemoryTokenStore;
use viralforge_admin::app::Route;
use viralforge_admin::config::{AdminConfig, DataMode};
use viralforge_admin::mock_server::{self, MockServerState};
use viralforge_admin::models::{AiModel, ContentSettingsPatch, Platform};
use viralforge_admin::sources::ApiBackend;
use viralforge_admin::store::{AccountsStore, DashboardStore, SaveStatus, SettingsStore};

async fn start(state: MockServerState) -> AdminConfig {
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let (_handle, bound) = mock_server::serve(addr, state).await.unwrap();
    AdminConfig::default()
        .with_base_url(format!("http://{}/api", bound))
        .with_data_mode(DataMode::Api)
}

async fn open_service() -> LiveService {
    let config = start(MockServerState::new()).await;
    live_service(config, InMemoryTokenStore::with_token(TEST_TOKEN))
}

#[tokio::test]
async fn test_health_and_error_endpoints() {
    let live = open_service().await;
    assert!(live.service.health_check().await);

    let err = live
        .service
        .client()
        .send(viralforge_admin::api::Method::Get, "/error", None)
        .await
        .unwrap_err();
    assert_eq!(err.status, 500);
}

#[tokio::test]
async fn test_required_token_rejects_missing_bearer() {
    let config = start(MockServerState::new().with_required_token(TEST_TOKEN)).await;

    let anonymous = live_service(config.clone(), InMemoryTokenStore::new());
    let err = anonymous.service.dashboard_metrics().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(anonymous.navigator.last(), Some(Route::Login));
    // Health stays public
    assert!(anonymous.service.health_check().await);

    let signed_in = live_service(config, InMemoryTokenStore::with_token(TEST_TOKEN));
    let metrics = signed_in.service.dashboard_metrics().await.unwrap();
    assert_eq!(metrics.total_posts, 1247);
}

#[tokio::test]
async fn test_account_connect_and_disconnect_round_trip() {
    let live = open_service().await;
    let before = live.service.accounts().await.unwrap();
    assert_eq!(before.len(), 2);

    let created = live
        .service
        .connect_account("instagram", &json!({}))
        .await
        .unwrap();
    assert_eq!(created.id, "3");
    assert_eq!(live.service.accounts().await.unwrap().len(), 3);

    live.service.disconnect_account(&created.id).await.unwrap();
    assert_eq!(live.service.accounts().await.unwrap().len(), 2);

    let missing = live.service.disconnect_account("999").await.unwrap_err();
    assert_eq!(missing.status, 404);

    let unsupported = live
        .service
        .connect_account("myspace", &json!({}))
        .await
        .unwrap_err();
    assert_eq!(unsupported.status, 400);
}

#[tokio::test]
async fn test_generate_and_schedule() {
    let live = open_service().await;

    let content = live.service.generate_content("Launch day", None).await.unwrap();
    assert_eq!(content, "Launch day #viral #trending");

    live.service
        .schedule_post("1", &content, Utc::now())
        .await
        .unwrap();
    let scheduled = live.service.scheduled_posts().await.unwrap();
    assert_eq!(scheduled.len(), 1);
    assert_eq!(scheduled[0].account_id, "1");
    assert_eq!(scheduled[0].status.as_deref(), Some("scheduled"));
}

#[tokio::test]
async fn test_analytics_echoes_range() {
    let live = open_service().await;
    let analytics = live.service.analytics("30d").await.unwrap();
    assert_eq!(analytics["range"], "30d");
    assert_eq!(analytics["postsByPlatform"]["tiktok"], 67);
}

#[tokio::test]
async fn test_api_mode_stores_against_mock_server() {
    let live = open_service().await;
    let backend = Arc::new(ApiBackend::new(live.service.clone()));

    let dashboard = DashboardStore::new(backend.clone());
    dashboard.fetch().await;
    let state = dashboard.snapshot();
    assert_eq!(state.error, None);
    let data = state.data.unwrap();
    assert_eq!(data.summary.unwrap().active_accounts, 23);
    assert!(data.system_status.is_some());
    assert!(!data.activity.is_empty());

    let accounts = AccountsStore::new(backend.clone());
    accounts.fetch().await;
    let list = accounts.snapshot().accounts.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].platform, Platform::Tiktok);

    let settings = SettingsStore::new(backend);
    settings.fetch().await;
    assert!(settings.snapshot().is_loaded());
    let mut ai_config = settings.snapshot().content.unwrap().ai_config;
    ai_config.model = AiModel::Claude;
    settings
        .update_content(ContentSettingsPatch {
            ai_config: Some(ai_config),
            ..Default::default()
        })
        .unwrap();
    settings.save().await;
    assert_eq!(settings.snapshot().save_status, SaveStatus::Success);

    let stored = live.service.content_settings().await.unwrap();
    assert_eq!(stored.ai_model, AiModel::Claude.as_str());
}
