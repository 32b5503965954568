//! Dashboard data models: headline counters, today's metrics, service
//! health, queue depth and the recent activity feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Headline counters
// ============================================================================

/// Aggregate counters served by `GET /dashboard/metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub total_posts: u64,
    pub active_accounts: u32,
    pub scheduled_posts: u32,
    /// Percentage, e.g. `8.4`
    pub engagement_rate: f64,
}

// ============================================================================
// Today's metrics
// ============================================================================

/// Which publishing platforms are currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlatformsActive {
    pub instagram: bool,
    pub tiktok: bool,
}

impl PlatformsActive {
    /// Number of active platforms.
    pub fn active_count(&self) -> usize {
        usize::from(self.instagram) + usize::from(self.tiktok)
    }

    /// Number of platforms tracked.
    pub const fn total() -> usize {
        2
    }
}

/// Today's activity, next-post ETA and uptime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub posts_today: u32,
    /// Change versus yesterday; may be negative
    pub posts_today_change: i32,
    /// Wall-clock time of the next post, `HH:MM`
    pub next_post_time: String,
    pub next_post_in_minutes: u32,
    pub platforms_active: PlatformsActive,
    pub uptime_percentage: f64,
    pub uptime_days: u32,
}

// ============================================================================
// Service status
// ============================================================================

/// Traffic-light level used by health indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthLevel {
    Online,
    Warning,
    Error,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiServerState {
    Online,
    Warning,
    Error,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorState {
    Active,
    Inactive,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerState {
    Running,
    Paused,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseState {
    Connected,
    Disconnected,
    Error,
}

impl ApiServerState {
    pub fn health(&self) -> HealthLevel {
        match self {
            ApiServerState::Online => HealthLevel::Online,
            ApiServerState::Warning => HealthLevel::Warning,
            ApiServerState::Error => HealthLevel::Error,
            ApiServerState::Offline => HealthLevel::Offline,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApiServerState::Online => "Online",
            ApiServerState::Warning => "Degraded",
            ApiServerState::Error => "Error",
            ApiServerState::Offline => "Offline",
        }
    }
}

impl GeneratorState {
    pub fn health(&self) -> HealthLevel {
        match self {
            GeneratorState::Active => HealthLevel::Online,
            GeneratorState::Inactive => HealthLevel::Offline,
            GeneratorState::Error => HealthLevel::Error,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GeneratorState::Active => "Active",
            GeneratorState::Inactive => "Inactive",
            GeneratorState::Error => "Error",
        }
    }
}

impl SchedulerState {
    pub fn health(&self) -> HealthLevel {
        match self {
            SchedulerState::Running => HealthLevel::Online,
            SchedulerState::Paused => HealthLevel::Warning,
            SchedulerState::Error => HealthLevel::Error,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SchedulerState::Running => "Running",
            SchedulerState::Paused => "Paused",
            SchedulerState::Error => "Stopped",
        }
    }
}

impl DatabaseState {
    pub fn health(&self) -> HealthLevel {
        match self {
            DatabaseState::Connected => HealthLevel::Online,
            DatabaseState::Disconnected => HealthLevel::Offline,
            DatabaseState::Error => HealthLevel::Error,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatabaseState::Connected => "Connected",
            DatabaseState::Disconnected => "Disconnected",
            DatabaseState::Error => "Error",
        }
    }
}

/// Per-service status of the automation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub api_server: ApiServerState,
    pub content_generator: GeneratorState,
    pub scheduler: SchedulerState,
    pub database: DatabaseState,
    pub last_updated: DateTime<Utc>,
}

/// Coarse state reported by `GET /dashboard/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceState {
    Online,
    Offline,
    Warning,
}

/// Service health as served by `GET /dashboard/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHealth {
    pub api: ServiceState,
    pub database: ServiceState,
    pub scheduler: ServiceState,
    pub ai_service: ServiceState,
}

impl SystemStatus {
    /// Derive a status panel from the coarse health endpoint.
    ///
    /// A `warning` maps to the closest degraded state of each service.
    pub fn from_service_health(health: &ServiceHealth, observed_at: DateTime<Utc>) -> Self {
        Self {
            api_server: match health.api {
                ServiceState::Online => ApiServerState::Online,
                ServiceState::Warning => ApiServerState::Warning,
                ServiceState::Offline => ApiServerState::Offline,
            },
            content_generator: match health.ai_service {
                ServiceState::Online => GeneratorState::Active,
                ServiceState::Warning => GeneratorState::Error,
                ServiceState::Offline => GeneratorState::Inactive,
            },
            scheduler: match health.scheduler {
                ServiceState::Online => SchedulerState::Running,
                ServiceState::Warning => SchedulerState::Paused,
                ServiceState::Offline => SchedulerState::Error,
            },
            database: match health.database {
                ServiceState::Online => DatabaseState::Connected,
                ServiceState::Warning => DatabaseState::Error,
                ServiceState::Offline => DatabaseState::Disconnected,
            },
            last_updated: observed_at,
        }
    }
}

/// Task queue counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueueStatus {
    pub pending_tasks: u32,
    pub processing: u32,
    pub failed: u32,
}

// ============================================================================
// Activity feed
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Success,
    Warning,
    Error,
}

/// One entry of the recent activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub status: ActivityStatus,
}

// ============================================================================
// Snapshot
// ============================================================================

/// Everything one dashboard fetch produces; replaced wholesale.
///
/// Parts a collaborator does not supply stay `None` (or empty).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSnapshot {
    pub summary: Option<SummaryMetrics>,
    pub metrics: Option<DashboardMetrics>,
    pub system_status: Option<SystemStatus>,
    pub queue_status: Option<QueueStatus>,
    pub activity: Vec<ActivityItem>,
}
