//! Canned product data served by the mock backend and the mock server.
//!
//! Time-relative values are computed from the `now` passed in so tests can
//! pin them.

use chrono::{DateTime, Duration, Utc};

use crate::api::wire::{AccountStatus, ApiAccount, ApiContentSettings};
use crate::models::{
    ActivityItem, ActivityStatus, AiConfig, AiModel, ApiServerState, ContentLength,
    ContentSettings, DashboardMetrics, DashboardSnapshot, DatabaseState, EnabledContentTypes,
    ErrorCount, ErrorSummary, GeneratorState, LogAction, LogActionKind, LogEntry, LogLevel,
    MediaSettings, Platform, PlatformsActive, PostsPerDay, QueueStatus, ScheduleSettings,
    SchedulerState, ServiceHealth, ServiceState, SocialAccount, SummaryMetrics, SystemStatus,
    TimeWindow, TimeWindows, TrendingSources,
};

// Dashboard

pub fn summary_metrics() -> SummaryMetrics {
    SummaryMetrics {
        total_posts: 1247,
        active_accounts: 23,
        scheduled_posts: 156,
        engagement_rate: 8.4,
    }
}

pub fn service_health() -> ServiceHealth {
    ServiceHealth {
        api: ServiceState::Online,
        database: ServiceState::Online,
        scheduler: ServiceState::Warning,
        ai_service: ServiceState::Online,
    }
}

pub fn recent_activity(now: DateTime<Utc>) -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            id: "1".to_string(),
            kind: "post_created".to_string(),
            message: "New post created for @techstartup".to_string(),
            timestamp: now,
            status: ActivityStatus::Success,
        },
        ActivityItem {
            id: "2".to_string(),
            kind: "account_connected".to_string(),
            message: "Instagram account connected".to_string(),
            timestamp: now - Duration::minutes(5),
            status: ActivityStatus::Success,
        },
        ActivityItem {
            id: "3".to_string(),
            kind: "scheduler_warning".to_string(),
            message: "Scheduler service experiencing delays".to_string(),
            timestamp: now - Duration::minutes(10),
            status: ActivityStatus::Warning,
        },
    ]
}

pub fn dashboard_metrics() -> DashboardMetrics {
    DashboardMetrics {
        posts_today: 12,
        posts_today_change: 3,
        next_post_time: "15:45".to_string(),
        next_post_in_minutes: 32,
        platforms_active: PlatformsActive {
            instagram: true,
            tiktok: true,
        },
        uptime_percentage: 99.97,
        uptime_days: 30,
    }
}

pub fn system_status(now: DateTime<Utc>) -> SystemStatus {
    SystemStatus {
        api_server: ApiServerState::Online,
        content_generator: GeneratorState::Active,
        scheduler: SchedulerState::Running,
        database: DatabaseState::Connected,
        last_updated: now,
    }
}

pub fn queue_status() -> QueueStatus {
    QueueStatus {
        pending_tasks: 3,
        processing: 1,
        failed: 0,
    }
}

pub fn dashboard_snapshot(now: DateTime<Utc>) -> DashboardSnapshot {
    DashboardSnapshot {
        summary: Some(summary_metrics()),
        metrics: Some(dashboard_metrics()),
        system_status: Some(system_status(now)),
        queue_status: Some(queue_status()),
        activity: recent_activity(now),
    }
}

// Settings

pub fn content_settings() -> ContentSettings {
    ContentSettings {
        enabled_types: EnabledContentTypes {
            facts: true,
            quotes: true,
            memes: true,
            location: true,
            educational: true,
            custom: false,
        },
        ai_config: AiConfig {
            model: AiModel::Gpt4,
            creativity_level: 70,
            content_length: ContentLength::Medium,
            language: "English".to_string(),
            custom_instructions: None,
        },
        trending_sources: TrendingSources {
            google_trends: true,
            tiktok_discovery: true,
            instagram_explore: true,
            twitter_trending: false,
            reddit_hot: false,
            youtube_trending: false,
        },
        media_settings: MediaSettings {
            image_style: "Realistic".to_string(),
            video_length_range: (15, 30),
            voice_provider: "ElevenLabs".to_string(),
            voice_id: "default".to_string(),
            background_music: true,
        },
    }
}

pub fn schedule_settings() -> ScheduleSettings {
    ScheduleSettings {
        auto_schedule: true,
        posts_per_day: PostsPerDay {
            instagram: 2,
            tiktok: 3,
        },
        time_windows: TimeWindows {
            morning: TimeWindow::new("06:00", "12:00"),
            afternoon: TimeWindow::new("12:00", "18:00"),
            evening: TimeWindow::new("18:00", "24:00"),
        },
        time_zones: vec!["America/New_York".to_string()],
        blackout_dates: Vec::new(),
    }
}

pub fn api_content_settings() -> ApiContentSettings {
    ApiContentSettings {
        ai_model: "gpt-4".to_string(),
        tone: "professional".to_string(),
        max_length: 280,
        include_hashtags: true,
        include_emojis: false,
    }
}

// Accounts

pub fn accounts(now: DateTime<Utc>) -> Vec<SocialAccount> {
    vec![
        SocialAccount {
            id: "1".to_string(),
            platform: Platform::Instagram,
            username: "@myaccount".to_string(),
            is_connected: true,
            token_expires_at: now + Duration::days(30),
            permissions: vec!["basic_info".to_string(), "content_publish".to_string()],
            last_post_at: Some(now),
            monthly_posts: 45,
        },
        SocialAccount {
            id: "2".to_string(),
            platform: Platform::Tiktok,
            username: "@myaccount".to_string(),
            is_connected: true,
            token_expires_at: now + Duration::days(60),
            permissions: vec!["user.info.basic".to_string(), "video.publish".to_string()],
            last_post_at: Some(now),
            monthly_posts: 67,
        },
    ]
}

pub fn api_accounts(now: DateTime<Utc>) -> Vec<ApiAccount> {
    vec![
        ApiAccount {
            id: "1".to_string(),
            platform: "instagram".to_string(),
            username: "@techstartup_ig".to_string(),
            status: AccountStatus::Connected,
            followers: 8930,
            last_post: Some(now - Duration::days(1)),
            token_expires_at: Some(now + Duration::days(30)),
            permissions: vec!["basic_info".to_string(), "content_publish".to_string()],
            monthly_posts: 45,
        },
        ApiAccount {
            id: "2".to_string(),
            platform: "tiktok".to_string(),
            username: "@techstartup".to_string(),
            status: AccountStatus::Connected,
            followers: 15420,
            last_post: Some(now),
            token_expires_at: Some(now + Duration::days(60)),
            permissions: vec!["user.info.basic".to_string(), "video.publish".to_string()],
            monthly_posts: 67,
        },
    ]
}

// Logs

pub fn logs(now: DateTime<Utc>) -> Vec<LogEntry> {
    vec![
        LogEntry {
            id: "1".to_string(),
            timestamp: now,
            level: LogLevel::Error,
            module: "Content Generation".to_string(),
            message: "Failed to generate image: OpenAI API rate limit exceeded".to_string(),
            details: Some("Module: openai_service.py:127".to_string()),
            actions: Some(vec![
                LogAction::new("Retry", LogActionKind::Retry),
                LogAction::new("View Details", LogActionKind::ViewDetails),
                LogAction::new("Ignore", LogActionKind::Ignore),
            ]),
        },
        LogEntry {
            id: "2".to_string(),
            timestamp: now - Duration::minutes(2),
            level: LogLevel::Info,
            module: "Social Posting".to_string(),
            message: "Successfully posted to Instagram: @account".to_string(),
            details: Some("Post ID: 12345, Engagement: 45 likes in 2min".to_string()),
            actions: Some(vec![
                LogAction::new("View Post", LogActionKind::ViewPost),
                LogAction::new("View Analytics", LogActionKind::ViewAnalytics),
            ]),
        },
    ]
}

pub fn error_summary() -> ErrorSummary {
    ErrorSummary {
        critical: 0,
        errors: 3,
        warnings: 12,
        info: 156,
        top_errors: vec![
            ErrorCount {
                kind: "API Rate Limits".to_string(),
                count: 2,
            },
            ErrorCount {
                kind: "Network Timeouts".to_string(),
                count: 1,
            },
            ErrorCount {
                kind: "Content Generation".to_string(),
                count: 0,
            },
        ],
    }
}
