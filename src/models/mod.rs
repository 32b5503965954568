//! Data models held by the stores and rendered by the pages.

pub mod accounts;
pub mod dashboard;
pub mod logs;
pub mod settings;

pub use accounts::{Platform, SocialAccount};
pub use dashboard::{
    ActivityItem, ActivityStatus, ApiServerState, DashboardMetrics, DashboardSnapshot,
    DatabaseState, GeneratorState, HealthLevel, PlatformsActive, QueueStatus, SchedulerState,
    ServiceHealth, ServiceState, SummaryMetrics, SystemStatus,
};
pub use logs::{
    ErrorCount, ErrorSummary, LogAction, LogActionKind, LogEntry, LogFilters, LogFiltersPatch,
    LogLevel, SEVERITY_FILTERS, TIME_RANGES,
};
pub use settings::{
    AiConfig, AiModel, ContentLength, ContentSettings, ContentSettingsPatch, EnabledContentTypes,
    MediaSettings, PostsPerDay, ScheduleSettings, ScheduleSettingsPatch, SettingsBundle,
    TimeWindow, TimeWindows, TrendingSources, IMAGE_STYLES, LANGUAGES, VOICE_PROVIDERS,
};
