//! Settings container: content and schedule settings plus save status.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use super::{read, write, InFlight};
use crate::error::AdminResult;
use crate::models::{
    ContentSettings, ContentSettingsPatch, ScheduleSettings, ScheduleSettingsPatch,
    SettingsBundle,
};
use crate::sources::SettingsSource;
use crate::validation::{validate_content_patch, validate_schedule_patch};

/// How long a successful save is reported before returning to idle.
pub const SAVE_STATUS_RESET_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Success,
    Error,
}

impl SaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SaveStatus::Idle => "",
            SaveStatus::Saving => "Saving...",
            SaveStatus::Success => "Settings saved",
            SaveStatus::Error => "Save failed",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsState {
    pub content: Option<ContentSettings>,
    pub schedule: Option<ScheduleSettings>,
    pub is_loading: bool,
    pub is_saving: bool,
    pub error: Option<String>,
    pub save_status: SaveStatus,
}

impl SettingsState {
    pub fn is_loaded(&self) -> bool {
        self.content.is_some() && self.schedule.is_some()
    }

    fn bundle(&self) -> Option<SettingsBundle> {
        Some(SettingsBundle {
            content: self.content.clone()?,
            schedule: self.schedule.clone()?,
        })
    }
}

#[derive(Clone)]
pub struct SettingsStore {
    state: Arc<RwLock<SettingsState>>,
    source: Arc<dyn SettingsSource>,
    in_flight: InFlight,
    /// Bumped by every save so a stale reset timer can tell it is stale.
    save_generation: Arc<AtomicU64>,
}

impl SettingsStore {
    pub fn new(source: Arc<dyn SettingsSource>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SettingsState::default())),
            source,
            in_flight: InFlight::default(),
            save_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn snapshot(&self) -> SettingsState {
        read(&self.state).clone()
    }

    pub fn is_saving(&self) -> bool {
        read(&self.state).is_saving
    }

    pub async fn fetch(&self) {
        let _guard = self.in_flight.begin("settings");
        {
            let mut state = write(&self.state);
            state.is_loading = true;
            state.error = None;
        }

        let result = self.source.load_settings().await;

        let mut state = write(&self.state);
        match result {
            Ok(bundle) => {
                tracing::info!("Settings fetched");
                state.content = Some(bundle.content);
                state.schedule = Some(bundle.schedule);
            }
            Err(e) => {
                tracing::warn!("Settings fetch failed: {}", e);
                state.error = Some(e.to_string());
            }
        }
        state.is_loading = false;
    }

    /// Shallow-merge a content patch.
    ///
    /// Returns `Ok(false)` without touching anything when settings are not
    /// loaded yet, and an error when the patch breaks a field contract.
    pub fn update_content(&self, patch: ContentSettingsPatch) -> AdminResult<bool> {
        let mut state = write(&self.state);
        let Some(content) = state.content.as_mut() else {
            tracing::debug!("Ignoring content update before settings are loaded");
            return Ok(false);
        };
        validate_content_patch(&patch)?;
        content.apply(patch);
        Ok(true)
    }

    /// Shallow-merge a schedule patch. Same contract as [`Self::update_content`].
    pub fn update_schedule(&self, patch: ScheduleSettingsPatch) -> AdminResult<bool> {
        let mut state = write(&self.state);
        let Some(schedule) = state.schedule.as_mut() else {
            tracing::debug!("Ignoring schedule update before settings are loaded");
            return Ok(false);
        };
        validate_schedule_patch(&patch)?;
        schedule.apply(patch);
        Ok(true)
    }

    /// Persist the current settings.
    ///
    /// Moves the save status idle -> saving -> success|error. A success
    /// returns to idle after [`SAVE_STATUS_RESET_DELAY`] unless another
    /// save has started since. A save overtaken by a newer one leaves the
    /// status to that newer save. The settings data itself is never changed.
    pub async fn save(&self) {
        let generation = self.save_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let bundle = {
            let mut state = write(&self.state);
            state.is_saving = true;
            state.save_status = SaveStatus::Saving;
            state.bundle()
        };

        let result = match bundle {
            Some(bundle) => self
                .source
                .save_settings(&bundle)
                .await
                .map_err(|e| e.to_string()),
            None => Err("Settings are not loaded yet".to_string()),
        };

        if self.save_generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("Settings save {} superseded by a newer save", generation);
            if let Err(message) = &result {
                tracing::warn!("Superseded settings save failed: {}", message);
            }
            return;
        }

        {
            let mut state = write(&self.state);
            state.is_saving = false;
            match &result {
                Ok(()) => {
                    tracing::info!("Settings saved");
                    state.save_status = SaveStatus::Success;
                }
                Err(message) => {
                    tracing::warn!("Settings save failed: {}", message);
                    state.save_status = SaveStatus::Error;
                    state.error = Some(message.clone());
                }
            }
        }

        if result.is_ok() {
            let state = self.state.clone();
            let latest = self.save_generation.clone();
            tokio::spawn(async move {
                tokio::time::sleep(SAVE_STATUS_RESET_DELAY).await;
                if latest.load(Ordering::SeqCst) != generation {
                    return;
                }
                let mut state = write(&state);
                if state.save_status == SaveStatus::Success {
                    state.save_status = SaveStatus::Idle;
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdminError;
    use crate::fixtures;
    use crate::models::{AiConfig, TrendingSources};
    use crate::sources::MockBackend;

    fn store() -> (MockBackend, SettingsStore) {
        let backend = MockBackend::new();
        let store = SettingsStore::new(Arc::new(backend.clone()));
        (backend, store)
    }

    #[test]
    fn test_update_before_fetch_is_noop() {
        let (_, store) = store();
        let patch = ContentSettingsPatch {
            trending_sources: Some(TrendingSources::default()),
            ..Default::default()
        };

        assert!(!store.update_content(patch).unwrap());
        assert_eq!(store.snapshot(), SettingsState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_merges_shallowly() {
        let (_, store) = store();
        store.fetch().await;

        let patch = ContentSettingsPatch {
            trending_sources: Some(TrendingSources::default()),
            ..Default::default()
        };
        assert!(store.update_content(patch).unwrap());

        let content = store.snapshot().content.unwrap();
        let expected = fixtures::content_settings();
        assert_eq!(content.trending_sources, TrendingSources::default());
        assert_eq!(content.ai_config, expected.ai_config);
        assert_eq!(content.enabled_types, expected.enabled_types);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_patch_leaves_data_untouched() {
        let (_, store) = store();
        store.fetch().await;

        let patch = ContentSettingsPatch {
            ai_config: Some(AiConfig {
                creativity_level: 150,
                ..fixtures::content_settings().ai_config
            }),
            ..Default::default()
        };
        let err = store.update_content(patch).unwrap_err();

        assert!(matches!(err, AdminError::Validation(_)));
        assert_eq!(store.snapshot().content, Some(fixtures::content_settings()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_failure_sets_error_and_keeps_data() {
        let (backend, store) = store();
        store.fetch().await;
        backend.fail_with("disk full");

        store.save().await;

        let state = store.snapshot();
        assert_eq!(state.save_status, SaveStatus::Error);
        assert_eq!(state.error.as_deref(), Some("disk full"));
        assert!(!state.is_saving);
        assert_eq!(state.content, Some(fixtures::content_settings()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_before_fetch_reports_error() {
        let (_, store) = store();
        store.save().await;
        assert_eq!(store.snapshot().save_status, SaveStatus::Error);
    }
}
