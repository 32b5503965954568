//! The four state containers behind the pages.
//!
//! Each store owns one feature's state behind an `Arc<RwLock<_>>` and a
//! collaborator to load it from. Locks are only held for synchronous
//! reads and writes, never across an await, and a poisoned lock is
//! recovered rather than propagated. Clones share state.
//!
//! Fetch contract, common to all stores:
//! 1. set loading, clear the error
//! 2. await the collaborator with no lock held
//! 3. on success replace the data wholesale; on failure keep the old data
//!    and store the error message
//! 4. clear loading
//!
//! Overlapping fetches are not cancelled; whichever resolves last wins.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub mod accounts;
pub mod dashboard;
pub mod logs;
pub mod settings;

pub use accounts::{AccountsState, AccountsStore};
pub use dashboard::{DashboardState, DashboardStore};
pub use logs::{LogsState, LogsStore, LOGS_REFRESH_INTERVAL};
pub use settings::{SaveStatus, SettingsState, SettingsStore, SAVE_STATUS_RESET_DELAY};

pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Counts fetches in progress so overlaps show up in the log.
#[derive(Debug, Clone, Default)]
pub(crate) struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    pub(crate) fn begin(&self, store: &'static str) -> InFlightGuard {
        let running = self.0.fetch_add(1, Ordering::SeqCst);
        if running > 0 {
            tracing::debug!(
                "{} fetch started while {} earlier fetch(es) still in flight",
                store,
                running
            );
        }
        InFlightGuard(self.0.clone())
    }
}

pub(crate) struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
