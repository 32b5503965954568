//! Cancellable recurring tasks owned by a page.
//!
//! A page that refreshes on a timer spawns a [`Poller`] when it mounts and
//! keeps the returned [`PollHandle`]. Dropping the handle (or calling
//! [`PollHandle::stop`]) aborts the task, so unmounting the page stops
//! the polling with no global timer registry involved.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Dashboard refresh period while the dashboard is mounted.
pub const DASHBOARD_POLL_INTERVAL: Duration = Duration::from_secs(30);

pub struct Poller;

impl Poller {
    /// Run `task` now and then every `interval` until the handle goes away.
    ///
    /// Each run is awaited before the next tick is taken, so runs never
    /// overlap; a run that overshoots delays the schedule instead of
    /// bursting to catch up.
    pub fn spawn<F, Fut>(name: &'static str, interval: Duration, task: F) -> PollHandle
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tracing::debug!("{} poller started (interval: {}s)", name, interval.as_secs());

            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                // The first tick completes immediately.
                ticker.tick().await;
                tracing::trace!("{} poll", name);
                task().await;
            }
        });

        PollHandle {
            name,
            handle: Some(handle),
        }
    }
}

/// Owner of a running poller. Stops the poller on drop.
pub struct PollHandle {
    name: &'static str,
    handle: Option<JoinHandle<()>>,
}

impl PollHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the poller. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("{} poller stopped", self.name);
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for PollHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollHandle")
            .field("name", &self.name)
            .field("running", &self.is_running())
            .finish()
    }
}
