//! Recording navigator for testing.

use std::sync::{Arc, Mutex};

use crate::app::Route;
use crate::traits::Navigator;

/// Navigator that records every redirect instead of acting on it.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    redirects: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    /// Create a navigator with no recorded redirects.
    pub fn new() -> Self {
        Self::default()
    }

    /// All redirects in the order they were requested.
    pub fn redirects(&self) -> Vec<Route> {
        self.redirects.lock().unwrap().clone()
    }

    /// The most recent redirect, if any.
    pub fn last(&self) -> Option<Route> {
        self.redirects.lock().unwrap().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, route: Route) {
        self.redirects.lock().unwrap().push(route);
    }
}
