//! Route redirection abstraction.
//!
//! Lets non-UI code (the API client) send the user to another route
//! without knowing how the UI is driven.

use crate::app::Route;

/// Trait for redirecting the UI to a route.
pub trait Navigator: Send + Sync {
    /// Request that the UI switch to `route`.
    fn redirect(&self, route: Route);
}
