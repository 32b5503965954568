//! AppMessage enum for async communication within the application.

use super::Route;

/// Messages sent to the event loop by background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Switch to a route (e.g. the login page after a 401)
    Navigate(Route),
    /// A store finished an operation; redraw
    StoreUpdated,
    /// Show a one-line status message
    Status(String),
    /// Leave the event loop
    Quit,
}
