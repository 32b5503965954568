//! Navigator that forwards redirects to the app's message loop.

use tokio::sync::mpsc;

use crate::app::{AppMessage, Route};
use crate::traits::Navigator;

/// Production [`Navigator`]: posts `AppMessage::Navigate` to the app.
///
/// The redirect is applied on the next pass of the event loop, after the
/// failing request has already returned its error.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl ChannelNavigator {
    pub fn new(message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self { message_tx }
    }
}

impl Navigator for ChannelNavigator {
    fn redirect(&self, route: Route) {
        if self.message_tx.send(AppMessage::Navigate(route)).is_err() {
            tracing::debug!("Message channel closed, dropping redirect to {}", route.path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_sends_navigate_message() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let navigator = ChannelNavigator::new(tx);

        navigator.redirect(Route::Login);

        match rx.try_recv() {
            Ok(AppMessage::Navigate(route)) => assert_eq!(route, Route::Login),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_redirect_with_closed_channel_does_not_panic() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        ChannelNavigator::new(tx).redirect(Route::Login);
    }
}
