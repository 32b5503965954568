//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileTokenStore`] - Bearer token kept in `~/.viralforge/auth.json`
//! - [`ChannelNavigator`] - Redirects delivered through the app message loop
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::InMemoryTokenStore`] - In-memory token storage
//! - [`mock::RecordingNavigator`] - Records redirects

pub mod channel_navigator;
pub mod file_token_store;
pub mod mock;
pub mod reqwest_http;

pub use channel_navigator::ChannelNavigator;
pub use file_token_store::FileTokenStore;
pub use mock::{InMemoryTokenStore, MockHttpClient, RecordingNavigator};
pub use reqwest_http::ReqwestHttpClient;
