//! Mock implementations for testing.
//!
//! These implement the trait abstractions without network or file system
//! access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryTokenStore`] - In-memory bearer token storage
//! - [`RecordingNavigator`] - Records redirects for verification

pub mod http;
pub mod navigator;
pub mod token_store;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use navigator::RecordingNavigator;
pub use token_store::InMemoryTokenStore;
