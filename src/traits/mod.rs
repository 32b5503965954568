//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT, DELETE)
//! - [`TokenStore`] - Bearer token persistence
//! - [`Navigator`] - Route redirection from outside the UI

pub mod http;
pub mod navigator;
pub mod token_store;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use navigator::Navigator;
pub use token_store::{TokenStore, TokenStoreError};
