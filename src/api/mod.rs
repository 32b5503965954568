//! Backend API access: the request wrapper and the typed endpoint service.

pub mod client;
pub mod service;
pub mod wire;

pub use client::{ApiClient, Method};
pub use service::{ApiService, DEFAULT_ANALYTICS_RANGE};
