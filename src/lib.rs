//! ViralForge Admin - terminal dashboard for the ViralForge AI content
//! automation backend.
//!
//! This library exposes modules for use by the binary and integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod health_check;
pub mod logging;
pub mod mock_server;
pub mod models;
pub mod poller;
pub mod sources;
pub mod store;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod validation;
