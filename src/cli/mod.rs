//! Command-line interface for the admin binary.
//!
//! `main()` parses the arguments first and only enters the TUI when no
//! one-shot command was requested:
//!
//! ```ignore
//! use viralforge_admin::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command, &config).await {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{handle_version_command, version_string, VERSION};

use std::net::SocketAddr;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use tokio::sync::mpsc;

use crate::app::AppContext;
use crate::config::AdminConfig;
use crate::health_check::{display_health_check_results, run_health_checks};
use crate::mock_server::{self, MockServerState, DEFAULT_MOCK_ADDR};

/// Run a one-shot CLI command.
///
/// Returns `None` for [`CliCommand::RunTui`]. `Version` never returns.
pub async fn run_cli_command(command: &CliCommand, config: &AdminConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Health => Some(handle_health_command(config).await),
        CliCommand::ServeMock(addr) => Some(handle_serve_mock_command(addr.as_deref()).await),
        CliCommand::RunTui { .. } => None,
    }
}

async fn handle_health_command(config: &AdminConfig) -> Result<()> {
    // Redirects have nowhere to go outside the TUI
    let (tx, _rx) = mpsc::unbounded_channel();
    let context = AppContext::production(config.clone(), tx)?;
    let result = run_health_checks(&context.api).await;
    display_health_check_results(&result);
    if result.api_healthy {
        Ok(())
    } else {
        Err(eyre!("API at {} is not healthy", result.base_url))
    }
}

/// Parse a `--serve-mock` address, falling back to the default.
pub fn mock_addr(addr: Option<&str>) -> Result<SocketAddr> {
    let raw = addr.unwrap_or(DEFAULT_MOCK_ADDR);
    raw.parse()
        .wrap_err_with(|| format!("Invalid listen address {:?}", raw))
}

async fn handle_serve_mock_command(addr: Option<&str>) -> Result<()> {
    let addr = mock_addr(addr)?;
    serve_mock_until(addr, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    })
    .await
}

/// Serve the mock API on `addr` until `shutdown` resolves or the server
/// task ends.
pub async fn serve_mock_until<F>(addr: SocketAddr, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()>,
{
    let (mut handle, bound) = mock_server::serve(addr, MockServerState::new()).await?;
    println!("Mock API listening on http://{}/api (Ctrl+C to stop)", bound);

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Mock API shutting down");
            handle.abort();
            Ok(())
        }
        joined = &mut handle => {
            joined.wrap_err("Mock API server task failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_tui_returns_none() {
        let config = AdminConfig::default();
        assert!(run_cli_command(&CliCommand::RunTui { api: true }, &config)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_serve_mock_stops_on_shutdown() {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(serve_mock_until(
            "127.0.0.1:0".parse().unwrap(),
            async move {
                let _ = rx.await;
            },
        ));
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        tx.send(()).unwrap();

        let result = tokio::time::timeout(std::time::Duration::from_secs(2), server)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }

    #[test]
    fn test_mock_addr() {
        assert_eq!(mock_addr(None).unwrap().port(), 8000);
        assert_eq!(mock_addr(Some("127.0.0.1:0")).unwrap().port(), 0);
        assert!(mock_addr(Some("not-an-addr")).is_err());
    }
}
