//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so its logs go to `~/.viralforge/admin.log`.
//! One-shot commands (`--serve-mock`, `--health`) log to stderr instead.
//! `VIRALFORGE_LOG` takes an `EnvFilter` directive string.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::adapters::file_token_store::STORAGE_DIR;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "VIRALFORGE_LOG";

/// Filter used when `VIRALFORGE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "viralforge_admin=info,warn";

const LOG_FILE: &str = "admin.log";

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
}

/// Default log file location, if a home directory exists.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(STORAGE_DIR).join(LOG_FILE))
}

/// Parse filter directives, falling back to [`DEFAULT_FILTER`].
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// With [`LogTarget::File`] and no home directory, logging stays off.
pub fn init_logging(target: LogTarget) -> Result<()> {
    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref());

    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| eyre!("failed to install logger: {}", e)),
        LogTarget::File => {
            let Some(path) = log_file_path() else {
                return Ok(());
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| eyre!("failed to install logger: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_defaults() {
        assert_eq!(build_filter(None).to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
        assert_eq!(
            build_filter(Some("  ")).to_string(),
            EnvFilter::new(DEFAULT_FILTER).to_string()
        );
    }

    #[test]
    fn test_build_filter_uses_directives() {
        assert_eq!(build_filter(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn test_log_file_lives_next_to_token() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with(".viralforge/admin.log"));
        }
    }
}
