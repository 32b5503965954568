//! Command-line argument parsing for the admin binary.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Probe the backend's `/health` endpoint and exit
    Health,
    /// Serve fixture data over HTTP, optionally on a given address
    ServeMock(Option<String>),
    /// Run the TUI application (default)
    RunTui {
        /// Talk to the live API instead of the in-process fixtures
        api: bool,
    },
}

impl Default for CliCommand {
    fn default() -> Self {
        CliCommand::RunTui { api: false }
    }
}

/// Parse command-line arguments and return the command to run.
///
/// The first item is the program name and is skipped. Terminal flags
/// (`--version`, `--health`, `--serve-mock`) win over `--api`; unknown
/// arguments are ignored.
///
/// # Examples
///
/// ```
/// use viralforge_admin::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["viralforge-admin".to_string(), "--api".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::RunTui { api: true });
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut api = false;
    let mut args = args.skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--health" => return CliCommand::Health,
            "--serve-mock" => {
                let addr = args.next_if(|next| !next.starts_with('-'));
                return CliCommand::ServeMock(addr);
            }
            "--api" => api = true,
            other => tracing::debug!("Ignoring unknown argument {:?}", other),
        }
    }
    CliCommand::RunTui { api }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let args: Vec<String> = std::iter::once("viralforge-admin")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_health_flag() {
        assert_eq!(parse(&["--health"]), CliCommand::Health);
    }

    #[test]
    fn test_parse_serve_mock_with_and_without_addr() {
        assert_eq!(parse(&["--serve-mock"]), CliCommand::ServeMock(None));
        assert_eq!(
            parse(&["--serve-mock", "0.0.0.0:9000"]),
            CliCommand::ServeMock(Some("0.0.0.0:9000".to_string()))
        );
        assert_eq!(
            parse(&["--serve-mock", "--api"]),
            CliCommand::ServeMock(None)
        );
    }

    #[test]
    fn test_parse_api_flag() {
        assert_eq!(parse(&["--api"]), CliCommand::RunTui { api: true });
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui { api: false });
        assert_eq!(CliCommand::default(), CliCommand::RunTui { api: false });
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]), CliCommand::RunTui { api: false });
    }

    #[test]
    fn test_terminal_flag_wins_over_api() {
        assert_eq!(parse(&["--api", "--health"]), CliCommand::Health);
    }
}
