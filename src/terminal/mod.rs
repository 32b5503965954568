//! Terminal lifecycle for the dashboard TUI.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen and restores it when dropped. [`setup_panic_hook`] covers the
//! panic path, where `Drop` may never run.
//!
//! ```no_run
//! use viralforge_admin::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     let _terminal = manager.terminal();
//!     // ... run the app ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Dashboard terminal that restores the shell on drop.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalManager {
    /// Enter raw mode and the alternate screen, then clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(e.into());
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        tracing::debug!("Entered TUI mode");

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the shell. Later calls are no-ops.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
        tracing::debug!("Left TUI mode");
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        self.restore();
    }
}
