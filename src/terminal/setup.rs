//! Raw crossterm commands for entering and leaving the dashboard screen.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen with bracketed paste, so a pasted API
/// token arrives as one event.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste, Hide)
}

/// Undo [`enter_tui_mode`] and raw mode. Errors are ignored so this is
/// safe to call from a panic hook or more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore of stdout.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_then_leave_writes_escape_sequences() {
        let mut buffer = Vec::new();
        enter_tui_mode(&mut buffer).unwrap();
        let entered = buffer.len();
        assert!(entered > 0);

        leave_tui_mode(&mut buffer);
        assert!(buffer.len() > entered);
    }

    #[test]
    fn test_leave_twice_does_not_panic() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        leave_tui_mode(&mut buffer);
    }
}
