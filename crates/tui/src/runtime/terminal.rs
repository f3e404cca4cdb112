//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Restore the terminal on exit, including during panics, via `Drop`.
//!
//! Does NOT handle:
//! - Initial terminal setup (done in `main.rs`).
//!
//! Invariants:
//! - Must be created after terminal setup is complete and live for the session.
//! - Drop must not panic.

use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Guard that restores raw mode, the alternate screen and mouse capture.
pub struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    /// `mouse` is whether mouse capture was enabled during setup.
    pub fn new(mouse: bool) -> Self {
        Self { mouse }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.mouse {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
    }
}
