//! Terminal session: raw mode and alternate screen for the lifetime of a value.

use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use tracing::debug;

/// Owns the terminal while alive.
///
/// Setup enables raw mode, enters the alternate screen, enables bracketed
/// paste and hides the cursor. Everything is restored on drop, including
/// when unwinding from a panic.
#[derive(Debug)]
pub struct TerminalSession {
    width: u16,
    height: u16,
}

impl TerminalSession {
    /// Take over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen, etc.).
    pub fn enter() -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste, cursor::Hide)?;

        debug!(width, height, "entered terminal session");
        Ok(Self { width, height })
    }

    /// Terminal width in columns.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Terminal height in rows.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Record a new terminal size after a resize event.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        debug!(width, height, "terminal resized");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, DisableBracketedPaste, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        debug!("left terminal session");
    }
}
