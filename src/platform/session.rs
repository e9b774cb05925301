//! Terminal session guard

use std::io::{self, Write};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::ResetColor;
use crossterm::terminal::{
    self, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};

use super::Grid;
use crate::error::Error;

/// Holds the terminal in game mode (raw, alternate screen, mouse capture,
/// hidden cursor) until dropped.
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    pub fn begin() -> Result<Self, Error> {
        terminal::enable_raw_mode()?;
        // From here on Drop restores whatever was switched on
        let session = Self { active: true };
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            DisableLineWrap,
            terminal::Clear(ClearType::All)
        )?;
        log::debug!("Terminal session started");
        Ok(session)
    }

    /// Current terminal size
    pub fn grid(&self) -> Result<Grid, Error> {
        let (cols, rows) = terminal::size()?;
        Ok(Grid::new(cols, rows))
    }

    /// Restore the terminal now instead of at drop
    pub fn end(mut self) -> Result<(), Error> {
        self.restore()?;
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let mut out = io::stdout();
        let screen = execute!(
            out,
            ResetColor,
            DisableMouseCapture,
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        );
        let raw = terminal::disable_raw_mode();
        out.flush()?;
        log::debug!("Terminal session ended");
        screen.and(raw)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("Failed to restore terminal: {e}");
        }
    }
}
