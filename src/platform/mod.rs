//! Native terminal frontend
//!
//! Implements the render, input and asset collaborators on top of crossterm:
//! - `session`: raw mode / alternate screen guard
//! - `canvas`: 900x700 logical screen scaled onto the cell grid
//! - `keyboard`: key and mouse events, held-key tracking
//! - `files`: PNG files on disk

pub mod canvas;
pub mod files;
pub mod keyboard;
pub mod session;

pub use canvas::TerminalRenderer;
pub use files::FileAssets;
pub use keyboard::TerminalInput;
pub use session::TerminalSession;

/// Terminal cell grid size mapped onto the logical screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cols: u16,
    pub rows: u16,
}

impl Grid {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }
}
