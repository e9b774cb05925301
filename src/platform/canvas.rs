//! Cell canvas renderer
//!
//! The logical 900x700 screen is scaled onto whatever cell grid the terminal
//! has. Each frame is drawn into a cell buffer and only the cells that
//! changed since the last frame are written out.

use std::io::{self, Stdout, Write};
use std::ops::Range;

use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, BeginSynchronizedUpdate, EndSynchronizedUpdate};
use crossterm::{cursor, queue};
use glam::IVec2;

use super::Grid;
use crate::Rect;
use crate::assets::Image;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::Error;
use crate::renderer::palette::{self, Rgb};
use crate::renderer::{Font, Renderer};

/// Glyph for images that have real pixels behind them
const IMAGE_GLYPH: char = '▓';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

const BLANK: Cell = Cell {
    ch: ' ',
    fg: palette::WHITE,
    bg: palette::BLACK,
};

/// Never produced by drawing, so a buffer of these repaints everything
const STALE: Cell = Cell {
    ch: '\0',
    fg: palette::BLACK,
    bg: palette::BLACK,
};

pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
    grid: Grid,
    /// Re-query the terminal size every frame
    follow_terminal: bool,
    prev: Vec<Cell>,
    cur: Vec<Cell>,
}

impl TerminalRenderer<Stdout> {
    /// Renderer on stdout that tracks terminal resizes
    pub fn stdout(grid: Grid) -> Self {
        let mut renderer = Self::new(io::stdout(), grid);
        renderer.follow_terminal = true;
        renderer
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, grid: Grid) -> Self {
        let len = grid.cols as usize * grid.rows as usize;
        Self {
            out,
            grid,
            follow_terminal: false,
            prev: vec![STALE; len],
            cur: vec![BLANK; len],
        }
    }

    /// Change the cell grid. The next frame is repainted in full.
    pub fn resize(&mut self, grid: Grid) {
        if grid == self.grid {
            return;
        }
        log::debug!("Canvas resized to {}x{}", grid.cols, grid.rows);
        let len = grid.cols as usize * grid.rows as usize;
        self.grid = grid;
        self.prev = vec![STALE; len];
        self.cur = vec![BLANK; len];
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        if col >= self.grid.cols || row >= self.grid.rows {
            return None;
        }
        Some(self.cur[self.index(col, row)])
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn index(&self, col: u16, row: u16) -> usize {
        row as usize * self.grid.cols as usize + col as usize
    }

    /// Cells covering `rect`, clamped to the grid
    fn cells_of(&self, rect: Rect) -> (Range<u16>, Range<u16>) {
        let cols = span(rect.x(), rect.right(), self.grid.cols, SCREEN_WIDTH);
        let rows = span(rect.y(), rect.bottom(), self.grid.rows, SCREEN_HEIGHT);
        (cols, rows)
    }

    /// Cell containing a logical pixel, if on screen
    fn cell_at(&self, pos: IVec2) -> Option<(u16, u16)> {
        let col = to_cell(pos.x, self.grid.cols, SCREEN_WIDTH);
        let row = to_cell(pos.y, self.grid.rows, SCREEN_HEIGHT);
        let in_range = |v: i64, max: u16| v >= 0 && v < max as i64;
        (in_range(col, self.grid.cols) && in_range(row, self.grid.rows)).then_some((col as u16, row as u16))
    }

    fn fill_cells(&mut self, rect: Rect, cell: Cell) {
        let (cols, rows) = self.cells_of(rect);
        for row in rows {
            for col in cols.clone() {
                let i = self.index(col, row);
                self.cur[i] = cell;
            }
        }
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;
        let mut cur_fg = None::<Rgb>;
        let mut cur_bg = None::<Rgb>;

        for row in 0..self.grid.rows {
            for col in 0..self.grid.cols {
                let i = self.index(col, row);
                let cell = self.cur[i];
                if cell == self.prev[i] {
                    continue;
                }
                queue!(self.out, cursor::MoveTo(col, row))?;
                if cur_fg != Some(cell.fg) {
                    queue!(self.out, SetForegroundColor(color(cell.fg)))?;
                    cur_fg = Some(cell.fg);
                }
                if cur_bg != Some(cell.bg) {
                    queue!(self.out, SetBackgroundColor(color(cell.bg)))?;
                    cur_bg = Some(cell.bg);
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }

        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()?;
        self.prev.copy_from_slice(&self.cur);
        Ok(())
    }

    #[cfg(test)]
    fn dirty_cells(&self) -> usize {
        self.cur.iter().zip(&self.prev).filter(|(a, b)| a != b).count()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self, color: Rgb) {
        if self.follow_terminal {
            if let Ok((cols, rows)) = terminal::size() {
                self.resize(Grid::new(cols, rows));
            }
        }
        self.cur.fill(Cell {
            ch: ' ',
            fg: palette::WHITE,
            bg: color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.fill_cells(
            rect,
            Cell {
                ch: ' ',
                fg: palette::WHITE,
                bg: color,
            },
        );
    }

    fn draw(&mut self, image: &Image, pos: IVec2) {
        let rect = Rect {
            pos,
            size: image.size(),
        };
        let cell = match *image {
            Image::Solid { color, .. } => Cell {
                ch: ' ',
                fg: palette::WHITE,
                bg: color,
            },
            Image::Loaded { color, .. } => Cell {
                ch: IMAGE_GLYPH,
                fg: color,
                bg: Rgb(color.0 / 3, color.1 / 3, color.2 / 3),
            },
        };
        self.fill_cells(rect, cell);
    }

    fn text_size(&self, text: &str, _font: Font) -> IVec2 {
        // One cell per character, whatever the font
        let chars = text.chars().count() as i64;
        let w = div_ceil(chars * SCREEN_WIDTH as i64, self.grid.cols as i64);
        let h = div_ceil(SCREEN_HEIGHT as i64, self.grid.rows as i64);
        IVec2::new(w as i32, h as i32)
    }

    fn draw_text(&mut self, text: &str, _font: Font, pos: IVec2, color: Rgb) {
        let Some((start, row)) = self.cell_at(pos.max(IVec2::ZERO)) else {
            return;
        };
        for (col, ch) in (start..self.grid.cols).zip(text.chars()) {
            let i = self.index(col, row);
            self.cur[i].ch = ch;
            self.cur[i].fg = color;
        }
    }

    fn present(&mut self) -> Result<(), Error> {
        self.flush_diff()?;
        Ok(())
    }
}

fn color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

fn to_cell(px: i32, cells: u16, extent: i32) -> i64 {
    (px as i64 * cells as i64).div_euclid(extent as i64)
}

fn div_ceil(a: i64, b: i64) -> i64 {
    -((-a).div_euclid(b))
}

/// Cells touched by the pixel span `[start, end)`
fn span(start: i32, end: i32, cells: u16, extent: i32) -> Range<u16> {
    let first = to_cell(start, cells, extent).clamp(0, cells as i64);
    let last = div_ceil(end as i64 * cells as i64, extent as i64).clamp(0, cells as i64);
    first as u16..last.max(first) as u16
}
