//! Terminal input
//!
//! Terminals report key presses (and auto-repeats) but usually not
//! releases, so a key counts as held until `window` passes without another
//! press or repeat for it.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as TermButton, MouseEvent,
    MouseEventKind,
};
use glam::IVec2;

use super::Grid;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::Error;
use crate::input::{InputEvent, InputSnapshot, InputSource, Key, MouseButton};
use crate::sim::TickInput;

/// Upper bound on events read per poll so a flood cannot stall a frame
const MAX_EVENTS_PER_POLL: usize = 64;

pub struct TerminalInput {
    window: Duration,
    grid: Grid,
    last_seen: HashMap<Key, Instant>,
    mouse: Option<IVec2>,
    events: Vec<InputEvent>,
}

impl TerminalInput {
    pub fn new(window: Duration, grid: Grid) -> Self {
        Self {
            window,
            grid,
            last_seen: HashMap::new(),
            mouse: None,
            events: Vec::new(),
        }
    }

    /// Translate one terminal event
    pub fn handle(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(cols, rows) => self.grid = Grid::new(cols, rows),
            _ => {}
        }
    }

    /// Held keys as of `now`
    pub fn snapshot(&self, now: Instant) -> InputSnapshot {
        let held = |key| {
            self.last_seen
                .get(&key)
                .is_some_and(|&at| now.saturating_duration_since(at) < self.window)
        };
        InputSnapshot {
            held: TickInput {
                left: held(Key::Left),
                right: held(Key::Right),
                jump: held(Key::Space),
            },
            mouse: self.mouse,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind == KeyEventKind::Release {
            if let Some(k) = map_key(key.code) {
                self.last_seen.remove(&k);
            }
            return;
        }

        let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
            self.events.push(InputEvent::Quit);
            return;
        }

        let Some(k) = map_key(key.code) else {
            return;
        };
        self.last_seen.insert(k, now);
        if key.kind == KeyEventKind::Press {
            self.events.push(InputEvent::KeyDown(k));
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = self.cell_to_pixel(mouse.column, mouse.row);
        self.mouse = Some(pos);
        if let MouseEventKind::Down(button) = mouse.kind {
            let button = match button {
                TermButton::Left => MouseButton::Left,
                TermButton::Right => MouseButton::Right,
                TermButton::Middle => MouseButton::Middle,
            };
            self.events.push(InputEvent::MouseDown { button, pos });
        }
    }

    /// Logical pixel at the centre of a cell
    fn cell_to_pixel(&self, col: u16, row: u16) -> IVec2 {
        let x = (2 * col as i64 + 1) * SCREEN_WIDTH as i64 / (2 * self.grid.cols as i64);
        let y = (2 * row as i64 + 1) * SCREEN_HEIGHT as i64 / (2 * self.grid.rows as i64);
        IVec2::new(x as i32, y as i32)
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<InputSnapshot, Error> {
        let mut read = 0;
        while read < MAX_EVENTS_PER_POLL && event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.handle(ev, Instant::now());
            read += 1;
        }
        Ok(self.snapshot(Instant::now()))
    }

    fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Char(' ') => Some(Key::Space),
        _ => None,
    }
}
