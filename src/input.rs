//! Input collaborator
//!
//! A frontend reports two things per frame: which keys are held right now
//! (continuous movement) and a queue of discrete events (lane changes,
//! clicks, quit). The core reads both and never writes back.

use glam::IVec2;

use crate::error::Error;
use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    /// Button press at a position in logical screen pixels
    MouseDown { button: MouseButton, pos: IVec2 },
}

/// Continuous input state sampled at the start of a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub held: TickInput,
    /// Pointer position in logical screen pixels (for hover highlights)
    pub mouse: Option<IVec2>,
}

/// Source of per-frame input
pub trait InputSource {
    /// Gather pending platform input and return the held-key snapshot
    fn poll(&mut self) -> Result<InputSnapshot, Error>;

    /// Take the discrete events gathered by the last `poll`
    fn drain_events(&mut self) -> Vec<InputEvent>;
}
