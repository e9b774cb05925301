//! Screen state machine
//!
//! Every user intent arrives as a `Command`. Commands that make no sense on
//! the current screen are ignored.

use serde::{Deserialize, Serialize};

use super::level::Level;
use super::player::LaneShift;
use super::state::{GameState, GameWorld};

/// User intent, already resolved from raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Menu "Start"
    Start,
    /// Menu "Levels"
    OpenLevels,
    Back,
    Continue,
    SelectLevel(Level),
    /// Click on the win screen
    Dismiss,
    ShiftLane(LaneShift),
}

impl GameWorld {
    /// Apply a command. Returns true if it changed anything.
    pub fn apply(&mut self, command: Command) -> bool {
        let before = self.state;
        let handled = match (self.state, command) {
            (GameState::Menu, Command::Start) => {
                self.state = GameState::Instructions;
                true
            }
            (GameState::Menu, Command::OpenLevels) => {
                self.state = GameState::LevelSelect;
                true
            }

            (GameState::LevelSelect, Command::Back) => {
                self.state = GameState::Menu;
                true
            }
            (GameState::LevelSelect, Command::SelectLevel(level)) => {
                if self.progress.is_unlocked(level) {
                    self.start_level(level);
                    true
                } else {
                    log::debug!("{} is locked", level);
                    false
                }
            }

            (GameState::Instructions, Command::Back) => {
                self.state = GameState::Menu;
                true
            }
            (GameState::Instructions, Command::Continue) => {
                self.start_level(Level::One);
                true
            }

            (GameState::InLevel(_), Command::Back) => {
                self.state = GameState::LevelSelect;
                true
            }
            (GameState::InLevel(_), Command::ShiftLane(shift)) => {
                self.player.shift_lane(shift, &self.lanes)
            }

            (GameState::Finish(level), Command::Continue) => {
                match level.next() {
                    Some(next) => self.start_level(next),
                    None => self.state = GameState::Win,
                }
                true
            }

            (GameState::Win, Command::Dismiss) => {
                self.state = GameState::Menu;
                true
            }

            _ => false,
        };

        if self.state != before {
            log::debug!("{:?} -> {:?}", before, self.state);
        }
        handled
    }
}
