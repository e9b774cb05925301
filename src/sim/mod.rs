//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform concerns:
//! - One owned `GameWorld`, mutated through `&mut` only
//! - Seeded RNG only
//! - Entities reference sprites by index, never by image

pub mod background;
pub mod collision;
pub mod lane;
pub mod level;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod transition;

pub use background::Background;
pub use collision::{collides, lane_contact};
pub use lane::Lanes;
pub use level::Level;
pub use player::{LaneShift, Player};
pub use spawn::{Entity, SpriteCatalog, SpriteRef, spawn_obstacle, spawn_puzzle};
pub use state::{GameEvent, GameState, GameWorld, ProgressMap};
pub use tick::{TickInput, puzzle_speed, tick};
pub use transition::Command;
