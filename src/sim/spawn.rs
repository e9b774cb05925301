//! Entity spawning (obstacles and puzzle pieces)
//!
//! The simulation never touches pixels: an entity carries a `SpriteRef`
//! that the sprite bank resolves at draw time, and spawning only needs to
//! know how many sprites exist in each set (`SpriteCatalog`).

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::lane::Lanes;
use super::level::Level;
use crate::Rect;
use crate::consts::*;

/// Which image an entity is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteRef {
    /// Index into a level's obstacle set
    Obstacle { level: Level, index: usize },
    /// Index into the shared puzzle-piece pool
    Puzzle(usize),
}

/// A moving, lane-bound entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub bounds: Rect,
    pub sprite: SpriteRef,
}

/// Sprite set sizes the spawner draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteCatalog {
    /// Obstacle images per level
    pub obstacles: [usize; 3],
    /// Shared puzzle-piece images
    pub puzzles: usize,
    /// Background images per level
    pub backgrounds: [usize; 3],
}

impl Default for SpriteCatalog {
    /// One placeholder per set, three backgrounds per level
    fn default() -> Self {
        Self {
            obstacles: [1; 3],
            puzzles: 1,
            backgrounds: [3; 3],
        }
    }
}

impl SpriteCatalog {
    pub fn obstacle_count(&self, level: Level) -> usize {
        self.obstacles[level.index()].max(1)
    }

    pub fn puzzle_count(&self) -> usize {
        self.puzzles.max(1)
    }

    pub fn background_count(&self, level: Level) -> usize {
        self.backgrounds[level.index()].max(1)
    }
}

/// New obstacle just past the right edge, in a random lane
pub fn spawn_obstacle(
    rng: &mut impl Rng,
    lanes: &Lanes,
    level: Level,
    catalog: &SpriteCatalog,
) -> Entity {
    let lane = rng.random_range(0..lanes.count());
    let index = rng.random_range(0..catalog.obstacle_count(level));
    Entity {
        bounds: Rect::new(
            SCREEN_WIDTH + OBSTACLE_SPAWN_OFFSET,
            lanes.y(lane),
            OBSTACLE_WIDTH,
            OBSTACLE_HEIGHT,
        ),
        sprite: SpriteRef::Obstacle { level, index },
    }
}

/// New puzzle piece somewhere in a wide window past the right edge
///
/// The window is much wider than the obstacle offset so pieces rarely arrive
/// stacked on an obstacle.
pub fn spawn_puzzle(rng: &mut impl Rng, lanes: &Lanes, catalog: &SpriteCatalog) -> Entity {
    let lane = rng.random_range(0..lanes.count());
    let x = rng.random_range(
        SCREEN_WIDTH + PUZZLE_SPAWN_MIN_OFFSET..=SCREEN_WIDTH + PUZZLE_SPAWN_MAX_OFFSET,
    );
    let index = rng.random_range(0..catalog.puzzle_count());
    Entity {
        bounds: Rect::new(x, lanes.y(lane), PUZZLE_SIZE, PUZZLE_SIZE),
        sprite: SpriteRef::Puzzle(index),
    }
}
