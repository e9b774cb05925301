//! Game state and core simulation types
//!
//! `GameWorld` owns every piece of mutable game state. The frame loop holds
//! the only instance and hands out `&mut` to the update functions in turn.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::background::Background;
use super::lane::Lanes;
use super::level::Level;
use super::player::Player;
use super::spawn::{Entity, SpriteCatalog, spawn_puzzle};
use crate::consts::LIVE_PUZZLE_PIECES;

/// Active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Menu,
    LevelSelect,
    Instructions,
    /// Playing a level
    InLevel(Level),
    /// Level just cleared
    Finish(Level),
    Win,
}

impl GameState {
    /// Level being played, if any
    pub fn active_level(&self) -> Option<Level> {
        match self {
            GameState::InLevel(level) => Some(*level),
            _ => None,
        }
    }
}

/// Which levels have been cleared during this process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressMap {
    completed: [bool; 3],
}

impl ProgressMap {
    pub fn is_completed(&self, level: Level) -> bool {
        self.completed[level.index()]
    }

    /// Mark `level` cleared. Returns true the first time.
    pub fn mark_completed(&mut self, level: Level) -> bool {
        let was = self.completed[level.index()];
        self.completed[level.index()] = true;
        !was
    }

    /// Level 1 is always playable; later levels need the previous one cleared
    pub fn is_unlocked(&self, level: Level) -> bool {
        match level.previous() {
            None => true,
            Some(previous) => self.is_completed(previous),
        }
    }
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ObstacleSpawned { lane: usize },
    /// Obstacle hit: the run restarted at Level 1
    HardReset { from: Level },
    PieceCollected { collected: u32 },
    /// Piece scrolled off-screen uncollected
    PieceMissed,
    LevelCleared(Level),
}

/// Complete mutable game state
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub state: GameState,
    pub progress: ProgressMap,
    /// Level the per-level fields below belong to (also the level a Finish refers to)
    pub level: Level,
    pub lanes: Lanes,
    pub player: Player,
    pub obstacles: Vec<Entity>,
    pub puzzles: Vec<Entity>,
    pub puzzles_collected: u32,
    /// Level-local tick counter driving obstacle spawns
    pub level_ticks: u64,
    pub background: Background,
    pub catalog: SpriteCatalog,
    pub(crate) rng: Pcg32,
}

impl GameWorld {
    /// New world on the main menu
    pub fn new(seed: u64, catalog: SpriteCatalog) -> Self {
        let lanes = Lanes::default();
        Self {
            state: GameState::Menu,
            progress: ProgressMap::default(),
            level: Level::One,
            lanes,
            player: Player::new(&lanes),
            obstacles: Vec::new(),
            puzzles: Vec::new(),
            puzzles_collected: 0,
            level_ticks: 0,
            background: Background::new(catalog.background_count(Level::One)),
            catalog,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Enter `level` from scratch: fresh player, no obstacles, three pieces queued
    pub fn start_level(&mut self, level: Level) {
        log::info!("Starting {}", level);
        self.state = GameState::InLevel(level);
        self.level = level;
        self.level_ticks = 0;
        self.obstacles.clear();
        self.puzzles.clear();
        self.puzzles_collected = 0;
        self.player.reset(&self.lanes);
        self.background.reset(self.catalog.background_count(level));

        for _ in 0..LIVE_PUZZLE_PIECES {
            self.spawn_puzzle_piece();
        }
    }

    /// Obstacle penalty: discard the run and restart at Level 1. Progress is kept.
    pub fn hard_reset(&mut self) {
        log::info!("Obstacle hit in {}: restarting at {}", self.level, Level::One);
        self.start_level(Level::One);
    }

    /// Level cleared: record it and show the finish screen
    pub fn finish_level(&mut self, level: Level) {
        if self.progress.mark_completed(level) {
            log::info!("{} completed for the first time", level);
        }
        self.state = GameState::Finish(level);
    }

    pub(crate) fn spawn_puzzle_piece(&mut self) {
        let piece = spawn_puzzle(&mut self.rng, &self.lanes, &self.catalog);
        self.puzzles.push(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_is_on_menu() {
        let world = GameWorld::new(1, SpriteCatalog::default());
        assert_eq!(world.state, GameState::Menu);
        assert!(world.puzzles.is_empty());
        assert_eq!(world.progress, ProgressMap::default());
    }

    #[test]
    fn test_start_level_initializes() {
        let mut world = GameWorld::new(1, SpriteCatalog::default());
        world.start_level(Level::Two);
        assert_eq!(world.state, GameState::InLevel(Level::Two));
        assert_eq!(world.puzzles.len(), 3);
        assert!(world.obstacles.is_empty());
        assert_eq!(world.level_ticks, 0);
        assert_eq!(world.player.x, 100);
        assert_eq!(world.player.lane, 1);
    }

    #[test]
    fn test_unlock_gating() {
        let mut progress = ProgressMap::default();
        assert!(progress.is_unlocked(Level::One));
        assert!(!progress.is_unlocked(Level::Two));
        assert!(!progress.is_unlocked(Level::Three));

        assert!(progress.mark_completed(Level::One));
        assert!(progress.is_unlocked(Level::Two));
        assert!(!progress.is_unlocked(Level::Three));

        // Idempotent
        assert!(!progress.mark_completed(Level::One));
        assert!(progress.is_completed(Level::One));
    }

    #[test]
    fn test_hard_reset_keeps_progress() {
        let mut world = GameWorld::new(3, SpriteCatalog::default());
        world.progress.mark_completed(Level::One);
        world.progress.mark_completed(Level::Two);
        world.start_level(Level::Three);
        world.hard_reset();
        assert_eq!(world.state, GameState::InLevel(Level::One));
        assert!(world.progress.is_unlocked(Level::Three));
    }
}
