//! Per-frame simulation tick
//!
//! Only the in-level screens simulate anything; menus are static until a
//! command moves the state machine (see `transition`).

use serde::{Deserialize, Serialize};

use super::collision::lane_contact;
use super::level::Level;
use super::spawn::spawn_obstacle;
use super::state::{GameEvent, GameState, GameWorld};
use crate::consts::*;

/// Keys held during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Puzzle piece travel per tick
#[inline]
pub fn puzzle_speed() -> i32 {
    (SCROLL_SPEED as f32 * PUZZLE_SPEED_FACTOR) as i32
}

/// Advance the game by one tick
pub fn tick(world: &mut GameWorld, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if let GameState::InLevel(level) = world.state {
        tick_level(world, level, input, &mut events);
    }
    events
}

/// One in-level tick: scenery, physics, spawning, obstacles, pieces, movement
fn tick_level(world: &mut GameWorld, level: Level, input: &TickInput, events: &mut Vec<GameEvent>) {
    world.background.scroll();
    world.player.apply_physics(&world.lanes);

    world.level_ticks += 1;
    if world.level_ticks % level.obstacle_spawn_interval() == 0 {
        let obstacle = spawn_obstacle(&mut world.rng, &world.lanes, level, &world.catalog);
        let lane = world.lanes.index_of(obstacle.bounds.y()).unwrap_or_default();
        log::debug!("Obstacle spawned in lane {} at tick {}", lane, world.level_ticks);
        world.obstacles.push(obstacle);
        events.push(GameEvent::ObstacleSpawned { lane });
    }

    // An obstacle hit replaces the whole level, so nothing below may run
    if update_obstacles(world, level) {
        events.push(GameEvent::HardReset { from: level });
        return;
    }

    if update_puzzle_pieces(world, level, events) {
        events.push(GameEvent::LevelCleared(level));
        return;
    }

    world.player.handle_movement(input);
}

/// Move obstacles and drop the ones that left the screen.
///
/// Returns true if the player was hit (the world has been hard-reset).
fn update_obstacles(world: &mut GameWorld, level: Level) -> bool {
    let speed = level.obstacle_speed();
    let player = world.player.rect();
    let lane_y = world.lanes.y(world.player.lane);

    let mut hit = false;
    world.obstacles.retain_mut(|obstacle| {
        obstacle.bounds.pos.x -= speed;
        if obstacle.bounds.x() < -OBSTACLE_WIDTH {
            return false;
        }
        if lane_contact(&obstacle.bounds, &player, lane_y) {
            hit = true;
        }
        true
    });

    if hit {
        world.hard_reset();
    }
    hit
}

/// Move puzzle pieces, collect or replace them.
///
/// Returns true when the final required piece was collected (the world is
/// now on the finish screen). Replacements are spawned after the pass so the
/// list is never grown while it is being walked.
fn update_puzzle_pieces(world: &mut GameWorld, level: Level, events: &mut Vec<GameEvent>) -> bool {
    let speed = puzzle_speed();
    let player = world.player.rect();
    let lane_y = world.lanes.y(world.player.lane);

    let mut replacements = 0;
    let mut finished = false;
    let mut i = 0;
    while i < world.puzzles.len() {
        let piece = &mut world.puzzles[i];
        piece.bounds.pos.x -= speed;

        if piece.bounds.x() < -PUZZLE_SIZE {
            world.puzzles.remove(i);
            replacements += 1;
            events.push(GameEvent::PieceMissed);
            continue;
        }

        if lane_contact(&piece.bounds, &player, lane_y) {
            world.puzzles.remove(i);
            world.puzzles_collected += 1;
            events.push(GameEvent::PieceCollected {
                collected: world.puzzles_collected,
            });
            log::debug!(
                "Piece collected ({}/{})",
                world.puzzles_collected,
                PIECES_REQUIRED_TO_FINISH
            );
            if world.puzzles_collected >= PIECES_REQUIRED_TO_FINISH {
                finished = true;
                break;
            }
            replacements += 1;
            continue;
        }

        i += 1;
    }

    for _ in 0..replacements {
        world.spawn_puzzle_piece();
    }

    if finished {
        world.finish_level(level);
    }
    finished
}
