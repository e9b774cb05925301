//! Player controller
//!
//! Horizontal movement is continuous, vertical placement is discrete (lanes)
//! except while a jump arc is in flight.

use serde::{Deserialize, Serialize};

use super::lane::Lanes;
use super::tick::TickInput;
use crate::Rect;
use crate::consts::*;

/// Lane change direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaneShift {
    Up,
    Down,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    /// Current lane (0 = top)
    pub lane: usize,
    /// Vertical velocity while jumping (negative is up)
    pub vel_y: i32,
    pub jumping: bool,
}

impl Player {
    /// Player at the level start position
    pub fn new(lanes: &Lanes) -> Self {
        Self {
            x: PLAYER_START_X,
            y: lanes.y(PLAYER_START_LANE),
            lane: PLAYER_START_LANE,
            vel_y: 0,
            jumping: false,
        }
    }

    /// Back to the level start position
    pub fn reset(&mut self, lanes: &Lanes) {
        *self = Self::new(lanes);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Apply held keys: walk left/right, start a jump
    pub fn handle_movement(&mut self, input: &TickInput) {
        if input.left && self.x > 0 {
            self.x -= PLAYER_STEP;
        }
        if input.right && self.x < SCREEN_WIDTH - PLAYER_WIDTH {
            self.x += PLAYER_STEP;
        }
        if input.jump && !self.jumping {
            self.jumping = true;
            self.vel_y = JUMP_STRENGTH;
        }
    }

    /// Integrate the jump arc. Lands on the current lane's resting y.
    pub fn apply_physics(&mut self, lanes: &Lanes) {
        if !self.jumping {
            return;
        }
        self.vel_y += GRAVITY;
        self.y += self.vel_y;

        let ground = lanes.y(self.lane);
        if self.y >= ground {
            self.y = ground;
            self.vel_y = 0;
            self.jumping = false;
        }
    }

    /// Move one lane up or down (clamped). Snaps y to the new lane even mid-jump.
    ///
    /// Returns false when already at the edge lane.
    pub fn shift_lane(&mut self, shift: LaneShift, lanes: &Lanes) -> bool {
        let target = match shift {
            LaneShift::Up if self.lane > 0 => self.lane - 1,
            LaneShift::Down if self.lane + 1 < lanes.count() => self.lane + 1,
            _ => return false,
        };
        self.lane = target;
        self.y = lanes.y(target);
        true
    }

    /// True when resting on the current lane (not mid-jump)
    pub fn is_grounded(&self, lanes: &Lanes) -> bool {
        !self.jumping && self.y == lanes.y(self.lane)
    }
}
