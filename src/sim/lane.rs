//! Fixed lane geometry
//!
//! Three horizontal tracks on the grass strip. Everything that moves through
//! a level (player, obstacles, puzzle pieces) rests on one of these y values.

use serde::{Deserialize, Serialize};

use crate::consts::{GROUND_MARGIN, LANE_COUNT, PLAYER_HEIGHT, SCREEN_HEIGHT};

/// Lane y positions, computed once from screen geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lanes {
    ys: [i32; LANE_COUNT],
}

impl Default for Lanes {
    fn default() -> Self {
        Self::for_screen(SCREEN_HEIGHT, PLAYER_HEIGHT)
    }
}

impl Lanes {
    /// Lanes span from 45% of the screen height down to the ground line
    pub fn for_screen(screen_height: i32, player_height: i32) -> Self {
        let top = (screen_height as f32 * 0.45) as i32;
        let bottom = screen_height - player_height - GROUND_MARGIN;
        let spacing = (bottom - top) as f32 / (LANE_COUNT - 1) as f32;

        let mut ys = [0; LANE_COUNT];
        for (i, y) in ys.iter_mut().enumerate() {
            *y = (top as f32 + i as f32 * spacing) as i32;
        }
        Self { ys }
    }

    /// Resting y of lane `index`
    ///
    /// Lane indices are clamped at every write site, so an out-of-range
    /// index here is a bug.
    #[inline]
    pub fn y(&self, index: usize) -> i32 {
        self.ys[index]
    }

    pub fn all(&self) -> &[i32; LANE_COUNT] {
        &self.ys
    }

    /// Lane index whose resting y is exactly `y`
    pub fn index_of(&self, y: i32) -> Option<usize> {
        self.ys.iter().position(|&lane_y| lane_y == y)
    }

    #[inline]
    pub fn count(&self) -> usize {
        LANE_COUNT
    }
}
