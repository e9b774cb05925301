//! Scrolling background ring
//!
//! Two screen-wide slots scroll left side by side. When a slot leaves the
//! screen it jumps one screen past the other slot and shows the next image.
//! Independently, every `BG_SWITCH_TICKS` both slots advance to their next
//! image so the scenery keeps changing.

use serde::{Deserialize, Serialize};

use crate::consts::{BG_SWITCH_TICKS, SCREEN_WIDTH, SCROLL_SPEED};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    /// x offset of each slot
    pub offsets: [i32; 2],
    /// Image shown in each slot
    pub indices: [usize; 2],
    /// Ticks since the last timed rotation
    pub timer: u32,
    image_count: usize,
}

impl Background {
    pub fn new(image_count: usize) -> Self {
        let image_count = image_count.max(1);
        Self {
            offsets: [0, SCREEN_WIDTH],
            indices: [0, if image_count > 1 { 1 } else { 0 }],
            timer: 0,
            image_count,
        }
    }

    /// Restart the ring for a level with `image_count` images
    pub fn reset(&mut self, image_count: usize) {
        *self = Self::new(image_count);
    }

    /// Advance one tick
    pub fn scroll(&mut self) {
        self.timer += 1;
        if self.timer >= BG_SWITCH_TICKS {
            self.timer = 0;
            for index in &mut self.indices {
                *index = (*index + 1) % self.image_count;
            }
        }

        for (offset, index) in self.offsets.iter_mut().zip(self.indices.iter_mut()) {
            *offset -= SCROLL_SPEED;
            if *offset <= -SCREEN_WIDTH {
                *offset += 2 * SCREEN_WIDTH;
                *index = (*index + 1) % self.image_count;
            }
        }
    }

    /// (x offset, image index) for both slots
    pub fn slots(&self) -> [(i32, usize); 2] {
        [
            (self.offsets[0], self.indices[0]),
            (self.offsets[1], self.indices[1]),
        ]
    }
}
