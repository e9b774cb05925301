//! Colors

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const BLACK: Rgb = Rgb(0, 0, 0);

/// Level-select: unlocked but not cleared
pub const RED_UNCOMPLETED: Rgb = Rgb(200, 50, 50);
/// Level-select: cleared
pub const GREEN_COMPLETED: Rgb = Rgb(60, 148, 16);
/// Level-select: locked
pub const LOCKED: Rgb = Rgb(50, 50, 50);

pub const BUTTON: Rgb = Rgb(60, 148, 16);
pub const BUTTON_HOVER: Rgb = Rgb(100, 200, 80);

/// Grass strip along the bottom of a level
pub const GROUND: Rgb = Rgb(40, 80, 40);

/// Placeholder fills for images that failed to load
pub const PLAYER_FALLBACK: Rgb = Rgb(245, 39, 39);
pub const OBSTACLE_FALLBACK: Rgb = Rgb(200, 50, 50);
pub const PUZZLE_FALLBACK: Rgb = Rgb(255, 215, 0);
pub const BACKGROUND_FALLBACK: Rgb = BLACK;
