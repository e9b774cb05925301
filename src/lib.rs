//! Mission Earth - A three-lane side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Simulation (lanes, player physics, spawning, collisions, screen state machine)
//! - `ui`: Button layout and hit testing shared by drawing and click dispatch
//! - `renderer`: Render collaborator trait and scene composition
//! - `assets`: Asset source trait and the startup sprite bank
//! - `app`: Frame loop and input dispatch
//! - `platform`: Native terminal frontend (crossterm)

pub mod app;
pub mod assets;
pub mod error;
pub mod input;
#[cfg(not(target_arch = "wasm32"))]
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use app::{App, Flow};
pub use error::{AssetError, Error};
pub use settings::Settings;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Logical screen size in pixels
    pub const SCREEN_WIDTH: i32 = 900;
    pub const SCREEN_HEIGHT: i32 = 700;
    /// Window title
    pub const TITLE: &str = "Mission Earth";
    /// Default frame rate of the cooperative loop
    pub const TARGET_FPS: u32 = 60;

    /// Background scroll speed (px per tick)
    pub const SCROLL_SPEED: i32 = 5;
    /// Ticks between background image rotations
    pub const BG_SWITCH_TICKS: u32 = 300;

    /// Player sprite size
    pub const PLAYER_WIDTH: i32 = 90;
    pub const PLAYER_HEIGHT: i32 = 90;
    /// Player start position on level (re)start
    pub const PLAYER_START_X: i32 = 100;
    pub const PLAYER_START_LANE: usize = 1;
    /// Horizontal movement per tick while a direction is held
    pub const PLAYER_STEP: i32 = 7;
    /// Jump physics (px/tick, px/tick²). Negative is up.
    pub const JUMP_STRENGTH: i32 = -15;
    pub const GRAVITY: i32 = 1;

    /// Grass strip kept clear below the bottom lane
    pub const GROUND_MARGIN: i32 = 40;
    pub const LANE_COUNT: usize = 3;

    /// Obstacle geometry
    pub const OBSTACLE_WIDTH: i32 = 140;
    pub const OBSTACLE_HEIGHT: i32 = 140;
    /// Obstacles appear this far past the right edge
    pub const OBSTACLE_SPAWN_OFFSET: i32 = 50;

    /// Puzzle piece hitbox (sprites are drawn slightly larger)
    pub const PUZZLE_SIZE: i32 = 80;
    pub const PUZZLE_SPRITE_SIZE: i32 = 90;
    /// Puzzle pieces spawn in [WIDTH + MIN, WIDTH + MAX]
    pub const PUZZLE_SPAWN_MIN_OFFSET: i32 = 400;
    pub const PUZZLE_SPAWN_MAX_OFFSET: i32 = 1200;
    /// Puzzle pieces travel faster than the background
    pub const PUZZLE_SPEED_FACTOR: f32 = 1.4;
    /// Pieces alive at once during a level
    pub const LIVE_PUZZLE_PIECES: usize = 3;
    pub const PIECES_REQUIRED_TO_FINISH: u32 = 3;

    /// Completed-puzzle image on the win screen
    pub const WIN_IMAGE_SIZE: i32 = 500;
}

/// Integer screen-space rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    /// Half-open point test: left/top edges are inside, right/bottom are not
    pub fn contains_point(&self, p: IVec2) -> bool {
        p.x >= self.pos.x && p.x < self.right() && p.y >= self.pos.y && p.y < self.bottom()
    }
}

/// Horizontal position that centers `width` on the screen
#[inline]
pub fn centered_x(width: i32) -> i32 {
    consts::SCREEN_WIDTH / 2 - width / 2
}
