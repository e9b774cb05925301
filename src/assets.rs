//! Asset loading
//!
//! Every image the game uses is loaded once at startup into a `SpriteBank`.
//! A failed load never stops the game: the slot gets a solid-colour
//! placeholder of the same size and a warning is logged.

use std::path::{Path, PathBuf};

use glam::IVec2;

use crate::consts::*;
use crate::error::AssetError;
use crate::renderer::palette::{self, Rgb};
use crate::sim::{Level, SpriteCatalog, SpriteRef};

/// Image handle handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Image {
    /// Backend-owned image, identified by an opaque key. `color` is its average colour.
    Loaded { key: u64, size: IVec2, color: Rgb },
    /// Solid fill standing in for a missing image
    Solid { color: Rgb, size: IVec2 },
}

impl Image {
    pub fn placeholder(size: IVec2, color: Rgb) -> Self {
        Image::Solid { color, size }
    }

    pub fn size(&self) -> IVec2 {
        match self {
            Image::Loaded { size, .. } | Image::Solid { size, .. } => *size,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Image::Solid { .. })
    }
}

/// Where images come from
pub trait AssetSource {
    fn load_image(&mut self, path: &Path) -> Result<Image, AssetError>;

    /// Resize an image
    fn scale(&mut self, image: Image, size: IVec2) -> Image;

    /// `*.png` files directly inside `dir`, sorted by path. Empty if `dir` is missing.
    fn list_images(&self, dir: &Path) -> Vec<PathBuf>;
}

/// Asset layout under the asset root
pub mod paths {
    use super::*;

    /// Three background images per level: 1-3, 4-6, 7-9
    pub fn backgrounds(root: &Path, level: Level) -> [PathBuf; 3] {
        let first = level.index() * 3 + 1;
        [0, 1, 2].map(|i| root.join("backgrounds").join(format!("{}.png", first + i)))
    }

    pub fn player(root: &Path, level: Level) -> PathBuf {
        root.join("player_images")
            .join(format!("player{}.png", level.number()))
    }

    /// Directory of obstacle images for a level
    pub fn obstacles(root: &Path, level: Level) -> PathBuf {
        root.join("obstacles").join(level.name())
    }

    pub fn puzzles(root: &Path) -> PathBuf {
        root.join("puzzle_images")
    }

    pub fn win_image(root: &Path) -> PathBuf {
        root.join("final_puzzle.png")
    }
}

/// All images, loaded once
#[derive(Debug, Clone)]
pub struct SpriteBank {
    backgrounds: [Vec<Image>; 3],
    players: [Image; 3],
    obstacles: [Vec<Image>; 3],
    puzzles: Vec<Image>,
    win: Option<Image>,
}

impl SpriteBank {
    /// Load everything under `root`
    pub fn load(source: &mut dyn AssetSource, root: &Path) -> Self {
        let screen = IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        let player_size = IVec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        let obstacle_size = IVec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
        let puzzle_size = IVec2::splat(PUZZLE_SPRITE_SIZE);

        let backgrounds = Level::ALL.map(|level| {
            paths::backgrounds(root, level)
                .iter()
                .map(|path| load_or_placeholder(source, path, screen, palette::BACKGROUND_FALLBACK))
                .collect()
        });

        let players = Level::ALL.map(|level| {
            load_or_placeholder(
                source,
                &paths::player(root, level),
                player_size,
                palette::PLAYER_FALLBACK,
            )
        });

        let obstacles = Level::ALL.map(|level| {
            load_set(
                source,
                &paths::obstacles(root, level),
                obstacle_size,
                palette::OBSTACLE_FALLBACK,
            )
        });

        let puzzles = load_set(
            source,
            &paths::puzzles(root),
            puzzle_size,
            palette::PUZZLE_FALLBACK,
        );

        let win_path = paths::win_image(root);
        let win = match source.load_image(&win_path) {
            Ok(image) => Some(source.scale(image, IVec2::splat(WIN_IMAGE_SIZE))),
            Err(e) => {
                log::warn!("Win image unavailable: {e}");
                None
            }
        };

        let bank = Self {
            backgrounds,
            players,
            obstacles,
            puzzles,
            win,
        };
        log::info!("Sprites loaded: {:?}", bank.catalog());
        bank
    }

    /// Bank made only of placeholders (no asset source needed)
    pub fn placeholders() -> Self {
        let screen = IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        Self {
            backgrounds: std::array::from_fn(|_| {
                vec![Image::placeholder(screen, palette::BACKGROUND_FALLBACK); 3]
            }),
            players: [Image::placeholder(
                IVec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
                palette::PLAYER_FALLBACK,
            ); 3],
            obstacles: std::array::from_fn(|_| {
                vec![Image::placeholder(
                    IVec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
                    palette::OBSTACLE_FALLBACK,
                )]
            }),
            puzzles: vec![Image::placeholder(
                IVec2::splat(PUZZLE_SPRITE_SIZE),
                palette::PUZZLE_FALLBACK,
            )],
            win: None,
        }
    }

    /// Set sizes for the simulation's spawner
    pub fn catalog(&self) -> SpriteCatalog {
        SpriteCatalog {
            obstacles: std::array::from_fn(|i| self.obstacles[i].len()),
            puzzles: self.puzzles.len(),
            backgrounds: std::array::from_fn(|i| self.backgrounds[i].len()),
        }
    }

    pub fn background(&self, level: Level, index: usize) -> &Image {
        let set = &self.backgrounds[level.index()];
        &set[index % set.len()]
    }

    pub fn player(&self, level: Level) -> &Image {
        &self.players[level.index()]
    }

    pub fn sprite(&self, sprite: SpriteRef) -> &Image {
        match sprite {
            SpriteRef::Obstacle { level, index } => {
                let set = &self.obstacles[level.index()];
                &set[index % set.len()]
            }
            SpriteRef::Puzzle(index) => &self.puzzles[index % self.puzzles.len()],
        }
    }

    pub fn win_image(&self) -> Option<&Image> {
        self.win.as_ref()
    }
}

/// Load one image, or a placeholder of `size` on failure
fn load_or_placeholder(source: &mut dyn AssetSource, path: &Path, size: IVec2, fallback: Rgb) -> Image {
    match source.load_image(path) {
        Ok(image) => source.scale(image, size),
        Err(e) => {
            log::warn!("{e}; using placeholder");
            Image::placeholder(size, fallback)
        }
    }
}

/// Load every image in `dir`, skipping failures. Never returns an empty set.
fn load_set(source: &mut dyn AssetSource, dir: &Path, size: IVec2, fallback: Rgb) -> Vec<Image> {
    let mut images = Vec::new();
    for path in source.list_images(dir) {
        match source.load_image(&path) {
            Ok(image) => images.push(source.scale(image, size)),
            Err(e) => log::warn!("{e}; skipping"),
        }
    }
    if images.is_empty() {
        log::warn!("No usable images in {}; using placeholder", dir.display());
        images.push(Image::placeholder(size, fallback));
    }
    images
}
