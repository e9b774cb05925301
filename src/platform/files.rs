//! PNG files on disk
//!
//! Images are decoded with the `image` crate and kept in memory, scaled to
//! their sprite size. The terminal can only show one colour per cell, so
//! each image is drawn with its average colour.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use glam::IVec2;
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

use crate::assets::{AssetSource, Image};
use crate::error::AssetError;
use crate::renderer::palette::{self, Rgb};

#[derive(Default)]
pub struct FileAssets {
    images: HashMap<u64, RgbaImage>,
    next_key: u64,
}

impl FileAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Images loaded successfully so far
    pub fn loaded(&self) -> usize {
        self.images.len()
    }

    /// Decoded pixels behind a loaded image
    pub fn pixels(&self, image: &Image) -> Option<&RgbaImage> {
        match image {
            Image::Loaded { key, .. } => self.images.get(key),
            Image::Solid { .. } => None,
        }
    }
}

impl AssetSource for FileAssets {
    fn load_image(&mut self, path: &Path) -> Result<Image, AssetError> {
        let bytes = fs::read(path).map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .map_err(|e| AssetError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
            .to_rgba8();

        let size = IVec2::new(decoded.width() as i32, decoded.height() as i32);
        let color = average_color(&decoded);
        let key = self.next_key;
        self.next_key += 1;
        self.images.insert(key, decoded);
        log::debug!("Loaded {} ({}x{})", path.display(), size.x, size.y);
        Ok(Image::Loaded { key, size, color })
    }

    fn scale(&mut self, image: Image, size: IVec2) -> Image {
        match image {
            Image::Loaded { key, color, .. } => {
                let Some(pixels) = self.images.get_mut(&key) else {
                    return Image::Loaded { key, size, color };
                };
                let (w, h) = (size.x.max(1) as u32, size.y.max(1) as u32);
                if pixels.dimensions() != (w, h) {
                    *pixels = imageops::resize(&*pixels, w, h, FilterType::Triangle);
                }
                Image::Loaded {
                    key,
                    size,
                    color: average_color(pixels),
                }
            }
            Image::Solid { color, .. } => Image::Solid { color, size },
        }
    }

    fn list_images(&self, dir: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Cannot list {}: {e}", dir.display());
                return Vec::new();
            }
        };
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && is_png_name(path))
            .collect();
        paths.sort();
        paths
    }
}

fn is_png_name(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Alpha-weighted mean colour. Fully transparent images average to black.
fn average_color(pixels: &RgbaImage) -> Rgb {
    let (mut r, mut g, mut b, mut total) = (0u64, 0u64, 0u64, 0u64);
    for p in pixels.pixels() {
        let [pr, pg, pb, pa] = p.0;
        let a = pa as u64;
        r += pr as u64 * a;
        g += pg as u64 * a;
        b += pb as u64 * a;
        total += a;
    }
    if total == 0 {
        return palette::BLACK;
    }
    Rgb((r / total) as u8, (g / total) as u8, (b / total) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use image::Rgba;

    use crate::assets::SpriteBank;
    use crate::sim::Level;

    fn png_bytes(w: u32, h: u32, color: [u8; 4]) -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(w, h, Rgba(color))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    /// Signature and IHDR intact, pixel data cut off
    fn truncated_png() -> Vec<u8> {
        let mut bytes = png_bytes(90, 90, [10, 200, 10, 255]);
        bytes.truncate(40);
        bytes
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mission-earth-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_and_list() {
        let dir = scratch_dir("files");
        fs::write(dir.join("b.png"), png_bytes(10, 20, [255, 0, 0, 255])).unwrap();
        fs::write(dir.join("a.PNG"), png_bytes(30, 40, [0, 0, 255, 255])).unwrap();
        fs::write(dir.join("notes.txt"), b"hello").unwrap();
        fs::write(dir.join("broken.png"), b"nope").unwrap();

        let mut assets = FileAssets::new();
        let listed = assets.list_images(&dir);
        assert_eq!(
            listed,
            vec![dir.join("a.PNG"), dir.join("b.png"), dir.join("broken.png")]
        );

        let image = assets.load_image(&dir.join("b.png")).unwrap();
        assert_eq!(image.size(), IVec2::new(10, 20));
        assert!(matches!(
            image,
            Image::Loaded {
                color: Rgb(255, 0, 0),
                ..
            }
        ));
        assert!(matches!(
            assets.load_image(&dir.join("broken.png")),
            Err(AssetError::Decode { .. })
        ));
        assert!(matches!(
            assets.load_image(&dir.join("missing.png")),
            Err(AssetError::Read { .. })
        ));
        assert_eq!(assets.loaded(), 1);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_truncated_png_is_rejected() {
        let dir = scratch_dir("truncated");
        let path = dir.join("cut.png");
        fs::write(&path, truncated_png()).unwrap();

        let mut assets = FileAssets::new();
        assert!(matches!(
            assets.load_image(&path),
            Err(AssetError::Decode { .. })
        ));
        assert_eq!(assets.loaded(), 0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_sprite_bank_replaces_truncated_png() {
        let root = scratch_dir("bank");
        let players = root.join("player_images");
        fs::create_dir_all(&players).unwrap();
        fs::write(players.join("player1.png"), truncated_png()).unwrap();
        fs::write(players.join("player2.png"), png_bytes(16, 16, [0, 0, 255, 255])).unwrap();

        let mut assets = FileAssets::new();
        let bank = SpriteBank::load(&mut assets, &root);

        let broken = bank.player(Level::One);
        assert_eq!(
            *broken,
            Image::placeholder(IVec2::new(90, 90), palette::PLAYER_FALLBACK)
        );

        let good = *bank.player(Level::Two);
        assert_eq!(good.size(), IVec2::new(90, 90));
        assert_eq!(assets.pixels(&good).map(|p| p.dimensions()), Some((90, 90)));
        let Image::Loaded { color, .. } = good else {
            panic!("player2 should have loaded");
        };
        assert!(color.2 > 200 && color.0 < 50 && color.1 < 50);

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_average_color_weights_alpha() {
        let mut pixels = RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 0]));
        pixels.put_pixel(1, 0, Rgba([0, 128, 0, 255]));
        assert_eq!(average_color(&pixels), Rgb(0, 128, 0));

        let clear = RgbaImage::from_pixel(3, 3, Rgba([9, 9, 9, 0]));
        assert_eq!(average_color(&clear), palette::BLACK);
    }

    #[test]
    fn test_missing_dir_lists_nothing() {
        let assets = FileAssets::new();
        assert!(assets.list_images(Path::new("/definitely/not/here")).is_empty());
    }
}
