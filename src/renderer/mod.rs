//! Rendering module
//!
//! The game draws through the `Renderer` trait in logical 900x700 pixels.
//! `scene` turns a `GameWorld` into renderer calls; backends only need to
//! know how to fill rectangles, place images and draw text.

pub mod palette;
pub mod scene;

pub use palette::Rgb;
pub use scene::draw_frame;

use glam::IVec2;

use crate::Rect;
use crate::assets::Image;
use crate::error::Error;

/// Text sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Screen titles
    Large,
    /// Button labels
    Medium,
    /// Instructions, HUD, small buttons
    Small,
}

impl Font {
    /// Nominal line height in logical pixels
    pub fn height(self) -> i32 {
        match self {
            Font::Large => 80,
            Font::Medium => 50,
            Font::Small => 30,
        }
    }
}

/// Render collaborator
pub trait Renderer {
    /// Start a frame filled with `color`
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Draw `image` with its top-left corner at `pos`
    fn draw(&mut self, image: &Image, pos: IVec2);

    /// Size `text` would occupy when drawn in `font`
    fn text_size(&self, text: &str, font: Font) -> IVec2;

    fn draw_text(&mut self, text: &str, font: Font, pos: IVec2, color: Rgb);

    /// Show the finished frame
    fn present(&mut self) -> Result<(), Error>;
}

/// Renderer that records calls, for tests
#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear(Rgb),
        Fill(Rect, Rgb),
        Draw(Image, IVec2),
        Text(String, IVec2, Rgb),
        Present,
    }

    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub ops: Vec<Op>,
        pub frames: usize,
    }

    impl RecordingRenderer {
        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(text, ..) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn has_text(&self, needle: &str) -> bool {
            self.texts().iter().any(|t| *t == needle)
        }

        pub fn fills(&self) -> Vec<(Rect, Rgb)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Fill(rect, color) => Some((*rect, *color)),
                    _ => None,
                })
                .collect()
        }

        pub fn draws(&self) -> Vec<(Image, IVec2)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Draw(image, pos) => Some((*image, *pos)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self, color: Rgb) {
            self.ops.clear();
            self.ops.push(Op::Clear(color));
        }

        fn fill_rect(&mut self, rect: Rect, color: Rgb) {
            self.ops.push(Op::Fill(rect, color));
        }

        fn draw(&mut self, image: &Image, pos: IVec2) {
            self.ops.push(Op::Draw(*image, pos));
        }

        fn text_size(&self, text: &str, font: Font) -> IVec2 {
            let h = font.height();
            IVec2::new(text.chars().count() as i32 * h / 2, h)
        }

        fn draw_text(&mut self, text: &str, _font: Font, pos: IVec2, color: Rgb) {
            self.ops.push(Op::Text(text.to_string(), pos, color));
        }

        fn present(&mut self) -> Result<(), Error> {
            self.ops.push(Op::Present);
            self.frames += 1;
            Ok(())
        }
    }
}
