//! Scene composition: one function per screen

use glam::IVec2;

use super::palette::{self, Rgb};
use super::{Font, Renderer};
use crate::Rect;
use crate::assets::SpriteBank;
use crate::centered_x;
use crate::consts::*;
use crate::sim::{GameState, GameWorld, Level};
use crate::ui::{self, ButtonSlot, ButtonStyle};

const INSTRUCTIONS: [&str; 6] = [
    "You are collecting puzzle pieces to save Earth.",
    "Arrow Up/Down: change lanes.",
    "Arrow Left/Right: move horizontally.",
    "Stars make you go faster",
    "Avoid pollution blocks and collect puzzle pieces.",
    "Collect 3 pieces to clear the level.",
];

const GROUND_STRIP: Rect = Rect::new(0, SCREEN_HEIGHT - 40, SCREEN_WIDTH, 40);

/// Draw the whole frame for the world's current screen. Does not present.
pub fn draw_frame(r: &mut dyn Renderer, world: &GameWorld, sprites: &SpriteBank, hover: Option<IVec2>) {
    r.clear(palette::BLACK);
    match world.state {
        GameState::Menu => draw_title(r, "Mission Earth", 100),
        GameState::LevelSelect => draw_title(r, "Select Level", 50),
        GameState::Instructions => draw_instructions(r),
        GameState::InLevel(level) => draw_level(r, world, sprites, level),
        GameState::Finish(_) => draw_title(r, "LEVEL CLEARED!", SCREEN_HEIGHT / 2 - 100),
        GameState::Win => draw_win(r, sprites),
    }

    for slot in ui::layout(world.state, &world.progress) {
        draw_button(r, &slot, hover);
    }

    if world.state.active_level().is_some() {
        let info = format!("Energy: {}/{}", world.puzzles_collected, PIECES_REQUIRED_TO_FINISH);
        let size = r.text_size(&info, Font::Small);
        r.draw_text(&info, Font::Small, IVec2::new(SCREEN_WIDTH - size.x - 20, 20), palette::WHITE);
    }
}

fn draw_centered(r: &mut dyn Renderer, text: &str, font: Font, y: i32, color: Rgb) {
    let size = r.text_size(text, font);
    r.draw_text(text, font, IVec2::new(centered_x(size.x), y), color);
}

fn draw_title(r: &mut dyn Renderer, text: &str, y: i32) {
    draw_centered(r, text, Font::Large, y, palette::WHITE);
}

fn draw_instructions(r: &mut dyn Renderer) {
    draw_title(r, "How to Play", 60);
    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        draw_centered(r, line, Font::Small, 160 + i as i32 * 40, palette::WHITE);
    }
}

fn draw_level(r: &mut dyn Renderer, world: &GameWorld, sprites: &SpriteBank, level: Level) {
    for (x, index) in world.background.slots() {
        r.draw(sprites.background(level, index), IVec2::new(x, 0));
    }

    r.draw(sprites.player(level), world.player.rect().pos);

    for obstacle in &world.obstacles {
        r.draw(sprites.sprite(obstacle.sprite), obstacle.bounds.pos);
    }
    for piece in &world.puzzles {
        r.draw(sprites.sprite(piece.sprite), piece.bounds.pos);
    }

    r.fill_rect(GROUND_STRIP, palette::GROUND);
}

fn draw_win(r: &mut dyn Renderer, sprites: &SpriteBank) {
    draw_title(r, "YOU SAVED EARTH!", 50);
    if let Some(image) = sprites.win_image() {
        let size = image.size();
        let pos = IVec2::new(centered_x(size.x), SCREEN_HEIGHT / 2 - size.y / 2 + 30);
        r.draw(image, pos);
    }
    draw_centered(
        r,
        "All levels complete. Thanks for playing!",
        Font::Medium,
        SCREEN_HEIGHT - 100,
        palette::WHITE,
    );
}

fn draw_button(r: &mut dyn Renderer, slot: &ButtonSlot, hover: Option<IVec2>) {
    let hovered = hover.is_some_and(|p| slot.rect.contains_point(p));
    let (fill, text) = match slot.style {
        ButtonStyle::Action if hovered => (palette::BUTTON_HOVER, palette::BLACK),
        ButtonStyle::Action => (palette::BUTTON, palette::BLACK),
        ButtonStyle::Completed => (palette::GREEN_COMPLETED, palette::WHITE),
        ButtonStyle::Unlocked => (palette::RED_UNCOMPLETED, palette::WHITE),
        ButtonStyle::Locked => (palette::LOCKED, palette::WHITE),
    };
    r.fill_rect(slot.rect, fill);

    // Small buttons get the small font
    let font = if slot.rect.size.y <= 50 {
        Font::Small
    } else {
        Font::Medium
    };
    let size = r.text_size(&slot.label, font);
    let pos = slot.rect.center() - size / 2;
    r.draw_text(&slot.label, font, pos, text);
}
