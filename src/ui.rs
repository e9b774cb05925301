//! Screen button layout
//!
//! The same layout drives drawing and click hit testing, so what the player
//! sees is exactly what is clickable.

use glam::IVec2;

use crate::Rect;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{Command, GameState, Level, ProgressMap};

/// A clickable (or visibly locked) control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Start,
    Levels,
    Back,
    Continue,
    Level(Level),
}

impl Button {
    /// Command issued when this button is clicked
    pub fn command(self) -> Command {
        match self {
            Button::Start => Command::Start,
            Button::Levels => Command::OpenLevels,
            Button::Back => Command::Back,
            Button::Continue => Command::Continue,
            Button::Level(level) => Command::SelectLevel(level),
        }
    }
}

/// Visual treatment of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Plain green button, highlighted on hover
    Action,
    /// Level cleared
    Completed,
    /// Playable, not yet cleared
    Unlocked,
    /// Drawn but not clickable
    Locked,
}

/// Button placed on the current screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSlot {
    pub button: Button,
    pub rect: Rect,
    pub label: String,
    pub style: ButtonStyle,
}

impl ButtonSlot {
    fn action(button: Button, rect: Rect, label: &str) -> Self {
        Self {
            button,
            rect,
            label: label.to_string(),
            style: ButtonStyle::Action,
        }
    }

    pub fn clickable(&self) -> bool {
        self.style != ButtonStyle::Locked
    }
}

/// Menu buttons
pub const START_BUTTON: Rect = Rect::new(SCREEN_WIDTH / 2 - 100, 250, 200, 60);
pub const LEVELS_BUTTON: Rect = Rect::new(SCREEN_WIDTH / 2 - 100, 350, 200, 60);
/// Back button on level select and instructions
pub const FOOTER_BACK_BUTTON: Rect = Rect::new(50, SCREEN_HEIGHT - 80, 150, 50);
pub const INSTRUCTIONS_CONTINUE_BUTTON: Rect = Rect::new(SCREEN_WIDTH / 2 - 110, SCREEN_HEIGHT - 90, 220, 60);
/// Back button drawn over a running level
pub const LEVEL_BACK_BUTTON: Rect = Rect::new(50, 20, 150, 50);
pub const FINISH_CONTINUE_BUTTON: Rect = Rect::new(SCREEN_WIDTH / 2 - 110, SCREEN_HEIGHT / 2, 220, 60);

/// Level-select entry for `level`
pub fn level_button_rect(level: Level) -> Rect {
    Rect::new(SCREEN_WIDTH / 2 - 125, 180 + level.index() as i32 * 100, 250, 80)
}

/// Buttons shown on `state`
pub fn layout(state: GameState, progress: &ProgressMap) -> Vec<ButtonSlot> {
    match state {
        GameState::Menu => vec![
            ButtonSlot::action(Button::Start, START_BUTTON, "Start"),
            ButtonSlot::action(Button::Levels, LEVELS_BUTTON, "Levels"),
        ],
        GameState::LevelSelect => {
            let mut slots: Vec<ButtonSlot> = Level::ALL
                .iter()
                .map(|&level| {
                    let unlocked = progress.is_unlocked(level);
                    let style = if progress.is_completed(level) {
                        ButtonStyle::Completed
                    } else if unlocked {
                        ButtonStyle::Unlocked
                    } else {
                        ButtonStyle::Locked
                    };
                    let label = if unlocked {
                        level.name().to_string()
                    } else {
                        format!("{} (Locked)", level.name())
                    };
                    ButtonSlot {
                        button: Button::Level(level),
                        rect: level_button_rect(level),
                        label,
                        style,
                    }
                })
                .collect();
            slots.push(ButtonSlot::action(Button::Back, FOOTER_BACK_BUTTON, "Back"));
            slots
        }
        GameState::Instructions => vec![
            ButtonSlot::action(Button::Back, FOOTER_BACK_BUTTON, "Back"),
            ButtonSlot::action(Button::Continue, INSTRUCTIONS_CONTINUE_BUTTON, "Continue"),
        ],
        GameState::InLevel(_) => vec![ButtonSlot::action(Button::Back, LEVEL_BACK_BUTTON, "Back")],
        GameState::Finish(_) => vec![ButtonSlot::action(
            Button::Continue,
            FINISH_CONTINUE_BUTTON,
            "Continue",
        )],
        GameState::Win => Vec::new(),
    }
}

/// Clickable button under `pos`, if any
pub fn button_at(state: GameState, progress: &ProgressMap, pos: IVec2) -> Option<Button> {
    layout(state, progress)
        .into_iter()
        .find(|slot| slot.clickable() && slot.rect.contains_point(pos))
        .map(|slot| slot.button)
}

/// Command for a primary click at `pos`. The win screen accepts a click anywhere.
pub fn click(state: GameState, progress: &ProgressMap, pos: IVec2) -> Option<Command> {
    if state == GameState::Win {
        return Some(Command::Dismiss);
    }
    button_at(state, progress, pos).map(Button::command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clickable_levels(progress: &ProgressMap) -> Vec<Level> {
        layout(GameState::LevelSelect, progress)
            .into_iter()
            .filter(|slot| slot.clickable())
            .filter_map(|slot| match slot.button {
                Button::Level(level) => Some(level),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_only_level_one_clickable_initially() {
        let progress = ProgressMap::default();
        assert_eq!(clickable_levels(&progress), vec![Level::One]);

        let slots = layout(GameState::LevelSelect, &progress);
        assert_eq!(slots[1].label, "Level 2 (Locked)");
        assert_eq!(slots[1].style, ButtonStyle::Locked);
        // Clicking a locked level does nothing
        let pos = level_button_rect(Level::Two).center();
        assert_eq!(click(GameState::LevelSelect, &progress, pos), None);
    }

    #[test]
    fn test_completing_level_one_unlocks_level_two() {
        let mut progress = ProgressMap::default();
        progress.mark_completed(Level::One);
        assert_eq!(clickable_levels(&progress), vec![Level::One, Level::Two]);

        let slots = layout(GameState::LevelSelect, &progress);
        assert_eq!(slots[0].style, ButtonStyle::Completed);
        assert_eq!(slots[1].style, ButtonStyle::Unlocked);
        assert_eq!(slots[2].style, ButtonStyle::Locked);

        let pos = level_button_rect(Level::Two).center();
        assert_eq!(
            click(GameState::LevelSelect, &progress, pos),
            Some(Command::SelectLevel(Level::Two))
        );
    }

    #[test]
    fn test_menu_clicks() {
        let progress = ProgressMap::default();
        assert_eq!(
            click(GameState::Menu, &progress, START_BUTTON.center()),
            Some(Command::Start)
        );
        assert_eq!(
            click(GameState::Menu, &progress, LEVELS_BUTTON.center()),
            Some(Command::OpenLevels)
        );
        assert_eq!(click(GameState::Menu, &progress, IVec2::new(5, 5)), None);
    }

    #[test]
    fn test_button_edges_are_half_open() {
        let progress = ProgressMap::default();
        assert_eq!(
            button_at(GameState::Menu, &progress, START_BUTTON.pos),
            Some(Button::Start)
        );
        let past = IVec2::new(START_BUTTON.right(), START_BUTTON.y());
        assert_eq!(button_at(GameState::Menu, &progress, past), None);
    }

    #[test]
    fn test_win_accepts_any_click() {
        let progress = ProgressMap::default();
        assert_eq!(
            click(GameState::Win, &progress, IVec2::new(1, 1)),
            Some(Command::Dismiss)
        );
    }

    #[test]
    fn test_in_level_back_button() {
        let progress = ProgressMap::default();
        let state = GameState::InLevel(Level::One);
        assert_eq!(
            click(state, &progress, LEVEL_BACK_BUTTON.center()),
            Some(Command::Back)
        );
        assert_eq!(click(state, &progress, IVec2::new(600, 400)), None);
    }
}
