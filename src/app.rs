//! Frame loop
//!
//! Each frame: poll input, tick the simulation, draw and present, then turn
//! the frame's discrete input events into commands. The pacing sleep in
//! `run` is the only place the loop blocks.

use std::thread;
use std::time::{Duration, Instant};

use crate::assets::SpriteBank;
use crate::error::Error;
use crate::input::{InputEvent, InputSource, Key, MouseButton};
use crate::renderer::{Renderer, draw_frame};
use crate::sim::{Command, GameEvent, GameState, GameWorld, LaneShift, tick};
use crate::ui;

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The game: world plus its collaborators
pub struct App<R: Renderer, I: InputSource> {
    world: GameWorld,
    sprites: SpriteBank,
    renderer: R,
    input: I,
    frames: u64,
}

impl<R: Renderer, I: InputSource> App<R, I> {
    pub fn new(world: GameWorld, sprites: SpriteBank, renderer: R, input: I) -> Self {
        Self {
            world,
            sprites,
            renderer,
            input,
            frames: 0,
        }
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame
    pub fn frame(&mut self) -> Result<Flow, Error> {
        let snapshot = self.input.poll()?;

        for event in tick(&mut self.world, &snapshot.held) {
            log_event(event);
        }

        let drawn = self.world.state;
        draw_frame(&mut self.renderer, &self.world, &self.sprites, snapshot.mouse);
        self.renderer.present()?;
        self.frames += 1;

        for event in self.input.drain_events() {
            if self.dispatch(event, drawn) == Flow::Quit {
                log::info!("Quit after {} frames", self.frames);
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Run frames until quit, one every `frame_duration`
    pub fn run(&mut self, frame_duration: Duration) -> Result<(), Error> {
        log::info!("Frame loop running at {:?} per frame", frame_duration);
        loop {
            let start = Instant::now();
            if self.frame()? == Flow::Quit {
                return Ok(());
            }
            if let Some(rest) = frame_duration.checked_sub(start.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    /// Clicks only hit buttons of the `drawn` screen. Once a click has moved
    /// the state on, later clicks in the same frame are dropped.
    fn dispatch(&mut self, event: InputEvent, drawn: GameState) -> Flow {
        let command = match event {
            InputEvent::Quit => return Flow::Quit,
            InputEvent::KeyDown(Key::Up) => Some(Command::ShiftLane(LaneShift::Up)),
            InputEvent::KeyDown(Key::Down) => Some(Command::ShiftLane(LaneShift::Down)),
            // Held keys are read from the snapshot
            InputEvent::KeyDown(_) => None,
            InputEvent::MouseDown {
                button: MouseButton::Left,
                pos,
            } if self.world.state == drawn => ui::click(drawn, &self.world.progress, pos),
            InputEvent::MouseDown { .. } => None,
        };

        if let Some(command) = command {
            self.world.apply(command);
        }
        Flow::Continue
    }
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::ObstacleSpawned { lane } => log::debug!("Obstacle spawned in lane {lane}"),
        GameEvent::HardReset { from } => log::debug!("Hard reset from {from}"),
        GameEvent::PieceCollected { collected } => log::debug!("Pieces collected: {collected}"),
        GameEvent::PieceMissed => log::debug!("Piece missed"),
        GameEvent::LevelCleared(level) => log::info!("{level} cleared"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use glam::IVec2;

    use crate::input::InputSnapshot;
    use crate::renderer::recording::RecordingRenderer;
    use crate::sim::{Level, SpriteCatalog, TickInput};

    /// Input that replays one scripted entry per frame, then idles
    #[derive(Default)]
    struct ScriptedInput {
        frames: VecDeque<(InputSnapshot, Vec<InputEvent>)>,
        pending: Vec<InputEvent>,
    }

    impl ScriptedInput {
        fn push(&mut self, held: TickInput, events: Vec<InputEvent>) {
            self.frames.push_back((InputSnapshot { held, mouse: None }, events));
        }

        fn click(&mut self, pos: IVec2) {
            self.push(
                TickInput::default(),
                vec![InputEvent::MouseDown {
                    button: MouseButton::Left,
                    pos,
                }],
            );
        }
    }

    impl InputSource for ScriptedInput {
        fn poll(&mut self) -> Result<InputSnapshot, Error> {
            let (snapshot, events) = self.frames.pop_front().unwrap_or_default();
            self.pending = events;
            Ok(snapshot)
        }

        fn drain_events(&mut self) -> Vec<InputEvent> {
            std::mem::take(&mut self.pending)
        }
    }

    fn app() -> App<RecordingRenderer, ScriptedInput> {
        App::new(
            GameWorld::new(99, SpriteCatalog::default()),
            SpriteBank::placeholders(),
            RecordingRenderer::default(),
            ScriptedInput::default(),
        )
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut app = app();
        app.input_mut().push(TickInput::default(), vec![InputEvent::Quit]);
        app.run(Duration::ZERO).unwrap();
        assert_eq!(app.frames(), 1);
        assert_eq!(app.renderer().frames, 1);
    }

    #[test]
    fn test_menu_to_level_and_clear() {
        let mut app = app();
        app.input_mut().click(ui::START_BUTTON.center());
        app.input_mut().click(ui::INSTRUCTIONS_CONTINUE_BUTTON.center());

        app.frame().unwrap();
        assert_eq!(app.world().state, GameState::Instructions);
        // Drawn before the click was dispatched
        assert!(app.renderer().has_text("Mission Earth"));

        app.frame().unwrap();
        assert!(app.renderer().has_text("How to Play"));
        let world = app.world();
        assert_eq!(world.state, GameState::InLevel(Level::One));
        assert_eq!(world.puzzles.len(), 3);
        assert!(world.obstacles.is_empty());
        assert_eq!(world.level_ticks, 0);

        // Park every piece on the player in the player's lane
        let world = app.world_mut();
        let lane_y = world.lanes.y(world.player.lane);
        let x = world.player.x;
        for piece in &mut world.puzzles {
            piece.bounds.pos = IVec2::new(x, lane_y);
        }

        app.frame().unwrap();
        let world = app.world();
        assert_eq!(world.state, GameState::Finish(Level::One));
        assert!(world.progress.is_completed(Level::One));
        assert_eq!(world.puzzles_collected, 3);

        app.frame().unwrap();
        assert!(app.renderer().has_text("LEVEL CLEARED!"));
    }

    #[test]
    fn test_arrow_keys_shift_lanes() {
        let mut app = app();
        app.world_mut().start_level(Level::One);
        app.input_mut()
            .push(TickInput::default(), vec![InputEvent::KeyDown(Key::Up)]);
        app.frame().unwrap();
        assert_eq!(app.world().player.lane, 0);

        app.input_mut().push(
            TickInput::default(),
            vec![
                InputEvent::KeyDown(Key::Down),
                InputEvent::KeyDown(Key::Down),
                InputEvent::KeyDown(Key::Down),
            ],
        );
        app.frame().unwrap();
        assert_eq!(app.world().player.lane, 2);
    }

    #[test]
    fn test_held_keys_move_player() {
        let mut app = app();
        app.world_mut().start_level(Level::One);
        let held = TickInput {
            right: true,
            ..Default::default()
        };
        app.input_mut().push(held, Vec::new());
        app.frame().unwrap();
        assert_eq!(app.world().player.x, 107);
    }

    #[test]
    fn test_right_click_ignored() {
        let mut app = app();
        app.input_mut().push(
            TickInput::default(),
            vec![InputEvent::MouseDown {
                button: MouseButton::Right,
                pos: ui::START_BUTTON.center(),
            }],
        );
        app.frame().unwrap();
        assert_eq!(app.world().state, GameState::Menu);
    }

    #[test]
    fn test_one_transition_per_frame_of_clicks() {
        let mut app = app();
        app.world_mut().state = GameState::Win;
        // Win takes any click; the second one lands where Start would be
        let click = InputEvent::MouseDown {
            button: MouseButton::Left,
            pos: ui::START_BUTTON.center(),
        };
        app.input_mut().push(TickInput::default(), vec![click, click]);
        app.frame().unwrap();
        assert_eq!(app.world().state, GameState::Menu);

        app.input_mut().push(TickInput::default(), vec![click]);
        app.frame().unwrap();
        assert_eq!(app.world().state, GameState::Instructions);
    }

    #[test]
    fn test_back_from_level() {
        let mut app = app();
        app.world_mut().start_level(Level::One);
        app.input_mut().click(ui::LEVEL_BACK_BUTTON.center());
        app.frame().unwrap();
        assert_eq!(app.world().state, GameState::LevelSelect);
    }
}
