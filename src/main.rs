//! Mission Earth - Terminal entry point
//!
//! Logs go to stderr (the game owns stdout): `RUST_LOG=debug mission-earth 2> mission-earth.log`

use anyhow::{Context, Result};

use mission_earth::assets::SpriteBank;
use mission_earth::consts::TITLE;
use mission_earth::platform::{FileAssets, TerminalInput, TerminalRenderer, TerminalSession};
use mission_earth::sim::GameWorld;
use mission_earth::{App, Settings};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("{} starting...", TITLE);

    let settings = Settings::load();
    let seed = settings.resolve_seed();
    log::info!("Seed: {}", seed);

    let mut assets = FileAssets::new();
    let sprites = SpriteBank::load(&mut assets, &settings.asset_root);
    log::info!("{} images loaded from {}", assets.loaded(), settings.asset_root.display());
    let world = GameWorld::new(seed, sprites.catalog());

    let session = TerminalSession::begin().context("failed to set up the terminal")?;
    let grid = session.grid()?;
    let renderer = TerminalRenderer::stdout(grid);
    let input = TerminalInput::new(settings.held_key_window(), grid);

    let mut app = App::new(world, sprites, renderer, input);
    let result = app.run(settings.frame_duration());

    // Restore the terminal before reporting anything
    session.end()?;
    result?;

    log::info!("{} exited after {} frames", TITLE, app.frames());
    Ok(())
}
