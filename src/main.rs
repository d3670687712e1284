//! Tile Platformer entry point
//!
//! Runs the simulation headless: a seeded autopilot plays the classic level
//! and frames are printed as ASCII once per second of game time.

use std::process::ExitCode;

use tile_platformer::platform::{Autopilot, KeyBindings, ThreadSleeper};
use tile_platformer::renderer::TextSink;
use tile_platformer::{Game, Settings, SetupError};

/// Print one ASCII frame per this many ticks
const TEXT_FRAME_INTERVAL: u64 = 60;

fn setup() -> Result<(Settings, Game), SetupError> {
    let settings = Settings::load()?;
    let game = Game::new(&settings)?;
    Ok((settings, game))
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Tile Platformer (headless) starting...");

    let (settings, mut game) = match setup() {
        Ok(ready) => ready,
        Err(e) => {
            log::error!("Setup failed: {e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "{}: {}x{}, autopilot for {} ticks",
        settings.window_title,
        settings.window_width,
        settings.window_height,
        settings.demo_ticks
    );

    let mut input = Autopilot::new(
        settings.autopilot_seed,
        settings.demo_ticks,
        KeyBindings::classic(),
    );
    let mut sink = TextSink::new(
        std::io::stdout().lock(),
        settings.window_width,
        settings.window_height,
        (settings.block_size / 2).max(1),
        TEXT_FRAME_INTERVAL,
    );

    match game.run(&mut input, &mut sink, &mut ThreadSleeper) {
        Ok(summary) => {
            log::info!(
                "Done: {} ticks, {} jumps, {} respawns",
                summary.ticks,
                summary.jumps,
                summary.respawns
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Render failed: {e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
