//! Square Jump entry point
//!
//! Sets up logging, settings and the terminal, then runs the frame loop.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use square_jump::platform::TerminalInput;
use square_jump::renderer::TerminalRenderer;
use square_jump::sim::GameState;
use square_jump::{GameLoop, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Square Jump starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Field seed: {}", seed);

    let renderer = match TerminalRenderer::new(settings.palette) {
        Ok(renderer) => renderer,
        Err(e) => {
            log::error!("Terminal setup failed: {}", e);
            eprintln!("square-jump: cannot initialise terminal: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut game = GameLoop::new(GameState::new(seed), renderer, TerminalInput, &settings);
    let result = game.run();
    // Restore the terminal before reporting anything
    drop(game);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal I/O failed: {}", e);
            eprintln!("square-jump: {e}");
            ExitCode::FAILURE
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
