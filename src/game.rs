//! Paced frame loop
//!
//! Each frame: drain input, advance the simulation one step, draw, sleep.
//! The sleep is the only place the game yields.

use std::io;
use std::thread;
use std::time::Duration;

use crate::platform::{InputSource, drain_events};
use crate::renderer::{Frame, Renderer};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, TickOutcome, tick};

pub struct GameLoop<R, I> {
    pub state: GameState,
    renderer: R,
    input: I,
    frame_delay: Duration,
}

impl<R: Renderer, I: InputSource> GameLoop<R, I> {
    pub fn new(state: GameState, renderer: R, input: I, settings: &Settings) -> Self {
        let mut state = state;
        state.crash_hold_ticks = settings.crash_hold_ticks();
        Self {
            state,
            renderer,
            input,
            frame_delay: Duration::from_millis(settings.frame_delay_ms),
        }
    }

    /// Run one frame; returns `false` once exit was requested
    pub fn frame(&mut self) -> io::Result<bool> {
        let events = drain_events(&mut self.input)?;
        let before = self.state.phase;

        if tick(&mut self.state, &events) == TickOutcome::Exit {
            return Ok(false);
        }
        if self.state.phase != before {
            log::debug!("Phase {:?} -> {:?}", before, self.state.phase);
        }

        self.renderer.draw(&Frame::from_state(&self.state))?;
        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
        Ok(true)
    }

    /// Run until exit is requested
    pub fn run(&mut self) -> io::Result<()> {
        log::info!("Entering frame loop (seed {})", self.state.seed);
        while self.frame()? {}
        if self.state.phase == GamePhase::GameOver {
            log::info!("Exited from game over at level {}", self.state.sim.level);
        }
        Ok(())
    }

    pub fn into_parts(self) -> (GameState, R, I) {
        (self.state, self.renderer, self.input)
    }
}
