//! Rendering module
//!
//! The simulation hands a [`Frame`] to a [`Renderer`] once per frame; the
//! renderer redraws everything from scratch and keeps nothing between frames.

pub mod canvas;
pub mod terminal;

pub use canvas::{Canvas, Label, Shade};
pub use terminal::TerminalRenderer;

use std::io;

use crate::sim::{GamePhase, GameState, Obstacle, Rect, floor_rect};

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub phase: GamePhase,
    pub floor: Rect,
    pub player: &'a Rect,
    pub obstacles: &'a [Obstacle],
    pub level: u32,
}

impl<'a> Frame<'a> {
    pub fn from_state(state: &'a GameState) -> Self {
        Self {
            phase: state.phase,
            floor: floor_rect(),
            player: &state.player,
            obstacles: &state.obstacles,
            level: state.sim.level,
        }
    }
}

/// Draws and presents a complete frame
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}
