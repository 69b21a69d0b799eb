//! Camera scrolling
//!
//! The camera keeps the player near the horizontal midpoint by sliding the
//! obstacle field left. Past the midpoint the player is pulled back by the
//! same amount, so forward motion shows up as the world streaming past.

use serde::{Deserialize, Serialize};

use super::state::{GameState, Obstacle};
use crate::consts::SCREEN_MID_X;

/// Which scroll policy applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollMode {
    /// During a jump or fall sub-step (uses `jump_speed`)
    Airborne,
    /// After a MoveRight step on the ground (uses `player_speed`)
    Grounded,
    /// Idle drift every frame (half `player_speed`, always pulls the player back)
    Auto,
}

/// Shift every obstacle `amount` to the left
pub fn shift_obstacles(obstacles: &mut [Obstacle], amount: f32) {
    for obstacle in obstacles {
        obstacle.rect.pos.x -= amount;
    }
}

/// Apply the scroll policy for `mode`; returns the obstacle shift applied
pub fn screen_scroll(state: &mut GameState, mode: ScrollMode) -> f32 {
    let (amount, pull_player) = match mode {
        ScrollMode::Airborne => (state.sim.jump_speed, state.player.x() > SCREEN_MID_X),
        ScrollMode::Grounded => (state.sim.player_speed, state.player.x() > SCREEN_MID_X),
        ScrollMode::Auto => (state.sim.player_speed / 2.0, true),
    };

    if pull_player {
        state.player.pos.x -= amount;
    }
    shift_obstacles(&mut state.obstacles, amount);
    amount
}
