//! Jump and fall arcs
//!
//! Both arcs are downward-opening parabolas in horizontal progress `x` with
//! steepness `JUMP_DILATION`. A jump starts at `x = -HALF_JUMP_WIDTH` and peaks
//! at `x = 0`; the fall continues from the apex (or from a carried progress
//! when dropping into a pit).
//!
//! The steppers advance one sub-frame and report what happened; pacing and
//! drawing belong to the frame loop.

use serde::{Deserialize, Serialize};

use super::collision::resolve_contacts;
use super::scroll::{ScrollMode, screen_scroll};
use super::state::{GameState, Motion};
use crate::consts::*;

/// Height above the launch point at jump progress `x`
#[inline]
pub fn jump_height(x: f32) -> f32 {
    JUMP_DILATION * (HALF_JUMP_WIDTH * HALF_JUMP_WIDTH - x * x)
}

/// Distance dropped below the fall origin at progress `x`.
///
/// With `resume_from` the drop is measured relative to that earlier progress,
/// so the arc continues without a vertical jump.
#[inline]
pub fn fall_drop(x: f32, resume_from: Option<f32>) -> f32 {
    let base = resume_from.map_or(0.0, |r| JUMP_DILATION * r * r);
    JUMP_DILATION * x * x - base
}

/// Ascending half of a jump
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpArc {
    pub progress: f32,
    /// Player y at launch
    pub origin_y: f32,
}

impl JumpArc {
    pub fn new(origin_y: f32) -> Self {
        Self {
            progress: -HALF_JUMP_WIDTH,
            origin_y,
        }
    }

    /// Apex reached
    pub fn is_complete(&self) -> bool {
        self.progress >= 0.0
    }

    /// Player y at the current progress
    pub fn y(&self) -> f32 {
        self.origin_y - jump_height(self.progress)
    }
}

/// Descending arc, runs until the player reaches the floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallArc {
    pub progress: f32,
    /// Player y when the fall began
    pub origin_y: f32,
}

impl FallArc {
    pub fn new(progress: f32, origin_y: f32) -> Self {
        Self { progress, origin_y }
    }
}

/// Result of one airborne sub-step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// Still in the air
    Airborne,
    /// Reached the floor and is grounded again
    Landed,
    /// Run ended during this step
    Died,
    /// Jump pressed; the caller restarts the jump arc from here
    ReJump,
}

/// Start a fresh jump from the player's current height
pub fn begin_jump(state: &mut GameState) {
    log::debug!("Jump from y={:.1}", state.player.y());
    state.motion = Motion::Jumping(JumpArc::new(state.player.y()));
}

/// Enter the fall arc if the player is above the floor, otherwise land.
///
/// Progress starts at zero, or at the carried `fall_width_x` while over a pit.
pub fn begin_fall(state: &mut GameState) -> StepOutcome {
    let progress = if state.sim.hole_collision {
        state.sim.fall_width_x
    } else {
        0.0
    };

    if state.player.y() < state.sim.rest_y(state.player.height()) {
        state.motion = Motion::Falling(FallArc::new(progress, state.player.y()));
        StepOutcome::Airborne
    } else {
        land(state, progress)
    }
}

/// Finish a fall: snap onto the floor, or die if the floor is the pit bottom
fn land(state: &mut GameState, progress: f32) -> StepOutcome {
    let rest_y = state.sim.rest_y(state.player.height());
    state.motion = Motion::Grounded;
    state.sim.fall_width_x = progress;

    if state.sim.hole_collision && state.player.y() >= rest_y {
        log::info!("Fell into a pit at x={:.1}", state.player.x());
        state.sim.is_alive = false;
        StepOutcome::Died
    } else {
        state.player.pos.y = rest_y;
        StepOutcome::Landed
    }
}

/// Advance whichever arc is active by one sub-frame.
///
/// `jump_pressed` reports a jump key seen during this frame; unless the step
/// was fatal it turns the outcome into [`StepOutcome::ReJump`].
pub fn step_airborne(state: &mut GameState, jump_pressed: bool) -> StepOutcome {
    let outcome = match state.motion {
        Motion::Jumping(arc) => step_jump(state, arc),
        Motion::Falling(arc) => step_fall(state, arc),
        _ => return StepOutcome::Landed,
    };

    if jump_pressed && outcome != StepOutcome::Died && state.sim.is_alive {
        if let Motion::Falling(arc) = state.motion {
            state.sim.fall_width_x = arc.progress;
        }
        return StepOutcome::ReJump;
    }
    outcome
}

fn step_jump(state: &mut GameState, mut arc: JumpArc) -> StepOutcome {
    let speed = state.sim.jump_speed;
    arc.progress += speed;

    resolve_contacts(state);
    state.check_bounds();
    if !state.sim.is_alive {
        return StepOutcome::Died;
    }

    state.player.pos.x += speed;
    state.player.pos.y = arc.y();
    screen_scroll(state, ScrollMode::Airborne);

    if !arc.is_complete() {
        state.motion = Motion::Jumping(arc);
        return StepOutcome::Airborne;
    }

    resolve_contacts(state);
    if !state.sim.is_alive {
        return StepOutcome::Died;
    }
    begin_fall(state)
}

fn step_fall(state: &mut GameState, mut arc: FallArc) -> StepOutcome {
    if !state.sim.is_alive {
        return StepOutcome::Died;
    }
    if state.player.y() >= state.sim.rest_y(state.player.height()) {
        return land(state, arc.progress);
    }

    let speed = state.sim.jump_speed;
    arc.progress += speed;
    let resume_from = state.sim.hole_collision.then_some(state.sim.fall_width_x);
    let drop = fall_drop(arc.progress, resume_from);

    resolve_contacts(state);
    if !state.sim.is_alive {
        return StepOutcome::Died;
    }

    state.player.pos.x += speed;
    state.player.pos.y = arc.origin_y + drop;
    screen_scroll(state, ScrollMode::Airborne);

    state.motion = Motion::Falling(arc);
    StepOutcome::Airborne
}
