//! Collision classification between the player box and the obstacle field
//!
//! Every obstacle is tested against five mutually exclusive cases in priority
//! order; the first obstacle that matches anything other than [`Contact::Clear`]
//! decides the floor for this frame. Classification never moves the player,
//! so calling it repeatedly without movement yields the same world scalars.

use serde::{Deserialize, Serialize};

use super::state::{GameState, Motion, Obstacle, Rect, SimulationState};
use crate::consts::*;

/// Relationship between the player and an obstacle (or the whole field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    /// Resting on (or hovering over) a platform top
    Standing { index: usize },
    /// Solid overlap with a platform or wall
    Crash { index: usize },
    /// Bottom edge at pit level while fully inside the pit span
    PitFall { index: usize },
    /// Sunk into a pit and reached its far edge
    PitWall { index: usize },
    /// Nothing under or against the player
    Clear,
}

impl Contact {
    /// Whether this contact ends the run
    pub fn is_fatal(&self) -> bool {
        matches!(self, Contact::Crash { .. } | Contact::PitWall { .. })
    }
}

/// Classify the player against a single obstacle
pub fn contact_with(player: &Rect, obstacle: &Obstacle, index: usize) -> Contact {
    let rect = &obstacle.rect;
    let pit = obstacle.is_pit();

    let above_top = player.y() <= rect.y() - player.height();
    let overlaps_x = player.x() > rect.x() - player.width() && player.x() < rect.right();
    if above_top && overlaps_x && !pit {
        return Contact::Standing { index };
    }

    let intersects = player.intersects(rect);
    if intersects && !pit {
        return Contact::Crash { index };
    }

    let at_pit_level = player.y() >= rect.y() - player.height();
    let inside_span = player.x() > rect.x() && player.right() < rect.right();
    if pit && at_pit_level && inside_span {
        return Contact::PitFall { index };
    }

    // Far wall of a pit the player has already sunk into
    if pit && at_pit_level && intersects && player.right() >= rect.right() {
        return Contact::PitWall { index };
    }

    Contact::Clear
}

/// Scan the field, update the floor / pit / alive scalars and the difficulty ramp.
///
/// No-op once the player is dead.
pub fn classify(player: &Rect, obstacles: &[Obstacle], sim: &mut SimulationState) -> Contact {
    if !sim.is_alive {
        return Contact::Clear;
    }

    let mut contact = Contact::Clear;
    for (index, obstacle) in obstacles.iter().enumerate() {
        match contact_with(player, obstacle, index) {
            Contact::Clear => {
                sim.hole_collision = false;
                sim.floor_y = FLOOR_Y;
            }
            found => {
                contact = found;
                break;
            }
        }
    }

    match contact {
        Contact::Standing { index } => {
            sim.hole_collision = false;
            sim.floor_y = obstacles[index].rect.y();
        }
        Contact::Crash { .. } => {
            sim.is_alive = false;
        }
        Contact::PitFall { .. } => {
            sim.hole_collision = true;
            sim.floor_y = PIT_FLOOR_Y;
        }
        Contact::PitWall { .. } => {
            sim.floor_y = PIT_FLOOR_Y;
            sim.is_alive = false;
        }
        Contact::Clear => {}
    }

    let passed = obstacles
        .iter()
        .filter(|o| o.rect.x() < player.x())
        .count() as u32;
    sim.apply_difficulty(passed);

    contact
}

/// Classify the current frame and start the crash animation on a fatal contact
pub fn resolve_contacts(state: &mut GameState) -> Contact {
    let contact = classify(&state.player, &state.obstacles, &mut state.sim);

    if contact.is_fatal() {
        let step = match contact {
            Contact::PitWall { .. } => state.sim.jump_speed,
            _ => state.sim.player_speed,
        };
        log::info!(
            "Fatal {:?} at x={:.1}, level {}",
            contact,
            state.player.x(),
            state.sim.level
        );
        state.motion = Motion::Sinking {
            target_y: state.sim.rest_y(state.player.height()),
            step,
            hold_ticks: state.crash_hold_ticks,
        };
    }

    contact
}
