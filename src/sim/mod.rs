//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One sub-step per call, no sleeping
//! - Seeded RNG only
//! - Stable obstacle order (left to right at generation time)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod scroll;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use collision::{Contact, classify, contact_with, resolve_contacts};
pub use field::generate_obstacles;
pub use scroll::{ScrollMode, screen_scroll, shift_obstacles};
pub use state::{
    GamePhase, GameState, Motion, Obstacle, ObstacleKind, Rect, SimulationState, floor_rect,
};
pub use tick::{InputEvent, Key, TickOutcome, tick};
pub use trajectory::{FallArc, JumpArc, StepOutcome, fall_drop, jump_height, step_airborne};
