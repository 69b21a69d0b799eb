//! Square Jump - a side-scrolling obstacle jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (trajectories, collisions, scrolling, game state)
//! - `game`: Paced frame loop tying the simulation to a renderer and an input source
//! - `renderer`: Frame view and the terminal renderer
//! - `platform`: Keyboard input
//! - `settings`: Runtime configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::GameLoop;
pub use settings::{Palette, Settings};

/// Game configuration constants
pub mod consts {
    /// World dimensions (the playfield is a 900x600 window)
    pub const WORLD_HEIGHT: f32 = 600.0;
    pub const WORLD_WIDTH: f32 = WORLD_HEIGHT * 1.5;
    /// Horizontal screen midpoint the camera anchors the player to
    pub const SCREEN_MID_X: f32 = WORLD_WIDTH / 2.0;

    /// Floor band occupies the bottom 30% of the screen
    pub const FLOOR_HEIGHT: f32 = WORLD_HEIGHT * 0.3;
    pub const FLOOR_Y: f32 = WORLD_HEIGHT - FLOOR_HEIGHT;

    /// Player box
    pub const PLAYER_WIDTH: f32 = WORLD_WIDTH / 15.0;
    pub const PLAYER_HEIGHT: f32 = WORLD_HEIGHT / 15.0;
    /// Horizontal step per MoveRight press before difficulty ramp
    pub const BASE_PLAYER_SPEED: f32 = 2.5;

    /// Parabola steepness shared by jump and fall arcs
    pub const JUMP_DILATION: f32 = 0.01;
    /// Horizontal distance from launch to apex
    pub const HALF_JUMP_WIDTH: f32 = PLAYER_HEIGHT * 3.0;
    /// Horizontal progress per airborne sub-step before difficulty ramp
    pub const BASE_JUMP_SPEED: f32 = 2.5;

    /// Obstacle field
    pub const NUM_OBSTACLES: usize = 50;
    pub const OBSTACLE_WIDTH: f32 = WORLD_WIDTH / 10.0;
    pub const XTEND_OBSTACLE_WIDTH: f32 = WORLD_WIDTH / 2.0;
    pub const OBSTACLE_HEIGHT: f32 = WORLD_HEIGHT / 8.0;
    pub const XTEND_OBSTACLE_HEIGHT: f32 = WORLD_HEIGHT / 3.0;
    pub const PIT_WIDTH: f32 = HALF_JUMP_WIDTH * 1.5;
    pub const XTEND_PIT_WIDTH: f32 = HALF_JUMP_WIDTH * 3.5;
    /// Walls are never shorter than half the screen
    pub const MIN_WALL_HEIGHT: f32 = WORLD_HEIGHT / 2.0;
    pub const OBSTACLE_SPACING: f32 = WORLD_WIDTH / 5.0;
    pub const XTEND_OBSTACLE_SPACING: f32 = WORLD_WIDTH / 2.0;
    /// First obstacle can start no earlier than this
    pub const FIELD_START_X: f32 = SCREEN_MID_X + OBSTACLE_SPACING;

    /// Floor height used once the player drops into a pit (below the visible screen)
    pub const PIT_FLOOR_Y: f32 = WORLD_HEIGHT + PLAYER_HEIGHT;

    /// Obstacles passed per level / speed increment
    pub const OBSTACLES_PER_LEVEL: u32 = 5;

    /// Default pacing
    pub const FRAME_DELAY_MS: u64 = 10;
    pub const CRASH_HOLD_MS: u64 = 500;
}

/// Display letter for a level (0 -> 'A')
#[inline]
pub fn level_letter(level: u32) -> char {
    char::from_u32('A' as u32 + level).unwrap_or('?')
}
