//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; the world scalars
//! shared by the classifier and the trajectory steppers live in
//! [`SimulationState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::generate_obstacles;
use super::trajectory::{FallArc, JumpArc};
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start key
    PreGame,
    /// Player alive (or finishing a fatal animation)
    Playing,
    /// Run ended; only exit leaves this state
    GameOver,
}

/// Axis-aligned box. `pos` is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Strict overlap test: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x() < other.right()
            && other.x() < self.right()
            && self.y() < other.bottom()
            && other.y() < self.bottom()
    }
}

/// Obstacle kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Raised block standing on the floor; its top becomes the floor when stood on
    Platform,
    /// Gap in the floor; crossing it without reaching the far edge means falling
    Pit,
    /// Tall block hanging from the top of the screen; any contact is fatal
    Wall,
}

/// A single obstacle. Only `rect.pos.x` changes after generation (scrolling).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, rect: Rect) -> Self {
        Self { kind, rect }
    }

    /// A pit of the given width starting at `x`
    pub fn pit(x: f32, width: f32) -> Self {
        Self::new(ObstacleKind::Pit, Rect::new(x, FLOOR_Y, width, FLOOR_HEIGHT))
    }

    /// A platform whose top sits `height` above the floor
    pub fn platform(x: f32, width: f32, height: f32) -> Self {
        Self::new(
            ObstacleKind::Platform,
            Rect::new(x, FLOOR_Y - height, width, height),
        )
    }

    /// A wall hanging from the top of the screen
    pub fn wall(x: f32, width: f32, height: f32) -> Self {
        Self::new(ObstacleKind::Wall, Rect::new(x, 0.0, width, height))
    }

    #[inline]
    pub fn is_pit(&self) -> bool {
        self.kind == ObstacleKind::Pit
    }
}

/// The static floor band drawn under everything
pub fn floor_rect() -> Rect {
    Rect::new(0.0, FLOOR_Y, WORLD_WIDTH, FLOOR_HEIGHT)
}

/// World scalars shared by the classifier, trajectory steppers and scroll controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Current effective floor height (top edge the player rests on)
    pub floor_y: f32,
    /// Cleared once by a fatal contact, pit fall or bounds violation
    pub is_alive: bool,
    pub player_speed: f32,
    pub jump_speed: f32,
    /// Player is currently over (inside) a pit
    pub hole_collision: bool,
    /// Fall progress carried into the next fall arc
    pub fall_width_x: f32,
    /// Obstacles whose left edge is behind the player
    pub obstacles_passed: u32,
    /// Derived difficulty level (obstacles_passed / 5)
    pub level: u32,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            floor_y: FLOOR_Y,
            is_alive: true,
            player_speed: BASE_PLAYER_SPEED,
            jump_speed: BASE_JUMP_SPEED,
            hole_collision: false,
            fall_width_x: 0.0,
            obstacles_passed: 0,
            level: 0,
        }
    }
}

impl SimulationState {
    /// Recompute speeds and level from the number of obstacles passed
    pub fn apply_difficulty(&mut self, obstacles_passed: u32) {
        let step = obstacles_passed / OBSTACLES_PER_LEVEL;
        self.obstacles_passed = obstacles_passed;
        self.player_speed = BASE_PLAYER_SPEED + step as f32;
        self.jump_speed = BASE_JUMP_SPEED + step as f32;
        self.level = step;
    }

    /// y coordinate the player's top edge has when resting on the current floor
    #[inline]
    pub fn rest_y(&self, player_height: f32) -> f32 {
        self.floor_y - player_height
    }
}

/// What the player's body is doing this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// Resting on the floor; accepts MoveRight
    Grounded,
    /// Ascending along the jump arc
    Jumping(JumpArc),
    /// Descending along the fall arc
    Falling(FallArc),
    /// Fatal contact: eased down onto `target_y`, then held before GameOver
    Sinking {
        target_y: f32,
        step: f32,
        hold_ticks: u32,
    },
}

impl Motion {
    pub fn is_airborne(&self) -> bool {
        matches!(self, Motion::Jumping(_) | Motion::Falling(_))
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Rect,
    /// Left-to-right at generation time, fixed length
    pub obstacles: Vec<Obstacle>,
    pub sim: SimulationState,
    pub motion: Motion,
    /// Frames to hold the crash pose before GameOver
    pub crash_hold_ticks: u32,
    /// Frames simulated since the run started
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game with a field generated from `seed`
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = generate_obstacles(&mut rng);
        Self::with_obstacles(seed, obstacles)
    }

    /// Create a new game over a prepared obstacle field
    pub fn with_obstacles(seed: u64, obstacles: Vec<Obstacle>) -> Self {
        Self {
            seed,
            phase: GamePhase::PreGame,
            player: Self::spawn_rect(),
            obstacles,
            sim: SimulationState::default(),
            motion: Motion::Grounded,
            crash_hold_ticks: (CRASH_HOLD_MS / FRAME_DELAY_MS) as u32,
            time_ticks: 0,
        }
    }

    /// Player box at the start of a run: horizontally centred, resting on the floor
    pub fn spawn_rect() -> Rect {
        Rect::new(
            (WORLD_WIDTH - PLAYER_WIDTH) / 2.0,
            FLOOR_Y - PLAYER_HEIGHT,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        )
    }

    pub fn is_alive(&self) -> bool {
        self.sim.is_alive
    }

    /// Negative coordinates end the run
    pub fn check_bounds(&mut self) {
        if self.player.x() < 0.0 || self.player.y() < 0.0 {
            if self.sim.is_alive {
                log::info!(
                    "Player left the screen at ({:.1}, {:.1})",
                    self.player.x(),
                    self.player.y()
                );
            }
            self.sim.is_alive = false;
        }
    }
}
