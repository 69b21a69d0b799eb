//! Obstacle field generation
//!
//! The field is built once per run from the seeded RNG and is the only source
//! of run-to-run variability.

use rand::Rng;

use super::state::{Obstacle, ObstacleKind};
use crate::consts::*;

/// Generate the full obstacle field, left to right.
///
/// Each obstacle starts at the previous right edge plus `OBSTACLE_SPACING`
/// plus a random extra gap, so neighbours never overlap.
pub fn generate_obstacles<R: Rng>(rng: &mut R) -> Vec<Obstacle> {
    let mut obstacles = Vec::with_capacity(NUM_OBSTACLES);
    let mut next_x = FIELD_START_X;

    for _ in 0..NUM_OBSTACLES {
        let kind = match rng.random_range(0..3u32) {
            0 => ObstacleKind::Pit,
            1 => ObstacleKind::Platform,
            _ => ObstacleKind::Wall,
        };
        let x = next_x + rng.random_range(0.0..XTEND_OBSTACLE_SPACING);
        let obstacle = spawn_obstacle(rng, kind, x);

        next_x = obstacle.rect.right() + OBSTACLE_SPACING;
        obstacles.push(obstacle);
    }

    log::debug!(
        "Generated field: {} pits, {} platforms, {} walls, ends at x={:.0}",
        count_kind(&obstacles, ObstacleKind::Pit),
        count_kind(&obstacles, ObstacleKind::Platform),
        count_kind(&obstacles, ObstacleKind::Wall),
        next_x - OBSTACLE_SPACING,
    );

    obstacles
}

/// Size a single obstacle of `kind` starting at `x`
fn spawn_obstacle<R: Rng>(rng: &mut R, kind: ObstacleKind, x: f32) -> Obstacle {
    match kind {
        ObstacleKind::Pit => {
            let width = PIT_WIDTH + rng.random_range(0.0..XTEND_PIT_WIDTH);
            Obstacle::pit(x, width)
        }
        ObstacleKind::Platform => {
            let width = OBSTACLE_WIDTH + rng.random_range(0.0..XTEND_OBSTACLE_WIDTH);
            let height = OBSTACLE_HEIGHT + rng.random_range(0.0..XTEND_OBSTACLE_HEIGHT);
            Obstacle::platform(x, width, height)
        }
        ObstacleKind::Wall => {
            let width = OBSTACLE_WIDTH + rng.random_range(0.0..XTEND_OBSTACLE_WIDTH);
            let height = OBSTACLE_HEIGHT + rng.random_range(0.0..XTEND_OBSTACLE_HEIGHT);
            Obstacle::wall(x, width, height.max(MIN_WALL_HEIGHT))
        }
    }
}

fn count_kind(obstacles: &[Obstacle], kind: ObstacleKind) -> usize {
    obstacles.iter().filter(|o| o.kind == kind).count()
}
