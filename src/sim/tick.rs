//! Per-frame simulation step
//!
//! One call advances the game by exactly one frame: input, movement or one
//! airborne sub-step, collision resolution, falling, scrolling and the phase
//! transition. Pacing and drawing are the caller's job.

use serde::{Deserialize, Serialize};

use super::collision::resolve_contacts;
use super::scroll::{ScrollMode, screen_scroll};
use super::state::{GamePhase, GameState, Motion};
use super::trajectory::{StepOutcome, begin_fall, begin_jump, step_airborne};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Start,
    Jump,
    MoveRight,
    Exit,
}

/// Input events, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    Other,
}

/// Whether the frame loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Exit,
}

/// Advance the game by one frame using the events drained since the last one
pub fn tick(state: &mut GameState, events: &[InputEvent]) -> TickOutcome {
    if events.contains(&InputEvent::KeyDown(Key::Exit)) {
        log::info!("Exit requested in {:?}", state.phase);
        return TickOutcome::Exit;
    }

    state.time_ticks += 1;

    match state.phase {
        GamePhase::PreGame => {
            if events.contains(&InputEvent::KeyDown(Key::Start)) {
                log::info!("Run started (seed {})", state.seed);
                state.phase = GamePhase::Playing;
            }
        }
        GamePhase::Playing => {
            play_frame(state, events);
            if !state.sim.is_alive && !matches!(state.motion, Motion::Sinking { .. }) {
                enter_game_over(state);
            }
        }
        GamePhase::GameOver => {}
    }

    TickOutcome::Continue
}

fn play_frame(state: &mut GameState, events: &[InputEvent]) {
    if let Motion::Sinking { .. } = state.motion {
        step_sinking(state);
        return;
    }

    let mut jump_pressed = false;
    for event in events {
        if !state.sim.is_alive {
            return;
        }
        match (event, state.motion) {
            (InputEvent::KeyDown(Key::Jump), Motion::Grounded) => begin_jump(state),
            (InputEvent::KeyDown(Key::Jump), _) => jump_pressed = true,
            (InputEvent::KeyDown(Key::MoveRight), Motion::Grounded) => move_right(state),
            // Airborne ignores MoveRight
            _ => {}
        }
    }

    if !state.sim.is_alive {
        return;
    }

    if state.motion.is_airborne() {
        if step_airborne(state, jump_pressed) == StepOutcome::ReJump {
            begin_jump(state);
        }
    } else if state.motion == Motion::Grounded {
        idle_frame(state);
    }
}

/// One MoveRight press while grounded
fn move_right(state: &mut GameState) {
    state.player.pos.x += state.sim.player_speed;

    resolve_contacts(state);
    if !state.sim.is_alive {
        return;
    }
    if begin_fall(state) == StepOutcome::Died {
        return;
    }
    screen_scroll(state, ScrollMode::Grounded);
    state.check_bounds();
}

/// Grounded frame with no movement key: gravity check and idle drift
fn idle_frame(state: &mut GameState) {
    state.check_bounds();
    resolve_contacts(state);
    if !state.sim.is_alive {
        return;
    }
    if begin_fall(state) == StepOutcome::Died {
        return;
    }
    screen_scroll(state, ScrollMode::Auto);
}

/// Ease the crashed player onto the floor, hold, then end the run
fn step_sinking(state: &mut GameState) {
    let Motion::Sinking {
        target_y,
        step,
        hold_ticks,
    } = state.motion
    else {
        return;
    };

    if state.player.y() < target_y {
        state.player.pos.y = (state.player.y() + step).min(target_y);
        return;
    }

    state.player.pos.y = target_y;
    if hold_ticks > 0 {
        state.motion = Motion::Sinking {
            target_y,
            step,
            hold_ticks: hold_ticks - 1,
        };
    } else {
        enter_game_over(state);
    }
}

fn enter_game_over(state: &mut GameState) {
    log::info!(
        "Game over after {} frames: level {}, {} obstacles passed",
        state.time_ticks,
        state.sim.level,
        state.sim.obstacles_passed
    );
    state.phase = GamePhase::GameOver;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::Obstacle;

    const START: InputEvent = InputEvent::KeyDown(Key::Start);
    const JUMP: InputEvent = InputEvent::KeyDown(Key::Jump);
    const RIGHT: InputEvent = InputEvent::KeyDown(Key::MoveRight);

    fn playing(obstacles: Vec<Obstacle>) -> GameState {
        let mut state = GameState::with_obstacles(3, obstacles);
        tick(&mut state, &[START]);
        state
    }

    #[test]
    fn test_pregame_waits_for_start() {
        let mut state = GameState::with_obstacles(3, Vec::new());
        tick(&mut state, &[RIGHT, InputEvent::Other]);
        assert_eq!(state.phase, GamePhase::PreGame);
        assert_eq!(state.player, GameState::spawn_rect());

        tick(&mut state, &[START]);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_exit_from_any_phase() {
        let exit = [InputEvent::KeyDown(Key::Exit)];
        let mut state = GameState::with_obstacles(3, Vec::new());
        assert_eq!(tick(&mut state, &exit), TickOutcome::Exit);

        state.phase = GamePhase::GameOver;
        assert_eq!(tick(&mut state, &exit), TickOutcome::Exit);
    }

    #[test]
    fn test_idle_on_open_floor_stays_alive() {
        let mut state = playing(vec![Obstacle::wall(5000.0, 100.0, 300.0)]);
        for _ in 0..20 {
            tick(&mut state, &[]);
        }
        assert!(state.is_alive());
        assert_eq!(state.sim.floor_y, FLOOR_Y);
        assert_eq!(state.motion, Motion::Grounded);
        assert_eq!(state.player.bottom(), FLOOR_Y);
    }

    #[test]
    fn test_idle_drift_eventually_leaves_screen() {
        let mut state = playing(Vec::new());
        for _ in 0..2000 {
            tick(&mut state, &[]);
            if state.phase == GamePhase::GameOver {
                break;
            }
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.is_alive());
    }

    #[test]
    fn test_move_right_into_platform_crashes_then_game_over() {
        let spawn = GameState::spawn_rect();
        let mut state = playing(vec![Obstacle::platform(spawn.right() + 1.0, 100.0, 100.0)]);

        tick(&mut state, &[RIGHT]);
        assert!(!state.is_alive());
        assert!(matches!(state.motion, Motion::Sinking { .. }));
        assert_eq!(state.phase, GamePhase::Playing);

        // Already on the floor, so only the hold remains
        let hold = state.crash_hold_ticks as usize;
        for _ in 0..hold {
            tick(&mut state, &[]);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        tick(&mut state, &[]);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Terminal: further input changes nothing
        let frozen = state.player;
        tick(&mut state, &[RIGHT, JUMP, START]);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.player, frozen);
    }

    #[test]
    fn test_move_right_at_pit_bottom_ends_without_scrolling() {
        let mut state = playing(vec![Obstacle::pit(200.0, 500.0)]);
        // Resting on the pit floor, right of centre
        state.player.pos = glam::Vec2::new(SCREEN_MID_X + 10.0, PIT_FLOOR_Y - PLAYER_HEIGHT);
        let start_x = state.player.x();

        tick(&mut state, &[RIGHT]);
        assert!(!state.is_alive());
        assert!(state.sim.hole_collision);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.player.x(), start_x + state.sim.player_speed);
        assert_eq!(state.obstacles[0].rect.x(), 200.0);
    }

    #[test]
    fn test_move_right_ignored_while_airborne() {
        let mut state = playing(Vec::new());
        tick(&mut state, &[JUMP]);
        assert!(matches!(state.motion, Motion::Jumping(_)));

        let mut with_right = state.clone();
        tick(&mut state, &[]);
        tick(&mut with_right, &[RIGHT]);
        assert_eq!(state.player, with_right.player);
    }

    #[test]
    fn test_jump_mid_air_restarts_arc() {
        let mut state = playing(Vec::new());
        tick(&mut state, &[JUMP]);
        for _ in 0..20 {
            tick(&mut state, &[]);
        }
        tick(&mut state, &[JUMP]);
        match state.motion {
            Motion::Jumping(arc) => {
                assert_eq!(arc.progress, -HALF_JUMP_WIDTH);
                assert_eq!(arc.origin_y, state.player.y());
            }
            other => panic!("expected a fresh jump, got {other:?}"),
        }
    }

    #[test]
    fn test_jump_during_fall_keeps_fall_progress() {
        let mut state = playing(Vec::new());
        tick(&mut state, &[JUMP]);
        for _ in 0..200 {
            tick(&mut state, &[]);
            if matches!(state.motion, Motion::Falling(_)) {
                break;
            }
        }
        // One more step so the fall is under way
        tick(&mut state, &[]);
        let Motion::Falling(fall) = state.motion else {
            panic!("expected a fall, got {:?}", state.motion);
        };
        let speed = state.sim.jump_speed;

        tick(&mut state, &[JUMP]);
        match state.motion {
            Motion::Jumping(arc) => {
                assert_eq!(arc.progress, -HALF_JUMP_WIDTH);
                assert_eq!(arc.origin_y, state.player.y());
            }
            other => panic!("expected a fresh jump, got {other:?}"),
        }
        assert_eq!(state.sim.fall_width_x, fall.progress + speed);
        assert!(state.is_alive());
    }

    #[test]
    fn test_sunk_into_pit_far_edge_sinks_then_game_over() {
        let mut state = playing(vec![Obstacle::pit(200.0, 250.0)]);
        // Below the pit top with the right edge past the pit's far side
        state.player.pos.y = FLOOR_Y + 10.0;
        let start_y = state.player.y();

        tick(&mut state, &[]);
        assert!(!state.is_alive());
        let Motion::Sinking {
            target_y,
            step,
            hold_ticks,
        } = state.motion
        else {
            panic!("expected sinking, got {:?}", state.motion);
        };
        assert_eq!(target_y, PIT_FLOOR_Y - PLAYER_HEIGHT);
        assert_eq!(step, state.sim.jump_speed);
        assert_eq!(hold_ticks, state.crash_hold_ticks);

        let sink_ticks = ((target_y - start_y) / step).ceil() as usize;
        let expected = sink_ticks + hold_ticks as usize + 1;
        let mut ticks = 0;
        while state.phase == GamePhase::Playing {
            tick(&mut state, &[]);
            ticks += 1;
            assert!(ticks <= expected, "still playing after {ticks} ticks");
        }
        assert_eq!(ticks, expected);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.player.y(), target_y);
    }

    #[test]
    fn test_jump_lands_back_on_floor() {
        let mut state = playing(Vec::new());
        tick(&mut state, &[JUMP]);
        for _ in 0..200 {
            tick(&mut state, &[]);
            if state.motion == Motion::Grounded {
                break;
            }
        }
        assert_eq!(state.motion, Motion::Grounded);
        assert_eq!(state.player.bottom(), FLOOR_Y);
        assert!(state.is_alive());
    }
}
