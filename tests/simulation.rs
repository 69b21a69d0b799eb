use std::collections::VecDeque;
use std::io;

use square_jump::consts::*;
use square_jump::platform::InputSource;
use square_jump::renderer::{Frame, Renderer};
use square_jump::sim::*;
use square_jump::{GameLoop, Settings};

const START: InputEvent = InputEvent::KeyDown(Key::Start);
const RIGHT: InputEvent = InputEvent::KeyDown(Key::MoveRight);
const EXIT: InputEvent = InputEvent::KeyDown(Key::Exit);

/// Feeds one batch of events per frame
struct ScriptedInput {
    frames: VecDeque<VecDeque<InputEvent>>,
}

impl ScriptedInput {
    fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().map(VecDeque::from).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>> {
        let Some(batch) = self.frames.front_mut() else {
            return Ok(None);
        };
        match batch.pop_front() {
            Some(event) => Ok(Some(event)),
            None => {
                self.frames.pop_front();
                Ok(None)
            }
        }
    }
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<(GamePhase, u32, Rect)>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        self.frames.push((frame.phase, frame.level, *frame.player));
        Ok(())
    }
}

fn headless_settings() -> Settings {
    Settings {
        frame_delay_ms: 0,
        ..Settings::default()
    }
}

#[test]
fn test_resting_player_on_generated_field_stays_alive() {
    for seed in [1, 2, 3, 42, 1337] {
        let mut state = GameState::new(seed);
        let contact = classify(&state.player, &state.obstacles, &mut state.sim);
        assert_eq!(contact, Contact::Clear);
        assert!(state.sim.is_alive);
        assert_eq!(state.sim.floor_y, FLOOR_Y);
    }
}

#[test]
fn test_advancing_into_wall_is_fatal_in_one_check() {
    let mut state = GameState::new(5);
    let wall = Obstacle::wall(600.0, 150.0, MIN_WALL_HEIGHT);
    state.obstacles = vec![wall];
    state.player.pos = glam::Vec2::new(
        wall.rect.x() - PLAYER_WIDTH - 10.0,
        wall.rect.bottom() - 20.0,
    );

    classify(&state.player, &state.obstacles, &mut state.sim);
    assert!(state.sim.is_alive);

    state.player.pos.x += 20.0;
    let contact = classify(&state.player, &state.obstacles, &mut state.sim);
    assert_eq!(contact, Contact::Crash { index: 0 });
    assert!(!state.sim.is_alive);
}

#[test]
fn test_level_after_passing_25_obstacles() {
    let mut state = GameState::new(2024);
    let shift = state.obstacles[24].rect.x() - state.player.x() + 1.0;
    shift_obstacles(&mut state.obstacles, shift);

    classify(&state.player, &state.obstacles, &mut state.sim);
    assert_eq!(state.sim.obstacles_passed, 25);
    assert_eq!(state.sim.level, 5);
    assert_eq!(state.sim.player_speed, BASE_PLAYER_SPEED + 5.0);
    assert_eq!(state.sim.jump_speed, BASE_JUMP_SPEED + 5.0);
}

#[test]
fn test_exit_from_title_screen() {
    let input = ScriptedInput::new(vec![vec![RIGHT, InputEvent::Other], vec![EXIT]]);
    let mut game = GameLoop::new(
        GameState::new(9),
        RecordingRenderer::default(),
        input,
        &headless_settings(),
    );
    game.run().unwrap();

    let (state, renderer, _) = game.into_parts();
    assert_eq!(state.phase, GamePhase::PreGame);
    assert_eq!(renderer.frames.len(), 1);
    assert_eq!(renderer.frames[0].0, GamePhase::PreGame);
}

#[test]
fn test_walking_into_pit_ends_run() {
    let state = GameState::with_obstacles(11, vec![Obstacle::pit(430.0, 300.0)]);
    let mut script = vec![vec![START]];
    script.extend(std::iter::repeat_n(vec![RIGHT], 5));
    script.extend(std::iter::repeat_n(Vec::new(), 100));
    script.push(vec![EXIT]);

    let mut game = GameLoop::new(
        state,
        RecordingRenderer::default(),
        ScriptedInput::new(script),
        &headless_settings(),
    );
    game.run().unwrap();

    let (state, renderer, _) = game.into_parts();
    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(!state.sim.is_alive);
    assert!(state.sim.hole_collision);
    assert!(state.player.y() >= WORLD_HEIGHT);

    let phases: Vec<GamePhase> = renderer.frames.iter().map(|f| f.0).collect();
    assert_eq!(phases.first(), Some(&GamePhase::Playing));
    assert_eq!(phases.last(), Some(&GamePhase::GameOver));
}

#[test]
fn test_loop_applies_crash_hold_from_settings() {
    let settings = Settings {
        frame_delay_ms: 0,
        crash_hold_ms: 40,
        ..Settings::default()
    };
    let game = GameLoop::new(
        GameState::new(1),
        RecordingRenderer::default(),
        ScriptedInput::new(Vec::new()),
        &settings,
    );
    assert_eq!(game.state.crash_hold_ticks, settings.crash_hold_ticks());
}
