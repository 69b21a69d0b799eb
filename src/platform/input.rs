//! Keyboard input
//!
//! Polling never blocks; each frame drains everything queued since the
//! previous one, in arrival order.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::{InputEvent, Key};

/// Non-blocking source of input events
pub trait InputSource {
    /// Next pending event, or `None` when the queue is empty
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>>;
}

/// Drain every pending event
pub fn drain_events<I: InputSource + ?Sized>(source: &mut I) -> io::Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    while let Some(event) = source.poll_event()? {
        events.push(event);
    }
    Ok(events)
}

/// Translate a terminal key press into a game event
pub fn map_key(key: &KeyEvent) -> InputEvent {
    if key.kind == KeyEventKind::Release {
        return InputEvent::Other;
    }
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') => InputEvent::KeyDown(Key::Start),
        KeyCode::Char(' ') => InputEvent::KeyDown(Key::Jump),
        KeyCode::Right => InputEvent::KeyDown(Key::MoveRight),
        KeyCode::Esc => InputEvent::KeyDown(Key::Exit),
        // Raw mode swallows SIGINT
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputEvent::KeyDown(Key::Exit)
        }
        _ => InputEvent::Other,
    }
}

/// Keyboard of the controlling terminal (requires raw mode)
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        let mapped = match event::read()? {
            Event::Key(key) => map_key(&key),
            _ => InputEvent::Other,
        };
        Ok(Some(mapped))
    }
}
