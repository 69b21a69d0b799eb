//! Platform abstraction layer
//!
//! Keyboard input behind the [`InputSource`] trait so the frame loop can run
//! against a real terminal or a scripted source.

pub mod input;

pub use input::{InputSource, TerminalInput, drain_events, map_key};
