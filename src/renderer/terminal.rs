//! Terminal renderer
//!
//! Paints the canvas with background-coloured spaces, one terminal cell per
//! grid cell, inside a synchronized update so frames never tear.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, EndSynchronizedUpdate, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use super::{Canvas, Frame, Renderer, Shade};
use crate::settings::Palette;

/// Concrete colours for each shade
#[derive(Debug, Clone, Copy)]
struct Theme {
    background: Color,
    floor: Color,
    player: Color,
    text: Color,
}

impl Theme {
    fn for_palette(palette: Palette) -> Self {
        match palette {
            Palette::Classic => Self {
                background: Color::Rgb { r: 0, g: 0, b: 0 },
                floor: Color::Rgb { r: 0, g: 0, b: 255 },
                player: Color::Rgb { r: 0, g: 255, b: 0 },
                text: Color::Rgb { r: 0, g: 255, b: 0 },
            },
            Palette::Mono => Self {
                background: Color::Black,
                floor: Color::Grey,
                player: Color::White,
                text: Color::White,
            },
        }
    }

    fn color(&self, shade: Shade) -> Color {
        match shade {
            Shade::Background => self.background,
            Shade::Floor => self.floor,
            Shade::Player => self.player,
        }
    }
}

/// Full-screen renderer on the alternate screen. Restores the terminal on drop.
pub struct TerminalRenderer {
    out: Stdout,
    theme: Theme,
}

impl TerminalRenderer {
    /// Enter raw mode and the alternate screen
    pub fn new(palette: Palette) -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        log::debug!("Terminal renderer ready ({})", palette.as_str());
        Ok(Self {
            out,
            theme: Theme::for_palette(palette),
        })
    }

    fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;

        for row in 0..canvas.rows {
            queue!(self.out, cursor::MoveTo(0, row))?;
            let mut current = None;
            for &shade in canvas.row(row) {
                if current != Some(shade) {
                    queue!(self.out, SetBackgroundColor(self.theme.color(shade)))?;
                    current = Some(shade);
                }
                queue!(self.out, Print(' '))?;
            }
        }

        queue!(
            self.out,
            SetForegroundColor(self.theme.text),
            SetBackgroundColor(self.theme.background)
        )?;
        for label in &canvas.labels {
            queue!(
                self.out,
                cursor::MoveTo(label.col, label.row),
                Print(&label.text)
            )?;
        }

        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let canvas = Canvas::paint(frame, cols, rows);
        self.present(&canvas)
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
