//! Rasterizes a frame onto a coarse cell grid
//!
//! World coordinates (900x600) are scaled onto whatever grid the output
//! offers. The grid only records which shade each cell gets plus text labels;
//! colours are chosen by the concrete renderer.

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::level_letter;
use crate::sim::{GamePhase, ObstacleKind, Rect};

use super::Frame;

pub const TITLE: &str = "SQUARE JUMP";
pub const INSTRUCTIONS: [&str; 3] = [
    "S TO START",
    "SPACE TO JUMP FORWARD",
    "RIGHT ARROW KEY TO MOVE FORWARD",
];
pub const GAME_OVER: &str = "GAME OVER";
pub const LEVEL: &str = "LEVEL";

/// What a cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Background,
    Floor,
    Player,
}

/// Text drawn over the cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub col: u16,
    pub row: u16,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Canvas {
    pub cols: u16,
    pub rows: u16,
    cells: Vec<Shade>,
    pub labels: Vec<Label>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Shade::Background; cols as usize * rows as usize],
            labels: Vec::new(),
        }
    }

    /// Paint `frame` onto a fresh grid
    pub fn paint(frame: &Frame<'_>, cols: u16, rows: u16) -> Self {
        let mut canvas = Self::new(cols, rows);
        match frame.phase {
            GamePhase::PreGame => {
                let top = rows / 2;
                canvas.center_text(top.saturating_sub(1), TITLE);
                for (i, line) in INSTRUCTIONS.iter().enumerate() {
                    canvas.center_text(top + 1 + i as u16, line);
                }
            }
            GamePhase::Playing => {
                canvas.fill_rect(&frame.floor, Shade::Floor);
                for obstacle in frame.obstacles {
                    // Pits are holes cut into the floor
                    let shade = match obstacle.kind {
                        ObstacleKind::Pit => Shade::Background,
                        ObstacleKind::Platform | ObstacleKind::Wall => Shade::Floor,
                    };
                    canvas.fill_rect(&obstacle.rect, shade);
                }
                canvas.fill_rect(frame.player, Shade::Player);
                canvas.labels.push(Label {
                    col: 0,
                    row: rows.saturating_sub(1),
                    text: format!("{LEVEL} {}", level_letter(frame.level)),
                });
            }
            GamePhase::GameOver => canvas.center_text(rows / 2, GAME_OVER),
        }
        canvas
    }

    /// Row of cells, left to right
    pub fn row(&self, row: u16) -> &[Shade] {
        let start = row as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    /// Fill every cell covered by `rect`; anything visible covers at least one cell
    pub fn fill_rect(&mut self, rect: &Rect, shade: Shade) {
        let sx = self.cols as f32 / WORLD_WIDTH;
        let sy = self.rows as f32 / WORLD_HEIGHT;

        let Some((c0, c1)) = span(rect.x() * sx, rect.right() * sx, self.cols) else {
            return;
        };
        let Some((r0, r1)) = span(rect.y() * sy, rect.bottom() * sy, self.rows) else {
            return;
        };

        for row in r0..r1 {
            let start = row as usize * self.cols as usize;
            self.cells[start + c0 as usize..start + c1 as usize].fill(shade);
        }
    }

    fn center_text(&mut self, row: u16, text: &str) {
        if row >= self.rows {
            return;
        }
        let width = text.chars().count() as u16;
        self.labels.push(Label {
            col: self.cols.saturating_sub(width) / 2,
            row,
            text: text.to_string(),
        });
    }
}

/// Clamp a scaled [start, end) interval onto `0..limit`, widening empty spans to one cell
fn span(start: f32, end: f32, limit: u16) -> Option<(u16, u16)> {
    if end <= 0.0 || start >= limit as f32 || limit == 0 {
        return None;
    }
    let lo = start.round().clamp(0.0, (limit - 1) as f32) as u16;
    let hi = (end.round().clamp(0.0, limit as f32) as u16).max(lo + 1);
    Some((lo, hi))
}
