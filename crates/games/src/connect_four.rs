//! Connect 4 as a terminal session.
//!
//! Same loop and canvas as Noughts and Crosses: clicking anywhere in a
//! column drops a disc, and the landing cell of the hovered column shows a
//! faded disc of the side to move.

use std::io::Write;

use anyhow::Result;
use log::info;

use crate::core::connect_four::{cell_bottom_left, cell_center, cell_radius, column_at, COLUMNS, ROWS};
use crate::core::{ConnectFour, ConnectFourOutcome, Disc};
use crate::term::{Canvas, SessionEnd, Sketch, TerminalContext};
use crate::types::{Color, PointerEvent, Window, BACKGROUND, WINDOW_HEIGHT, WINDOW_WIDTH};

pub const TITLE: &str = "Connect 4";

const FRAME: Color = Color::rgb(0.10, 0.20, 0.60);
const RED: Color = Color::rgb(0.85, 0.15, 0.15);
const YELLOW: Color = Color::rgb(0.95, 0.80, 0.10);

fn disc_color(disc: Disc) -> Color {
    match disc {
        Disc::Red => RED,
        Disc::Yellow => YELLOW,
    }
}

/// Radius of a disc inside its cell.
fn disc_radius() -> f32 {
    0.8 * cell_radius()
}

#[derive(Debug, Clone)]
pub struct ConnectFourSketch {
    game: ConnectFour,
    outcome: ConnectFourOutcome,
}

impl ConnectFourSketch {
    pub fn new() -> Self {
        Self {
            game: ConnectFour::new(),
            outcome: ConnectFourOutcome::Ongoing,
        }
    }

    pub fn game(&self) -> &ConnectFour {
        &self.game
    }

    pub fn outcome(&self) -> ConnectFourOutcome {
        self.outcome
    }

    fn draw_grid(&self, ctx: &mut impl Canvas) {
        ctx.set_stroke(Color::WHITE);
        ctx.set_stroke_weight(0.01);
        ctx.set_fill(FRAME);
        for column in 0..COLUMNS {
            for row in 0..ROWS {
                ctx.square(cell_bottom_left(column, row), cell_radius());
            }
        }
    }

    fn draw_discs(&self, ctx: &mut impl Canvas) {
        ctx.set_stroke(Color::TRANSPARENT);
        for column in 0..COLUMNS {
            for row in 0..ROWS {
                let fill = self.game.get(column, row).map_or(BACKGROUND, disc_color);
                ctx.set_fill(fill);
                ctx.circle(cell_center(column, row), disc_radius());
            }
        }
    }

    fn draw_preview(&self, ctx: &mut impl Canvas) {
        let target = column_at(ctx.mouse())
            .and_then(|column| Some((column, self.game.landing_row(column)?)));
        if let Some((column, row)) = target {
            let color = disc_color(self.game.current);
            ctx.set_stroke(Color::TRANSPARENT);
            ctx.set_fill(Color::rgba(color.r, color.g, color.b, 0.5));
            ctx.circle(cell_center(column, row), disc_radius());
        }
    }
}

impl Default for ConnectFourSketch {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for ConnectFourSketch {
    fn mouse_pressed(&mut self, event: PointerEvent) {
        self.game.click(event.position);
    }

    fn update(&mut self, ctx: &mut impl Canvas) {
        ctx.background(BACKGROUND);
        self.draw_grid(ctx);
        self.draw_discs(ctx);

        self.outcome = self.game.outcome();
        if self.outcome.is_terminal() {
            ctx.stop();
        } else {
            self.draw_preview(ctx);
        }
    }

    fn status(&self) -> String {
        match self.outcome.message() {
            Some(message) => message.to_string(),
            None => format!("{} to play. q to quit.", self.game.current.as_str()),
        }
    }
}

/// Play one game of Connect 4, then announce the result on `out`.
pub fn play<W: Write + ?Sized>(out: &mut W) -> Result<ConnectFourOutcome> {
    info!("connect 4");
    let mut sketch = ConnectFourSketch::new();
    let mut context = TerminalContext::new(Window::new(WINDOW_WIDTH, WINDOW_HEIGHT, TITLE));
    if context.start(&mut sketch)? == SessionEnd::Stopped {
        if let Some(message) = sketch.outcome().message() {
            writeln!(out, "{message}")?;
        }
    }
    Ok(sketch.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{run_frame, RecordingCanvas};
    use crate::types::{PointerButton, Vec2};

    fn click_column(column: usize) -> PointerEvent {
        PointerEvent {
            // Top of the column; the disc still falls to the bottom.
            position: cell_center(column, ROWS - 1),
            button: PointerButton::Left,
        }
    }

    #[test]
    fn preview_shows_landing_cell() {
        let mut sketch = ConnectFourSketch::new();
        let mut ctx = RecordingCanvas::new(cell_center(2, 4));
        run_frame(&mut sketch, &mut ctx, [click_column(2)]);

        // One hole per cell plus the preview disc.
        let circles: Vec<_> = ctx.circles().collect();
        assert_eq!(circles.len(), COLUMNS * ROWS + 1);
        assert_eq!(circles.last().unwrap().0, cell_center(2, 1));
    }

    #[test]
    fn vertical_win_stops_and_reports() {
        let mut sketch = ConnectFourSketch::new();
        let mut ctx = RecordingCanvas::new(Vec2::splat(f32::INFINITY));
        for column in [0, 1, 0, 1, 0, 1, 0] {
            run_frame(&mut sketch, &mut ctx, [click_column(column)]);
        }
        assert!(ctx.is_stopped());
        assert_eq!(sketch.status(), "Red has won!");
    }

    #[test]
    fn press_after_the_winning_drop_is_ignored() {
        let mut sketch = ConnectFourSketch::new();
        let mut ctx = RecordingCanvas::new(Vec2::splat(f32::INFINITY));
        for column in [0, 1, 0, 1, 0, 1] {
            run_frame(&mut sketch, &mut ctx, [click_column(column)]);
        }
        // The winning drop and a Yellow reply arrive in the same frame.
        run_frame(&mut sketch, &mut ctx, [click_column(0), click_column(1)]);

        assert!(ctx.is_stopped());
        assert_eq!(sketch.outcome(), ConnectFourOutcome::Winner(Disc::Red));
        assert_eq!(sketch.game().get(1, 3), None);
        assert_eq!(sketch.game().discs().count(), 7);
    }
}
