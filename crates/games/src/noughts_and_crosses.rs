//! Noughts and Crosses as a terminal session.

use std::io::Write;

use anyhow::Result;
use log::info;

use crate::core::{announce, GameState};
use crate::term::draw::{draw_board, draw_board_occupancy, draw_hover_preview};
use crate::term::{Canvas, SessionEnd, Sketch, TerminalContext};
use crate::types::{
    Color, Outcome, PointerEvent, Window, BACKGROUND, GRID_STROKE_WEIGHT, WINDOW_HEIGHT,
    WINDOW_TITLE, WINDOW_WIDTH,
};

/// Game state plus the outcome seen by the last frame.
#[derive(Debug, Clone)]
pub struct NoughtsAndCrosses {
    state: GameState,
    outcome: Outcome,
}

impl NoughtsAndCrosses {
    /// Empty `board_size x board_size` board, Crosses to move.
    pub fn new(board_size: usize) -> Self {
        Self {
            state: GameState::new(board_size),
            outcome: Outcome::Ongoing,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Outcome as of the last `update`.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl Sketch for NoughtsAndCrosses {
    fn mouse_pressed(&mut self, event: PointerEvent) {
        self.state.click(event.position);
    }

    fn update(&mut self, ctx: &mut impl Canvas) {
        ctx.background(BACKGROUND);
        ctx.set_stroke_weight(GRID_STROKE_WEIGHT);
        ctx.set_stroke(Color::WHITE);
        ctx.set_fill(Color::TRANSPARENT);
        draw_board(self.state.size(), ctx);
        draw_board_occupancy(&self.state.board, ctx);
        draw_hover_preview(self.state.current_player, &self.state.board, ctx);

        self.outcome = self.state.outcome();
        if self.outcome.is_terminal() {
            ctx.stop();
        }
    }

    fn status(&self) -> String {
        match self.outcome.message() {
            Some(message) => message.to_string(),
            None => format!("{} to play. q to quit.", self.state.current_player.as_str()),
        }
    }
}

/// Play one game in the terminal, then announce the result on `out`.
///
/// Nothing is announced if the game is abandoned.
pub fn play<W: Write + ?Sized>(board_size: usize, out: &mut W) -> Result<Outcome> {
    info!("noughts and crosses on a {0}x{0} board", board_size);
    let mut game = NoughtsAndCrosses::new(board_size);
    let mut context = TerminalContext::new(Window::new(WINDOW_WIDTH, WINDOW_HEIGHT, WINDOW_TITLE));
    match context.start(&mut game)? {
        SessionEnd::Stopped => {
            announce(game.outcome(), out)?;
        }
        SessionEnd::Abandoned => info!("game abandoned after {} moves", game.state.move_count()),
    }
    Ok(game.outcome())
}
