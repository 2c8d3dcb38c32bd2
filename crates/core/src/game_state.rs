//! Game state module - one Noughts and Crosses game
//!
//! [`GameState`] owns the board and the side to move. It is the state a
//! session drives from its pointer and frame callbacks; it performs no I/O.

use log::debug;

use crate::board::Board;
use crate::coords::cell_hovered_by;
use crate::rules;
use crate::turn::try_to_play;
use crate::types::{CellIndex, Outcome, Player, Vec2};

/// Board plus turn state of a game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
}

impl GameState {
    /// Empty `size x size` board, Crosses to move.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Player::FIRST,
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Apply a click at `position`. Returns whether a move was made.
    ///
    /// A finished game takes no further moves.
    pub fn click(&mut self, position: Vec2) -> bool {
        if self.outcome().is_terminal() {
            debug!("click at ({}, {}) ignored: game is over", position.x, position.y);
            return false;
        }
        try_to_play(position, &mut self.board, &mut self.current_player)
    }

    /// The cell where the hover preview belongs, if any.
    ///
    /// Only empty cells under the pointer qualify.
    pub fn hover_target(&self, pointer: Vec2) -> Option<CellIndex> {
        cell_hovered_by(pointer, self.size()).filter(|idx| self.board[*idx].is_none())
    }

    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Number of moves played so far.
    pub fn move_count(&self) -> usize {
        self.board.occupied_count()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::cell_center;

    #[test]
    fn new_game_starts_with_crosses() {
        let state = GameState::default();
        assert_eq!(state.size(), 3);
        assert_eq!(state.current_player, Player::Crosses);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.outcome(), Outcome::Ongoing);
    }

    #[test]
    fn hover_target_skips_occupied_cells() {
        let mut state = GameState::new(3);
        let center = cell_center(CellIndex::new(1, 1), 3);
        assert_eq!(state.hover_target(center), Some(CellIndex::new(1, 1)));
        assert!(state.click(center));
        assert_eq!(state.hover_target(center), None);
        assert_eq!(state.hover_target(Vec2::new(-2.0, 0.0)), None);
    }

    #[test]
    fn finished_game_ignores_clicks() {
        let mut state = GameState::new(3);
        for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
            assert!(state.click(cell_center(CellIndex::new(x, y), 3)));
        }
        assert_eq!(state.outcome(), Outcome::Winner(Player::Crosses));

        let before = state.clone();
        assert!(!state.click(cell_center(CellIndex::new(2, 2), 3)));
        assert_eq!(state, before);
    }
}
