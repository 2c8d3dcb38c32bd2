//! Turn controller: applies a pointer click to the board.

use log::debug;

use crate::board::Board;
use crate::coords::cell_hovered_by;
use crate::types::{Player, Vec2};

/// Hand the move to the other side.
pub fn change_player(player: &mut Player) {
    *player = player.other();
}

/// Play `current_player` on the cell under `position`.
///
/// Clicks outside the board or on an occupied cell are ignored. On a legal
/// move the cell is written and the turn passes to the other side.
/// Returns whether a move was committed.
pub fn try_to_play(position: Vec2, board: &mut Board, current_player: &mut Player) -> bool {
    let Some(index) = cell_hovered_by(position, board.size()) else {
        debug!("click at ({:.3}, {:.3}) is outside the board", position.x, position.y);
        return false;
    };
    if board[index].is_some() {
        debug!("cell ({}, {}) is already taken", index.x, index.y);
        return false;
    }
    board[index] = Some(*current_player);
    debug!(
        "{} played ({}, {})",
        current_player.as_str(),
        index.x,
        index.y
    );
    change_player(current_player);
    true
}
