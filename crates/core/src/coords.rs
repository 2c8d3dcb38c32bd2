//! Coordinate mapping between board cells and normalized space.
//!
//! A board of size `n` covers the whole `[-1, +1]²` square: every cell has a
//! side of `2/n`, hence a half-side ("radius") of `1/n`. Cell `(0, 0)` sits in
//! the bottom-left corner.

use crate::types::{CellIndex, Vec2};

/// Half-side of a cell in normalized space.
pub fn cell_radius(board_size: usize) -> f32 {
    1.0 / board_size as f32
}

/// Linearly map `value` from the range `[from.0, from.1]` to `[to.0, to.1]`.
///
/// Applied independently to both components.
pub fn map(value: Vec2, from: (f32, f32), to: (f32, f32)) -> Vec2 {
    let scale = (to.1 - to.0) / (from.1 - from.0);
    Vec2::new(
        to.0 + (value.x - from.0) * scale,
        to.0 + (value.y - from.0) * scale,
    )
}

/// Bottom-left corner of the cell at `index`.
///
/// ```
/// use tui_games_core::coords::cell_bottom_left;
/// use tui_games_core::types::{CellIndex, Vec2};
///
/// assert_eq!(cell_bottom_left(CellIndex::new(0, 0), 3), Vec2::new(-1.0, -1.0));
/// assert_eq!(cell_bottom_left(CellIndex::new(3, 3), 3), Vec2::new(1.0, 1.0));
/// ```
pub fn cell_bottom_left(index: CellIndex, board_size: usize) -> Vec2 {
    let idx = Vec2::new(index.x as f32, index.y as f32);
    map(idx, (0.0, board_size as f32), (-1.0, 1.0))
}

/// Center of the cell at `index`.
pub fn cell_center(index: CellIndex, board_size: usize) -> Vec2 {
    cell_bottom_left(index, board_size) + Vec2::splat(cell_radius(board_size))
}

/// The cell under `position`, if any.
///
/// Points on a boundary belong to the cell whose bottom-left corner they are,
/// so `+1` on either axis is outside the board.
///
/// ```
/// use tui_games_core::coords::cell_hovered_by;
/// use tui_games_core::types::{CellIndex, Vec2};
///
/// assert_eq!(cell_hovered_by(Vec2::new(0.0, 0.0), 3), Some(CellIndex::new(1, 1)));
/// assert_eq!(cell_hovered_by(Vec2::new(1.0, 1.0), 3), None);
/// assert_eq!(cell_hovered_by(Vec2::new(1.5, 0.0), 3), None);
/// ```
pub fn cell_hovered_by(position: Vec2, board_size: usize) -> Option<CellIndex> {
    let inside = |v: f32| (-1.0_f32..1.0).contains(&v);
    // NaN is never contained.
    if board_size == 0 || !inside(position.x) || !inside(position.y) {
        return None;
    }
    let pos = map(position, (-1.0, 1.0), (0.0, board_size as f32));
    // Rounding can carry a point just below +1 up to `n`.
    let last = board_size - 1;
    let x = (pos.x.floor() as usize).min(last);
    let y = (pos.y.floor() as usize).min(last);
    Some(CellIndex::new(x, y))
}
