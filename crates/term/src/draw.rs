//! Drawing primitives for Noughts and Crosses.
//!
//! Every primitive paints on any [`Canvas`]. The grid primitives use the
//! fill, stroke and stroke weight already set for the frame; the marks set
//! their own.

use crate::canvas::Canvas;
use crate::core::coords::{cell_bottom_left, cell_center, cell_hovered_by, cell_radius};
use crate::core::Board;
use crate::types::{Angle, CellIndex, Color, Player, Vec2};

/// Rotation of each bar of a cross.
const CROSS_ROTATION: Angle = Angle::from_turns(0.125);

/// Draws the cell at `index` with the current style.
pub fn draw_cell(index: CellIndex, board_size: usize, ctx: &mut impl Canvas) {
    ctx.square(
        cell_bottom_left(index, board_size),
        cell_radius(board_size),
    );
}

/// Draws the `n x n` grid covering the whole viewport.
pub fn draw_board(board_size: usize, ctx: &mut impl Canvas) {
    for x in 0..board_size {
        for y in 0..board_size {
            draw_cell(CellIndex::new(x, y), board_size, ctx);
        }
    }
}

fn set_mark_style(board_size: usize, ctx: &mut impl Canvas) {
    ctx.set_stroke(Color::BLACK);
    ctx.set_fill(Color::TRANSPARENT);
    ctx.set_stroke_weight(0.4 * cell_radius(board_size));
}

pub fn draw_nought(index: CellIndex, board_size: usize, ctx: &mut impl Canvas) {
    set_mark_style(board_size, ctx);
    ctx.circle(
        cell_center(index, board_size),
        0.9 * cell_radius(board_size),
    );
}

pub fn draw_cross(index: CellIndex, board_size: usize, ctx: &mut impl Canvas) {
    set_mark_style(board_size, ctx);
    let center = cell_center(index, board_size);
    let radii = Vec2::new(1.0, 0.2) * cell_radius(board_size);
    ctx.rectangle(center, radii, CROSS_ROTATION);
    ctx.rectangle(center, radii, -CROSS_ROTATION);
}

pub fn draw_player(player: Player, index: CellIndex, board_size: usize, ctx: &mut impl Canvas) {
    match player {
        Player::Noughts => draw_nought(index, board_size, ctx),
        Player::Crosses => draw_cross(index, board_size, ctx),
    }
}

/// Draws the mark of every occupied cell.
pub fn draw_board_occupancy(board: &Board, ctx: &mut impl Canvas) {
    for (index, player) in board.occupied() {
        draw_player(player, index, board.size(), ctx);
    }
}

/// Draws `current_player` on the hovered cell when that cell is empty.
pub fn draw_hover_preview(current_player: Player, board: &Board, ctx: &mut impl Canvas) {
    let hovered = cell_hovered_by(ctx.mouse(), board.size());
    if let Some(index) = hovered.filter(|idx| board[*idx].is_none()) {
        draw_player(current_player, index, board.size(), ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordingCanvas;

    #[test]
    fn board_has_one_square_per_cell() {
        let mut ctx = RecordingCanvas::default();
        draw_board(4, &mut ctx);
        let squares: Vec<_> = ctx.squares().collect();
        assert_eq!(squares.len(), 16);
        assert!(squares.iter().all(|(_, r)| *r == 0.25));
        assert!(squares.contains(&(Vec2::new(-1.0, -1.0), 0.25)));
        assert!(squares.contains(&(Vec2::new(0.5, 0.5), 0.25)));
    }

    #[test]
    fn nought_geometry() {
        let mut ctx = RecordingCanvas::default();
        draw_nought(CellIndex::new(0, 0), 2, &mut ctx);
        let (center, radius) = ctx.circles().next().unwrap();
        assert_eq!(center, Vec2::new(-0.5, -0.5));
        assert!((radius - 0.45).abs() < 1e-6);
        let (_, style) = ctx.shapes().next().unwrap();
        assert_eq!(style.stroke, Color::BLACK);
        assert!(style.fill.is_transparent());
        assert!((style.stroke_weight - 0.2).abs() < 1e-6);
    }

    #[test]
    fn cross_is_two_opposite_bars() {
        let mut ctx = RecordingCanvas::default();
        draw_cross(CellIndex::new(1, 1), 3, &mut ctx);
        let bars: Vec<_> = ctx.shapes().collect();
        assert_eq!(bars.len(), 2);
        match (bars[0].0, bars[1].0) {
            (
                crate::canvas::Shape::Rectangle {
                    radii: a,
                    rotation: ra,
                    ..
                },
                crate::canvas::Shape::Rectangle { rotation: rb, .. },
            ) => {
                assert!((a.x - 1.0 / 3.0).abs() < 1e-6);
                assert!((a.y - 0.2 / 3.0).abs() < 1e-6);
                assert_eq!(ra.turns(), 0.125);
                assert_eq!(rb.turns(), -0.125);
            }
            other => panic!("unexpected shapes {:?}", other),
        }
    }

    #[test]
    fn preview_needs_pointer_on_board() {
        let board = Board::new(3);
        let mut ctx = RecordingCanvas::new(Vec2::new(1.5, 0.0));
        draw_hover_preview(Player::Noughts, &board, &mut ctx);
        assert!(ctx.commands().is_empty());

        ctx.set_mouse(Vec2::ZERO);
        draw_hover_preview(Player::Noughts, &board, &mut ctx);
        assert_eq!(ctx.circles().count(), 1);
    }
}
