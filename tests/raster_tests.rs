//! Pixel rasterizer tests: what actually lands on the terminal

use tui_games::core::cell_center;
use tui_games::games::NoughtsAndCrosses;
use tui_games::term::{run_frame, FrameView, PixelCanvas, Screen, HALF_BLOCK};
use tui_games::types::{
    CellIndex, Color, PointerButton, PointerEvent, SquareLayout, Vec2, Viewport, BACKGROUND,
};

fn same(a: Color, b: Color) -> bool {
    (a.r - b.r).abs() < 1e-3 && (a.g - b.g).abs() < 1e-3 && (a.b - b.b).abs() < 1e-3
}

fn press(x: usize, y: usize) -> PointerEvent {
    PointerEvent {
        position: cell_center(CellIndex::new(x, y), 3),
        button: PointerButton::Left,
    }
}

fn frame(presses: Vec<PointerEvent>, mouse: Vec2) -> PixelCanvas {
    let mut game = NoughtsAndCrosses::new(3);
    let mut canvas = PixelCanvas::new(80, 80);
    canvas.set_mouse(mouse);
    run_frame(&mut game, &mut canvas, presses);
    canvas
}

#[test]
fn test_empty_board_shows_background_and_grid() {
    let canvas = frame(vec![], Vec2::splat(f32::INFINITY));

    // Cell centers keep the background.
    for x in 0..3 {
        for y in 0..3 {
            let p = canvas.pixel_at(cell_center(CellIndex::new(x, y), 3)).unwrap();
            assert!(same(p, BACKGROUND), "cell ({x}, {y}) is {:?}", p);
        }
    }
    // Grid lines are white and at least one pixel wide.
    let on_line = canvas.pixel_at(Vec2::new(-1.0 / 3.0, 0.5)).unwrap();
    assert!(same(on_line, Color::WHITE));
}

#[test]
fn test_nought_ring_is_black_with_hollow_center() {
    let canvas = frame(vec![press(2, 2), press(0, 0)], Vec2::splat(f32::INFINITY));

    // Nought at (0, 0): radius 0.9/3 = 0.3 around its center.
    let center = cell_center(CellIndex::new(0, 0), 3);
    assert!(same(canvas.pixel_at(center).unwrap(), BACKGROUND));
    let on_ring = center + Vec2::new(0.3, 0.0);
    assert!(same(canvas.pixel_at(on_ring).unwrap(), Color::BLACK));
}

#[test]
fn test_cross_covers_its_center() {
    let canvas = frame(vec![press(1, 1)], Vec2::splat(f32::INFINITY));
    assert!(same(canvas.pixel_at(Vec2::ZERO).unwrap(), Color::BLACK));
    // Between the two bars, on the horizontal axis, the background shows.
    assert!(same(canvas.pixel_at(Vec2::new(0.25, 0.0)).unwrap(), BACKGROUND));
}

#[test]
fn test_hover_preview_is_rendered() {
    let target = cell_center(CellIndex::new(2, 0), 3);
    let canvas = frame(vec![], target);
    // Crosses to move: the preview cross covers the hovered cell center.
    assert!(same(canvas.pixel_at(target).unwrap(), Color::BLACK));
}

#[test]
fn test_frame_lands_in_the_terminal_square() {
    let viewport = Viewport::new(100, 41);
    let layout = SquareLayout::fit(viewport, 1);
    assert_eq!(layout.side, 80);

    let mut game = NoughtsAndCrosses::new(3);
    let mut canvas = PixelCanvas::new(layout.side, layout.side);
    canvas.set_mouse(Vec2::splat(f32::INFINITY));
    run_frame(&mut game, &mut canvas, []);

    let mut screen = Screen::default();
    FrameView.render_into(&canvas, layout, viewport, "Crosses to play", &mut screen);

    assert_eq!(screen.glyph(layout.origin_x, layout.origin_y).unwrap().ch, HALF_BLOCK);
    assert_eq!(screen.glyph(layout.origin_x - 1, layout.origin_y).unwrap().ch, ' ');
    assert!(screen.row_text(40).contains("Crosses to play"));
}
