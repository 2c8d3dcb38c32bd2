//! FrameView: composes one terminal frame from the pixel canvas.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::screen::Screen;
use crate::raster::PixelCanvas;
use crate::types::{SquareLayout, Viewport};

/// Rows kept free under the square for the status line.
pub const STATUS_ROWS: u16 = 1;

/// Smallest square side (in pixels) worth drawing.
pub const MIN_SIDE: u16 = 12;

const TOO_SMALL: &str = "Terminal too small";

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameView;

impl FrameView {
    /// Whether the square is large enough to show the canvas.
    pub fn fits(layout: &SquareLayout) -> bool {
        layout.side >= MIN_SIDE
    }

    /// Render `canvas` at `layout`, plus `status` centered on the last row.
    pub fn render_into(
        &self,
        canvas: &PixelCanvas,
        layout: SquareLayout,
        viewport: Viewport,
        status: &str,
        screen: &mut Screen,
    ) {
        screen.reset(viewport.width, viewport.height);

        if Self::fits(&layout) {
            canvas.blit_into(screen, layout.origin_x, layout.origin_y);
        } else {
            let mid = viewport.height.saturating_sub(STATUS_ROWS) / 2;
            Self::print_centered(screen, mid, TOO_SMALL);
        }

        if viewport.height > 0 {
            Self::print_centered(screen, viewport.height - 1, status);
        }
    }

    /// Like `render_into`, on a fresh screen.
    pub fn render(
        &self,
        canvas: &PixelCanvas,
        layout: SquareLayout,
        viewport: Viewport,
        status: &str,
    ) -> Screen {
        let mut screen = Screen::default();
        self.render_into(canvas, layout, viewport, status, &mut screen);
        screen
    }

    fn print_centered(screen: &mut Screen, y: u16, text: &str) {
        let text_w = text.chars().count().min(u16::MAX as usize) as u16;
        let x = screen.width().saturating_sub(text_w) / 2;
        screen.print(x, y, text);
    }
}
