//! The character grid a frame is packed into before it reaches the terminal.
//!
//! Board pixels arrive here as upper half blocks: the glyph foreground is the
//! top pixel and the background the bottom one. Text (the status line) uses
//! the same cells with a plain black background.

use crate::types::Color;

/// Upper half block; its foreground paints the top pixel of a cell.
pub const HALF_BLOCK: char = '▀';

/// 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantize a `[0, 1]` color, ignoring alpha.
    pub fn from_color(color: Color) -> Self {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self::new(channel(color.r), channel(color.g), channel(color.b))
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(rgb: Rgb) -> Self {
        crossterm::style::Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// One character cell: a char and its two colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph::text(' ');

    /// White text on black.
    pub const fn text(ch: char) -> Self {
        Self {
            ch,
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
        }
    }

    /// Two vertically stacked pixels.
    pub const fn half_block(top: Rgb, bottom: Rgb) -> Self {
        Self {
            ch: HALF_BLOCK,
            fg: top,
            bg: bottom,
        }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of glyphs covering the whole terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Screen {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Screen {
    /// A blank `width x height` screen.
    pub fn new(width: u16, height: u16) -> Self {
        let mut screen = Self::default();
        screen.reset(width, height);
        screen
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn same_shape(&self, other: &Screen) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Blank every glyph, reshaping to `width x height` first.
    ///
    /// The allocation is reused across frames.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(width as usize * height as usize, Glyph::BLANK);
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn glyph(&self, x: u16, y: u16) -> Option<Glyph> {
        self.offset(x, y).map(|i| self.glyphs[i])
    }

    /// Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.offset(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    /// Write `text` from `(x, y)` rightwards, cut at the right edge.
    pub fn print(&mut self, x: u16, y: u16, text: &str) {
        let columns = (x..self.width).zip(text.chars());
        for (cx, ch) in columns {
            self.set(cx, y, Glyph::text(ch));
        }
    }

    /// Glyphs of row `y`; empty past the bottom.
    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    /// The characters of row `y`.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|glyph| glyph.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_stops_at_the_right_edge() {
        let mut screen = Screen::new(6, 2);
        screen.print(3, 1, "hello");
        assert_eq!(screen.row_text(1), "   hel");
        assert_eq!(screen.row_text(0), "      ");
        assert!(screen.row(2).is_empty());
    }

    #[test]
    fn reset_blanks_and_reshapes() {
        let mut screen = Screen::new(3, 3);
        screen.set(1, 1, Glyph::half_block(Rgb::WHITE, Rgb::BLACK));
        screen.reset(2, 4);
        assert_eq!((screen.width(), screen.height()), (2, 4));
        assert!((0..4).all(|y| screen.row(y).iter().all(|g| *g == Glyph::BLANK)));
        assert_eq!(screen.glyph(2, 0), None);
    }

    #[test]
    fn quantize_clamps_channels() {
        let rgb = Rgb::from_color(Color::rgba(1.5, 0.5, -1.0, 0.2));
        assert_eq!(rgb, Rgb::new(255, 128, 0));
    }
}
