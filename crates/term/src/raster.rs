//! PixelCanvas: rasterizes canvas shapes into a square pixel buffer.
//!
//! Pixel `(0, 0)` is the top-left pixel; its center maps to
//! `(-1 + s/2, 1 - s/2)` in normalized space, where `s` is the pixel size.
//! Shapes are filled where their signed distance is `<= 0` and stroked where
//! the distance is within half the stroke weight. Strokes never get thinner
//! than one pixel so the grid stays visible at terminal resolution.

use crate::canvas::{Canvas, Shape, Style};
use crate::screen::{Glyph, Rgb, Screen};
use crate::types::{Color, Vec2};

#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u16,
    height: u16,
    pixels: Vec<Color>,
    style: Style,
    mouse: Vec2,
    stopped: bool,
}

impl PixelCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
            style: Style::default(),
            mouse: Vec2::splat(f32::INFINITY),
            stopped: false,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are undefined
    /// until the next `background`.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels
            .resize(width as usize * height as usize, Color::BLACK);
    }

    pub fn set_mouse(&mut self, position: Vec2) {
        self.mouse = position;
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Pixel holding the normalized point `p`, if it is on the canvas.
    pub fn pixel_at(&self, p: Vec2) -> Option<Color> {
        let x = ((p.x + 1.0) / 2.0 * self.width as f32).floor();
        let y = ((1.0 - p.y) / 2.0 * self.height as f32).floor();
        if x < 0.0 || y < 0.0 {
            return None;
        }
        self.pixel(x as u16, y as u16)
    }

    /// Normalized position of the center of pixel `(x, y)`.
    pub fn pixel_center(&self, x: u16, y: u16) -> Vec2 {
        Vec2::new(
            -1.0 + (x as f32 + 0.5) * 2.0 / self.width as f32,
            1.0 - (y as f32 + 0.5) * 2.0 / self.height as f32,
        )
    }

    fn pixel_size(&self) -> f32 {
        2.0 / self.width.max(self.height).max(1) as f32
    }

    /// Copy the canvas onto `screen` with its top-left corner at `(x0, y0)`,
    /// two pixels per character cell.
    pub fn blit_into(&self, screen: &mut Screen, x0: u16, y0: u16) {
        for row in 0..self.height.div_ceil(2) {
            for x in 0..self.width {
                let top = self.pixel(x, row * 2).unwrap_or(Color::BLACK);
                let bottom = self.pixel(x, row * 2 + 1).unwrap_or(top);
                let glyph = Glyph::half_block(Rgb::from_color(top), Rgb::from_color(bottom));
                screen.set(x0 + x, y0 + row, glyph);
            }
        }
    }

    fn paint(&mut self, shape: Shape) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let Style {
            fill,
            stroke,
            stroke_weight,
        } = self.style;
        let half_stroke = (stroke_weight / 2.0).max(self.pixel_size() / 2.0);
        let draw_fill = !fill.is_transparent();
        let draw_stroke = !stroke.is_transparent() && stroke_weight > 0.0;
        if !draw_fill && !draw_stroke {
            return;
        }

        let (min, max) = shape.bounds();
        let min = min - Vec2::splat(half_stroke);
        let max = max + Vec2::splat(half_stroke);
        let w = self.width as f32;
        let h = self.height as f32;
        let x_start = (((min.x + 1.0) / 2.0 * w).floor() - 1.0).clamp(0.0, w) as u16;
        let x_end = (((max.x + 1.0) / 2.0 * w).ceil() + 1.0).clamp(0.0, w) as u16;
        let y_start = (((1.0 - max.y) / 2.0 * h).floor() - 1.0).clamp(0.0, h) as u16;
        let y_end = (((1.0 - min.y) / 2.0 * h).ceil() + 1.0).clamp(0.0, h) as u16;

        for y in y_start..y_end {
            for x in x_start..x_end {
                let d = shape.signed_distance(self.pixel_center(x, y));
                let i = y as usize * self.width as usize + x as usize;
                if draw_fill && d <= 0.0 {
                    self.pixels[i] = blend(self.pixels[i], fill);
                }
                if draw_stroke && d.abs() <= half_stroke {
                    self.pixels[i] = blend(self.pixels[i], stroke);
                }
            }
        }
    }
}

/// Source-over blend of `src` onto an opaque `dst`.
fn blend(dst: Color, src: Color) -> Color {
    let a = src.a.clamp(0.0, 1.0);
    Color::rgb(
        dst.r * (1.0 - a) + src.r * a,
        dst.g * (1.0 - a) + src.g * a,
        dst.b * (1.0 - a) + src.b * a,
    )
}

impl Canvas for PixelCanvas {
    fn background(&mut self, color: Color) {
        self.pixels.fill(Color::rgb(color.r, color.g, color.b));
    }

    fn style(&self) -> Style {
        self.style
    }

    fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    fn shape(&mut self, shape: Shape) {
        self.paint(shape);
    }

    fn mouse(&self) -> Vec2 {
        self.mouse
    }

    fn stop(&mut self) {
        self.stopped = true;
    }

    fn is_stopped(&self) -> bool {
        self.stopped
    }
}
