//! RecordingCanvas: a headless canvas that remembers every draw call.

use crate::canvas::{Canvas, Shape, Style};
use crate::types::{Color, Vec2};

/// One recorded call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Background(Color),
    Shape { shape: Shape, style: Style },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    style: Style,
    mouse: Vec2,
    stopped: bool,
}

impl RecordingCanvas {
    /// Pointer parked at `mouse`.
    pub fn new(mouse: Vec2) -> Self {
        Self {
            mouse,
            ..Self::default()
        }
    }

    pub fn set_mouse(&mut self, position: Vec2) {
        self.mouse = position;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget the recorded calls (style and pointer are kept).
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded shapes with the style each was drawn with.
    pub fn shapes(&self) -> impl Iterator<Item = (Shape, Style)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Shape { shape, style } => Some((shape, style)),
            DrawCommand::Background(_) => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.shapes().filter_map(|(shape, _)| match shape {
            Shape::Circle { center, radius } => Some((center, radius)),
            _ => None,
        })
    }

    /// Centers of the rotated rectangles (two per cross).
    pub fn rectangle_centers(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.shapes().filter_map(|(shape, _)| match shape {
            Shape::Rectangle { center, .. } => Some(center),
            _ => None,
        })
    }

    pub fn squares(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.shapes().filter_map(|(shape, _)| match shape {
            Shape::Square {
                bottom_left,
                radius,
            } => Some((bottom_left, radius)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn background(&mut self, color: Color) {
        self.commands.push(DrawCommand::Background(color));
    }

    fn style(&self) -> Style {
        self.style
    }

    fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    fn shape(&mut self, shape: Shape) {
        self.commands.push(DrawCommand::Shape {
            shape,
            style: self.style,
        });
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
