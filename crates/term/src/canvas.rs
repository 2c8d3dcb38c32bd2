//! The rendering context capability.
//!
//! A [`Canvas`] is an immediate-mode 2D drawing surface over the normalized
//! square `[-1, +1]²`. Shapes are painted with the fill, stroke and stroke
//! weight in effect at the time of the call. The canvas also answers where
//! the pointer is and lets a frame callback stop the loop.

use crate::types::{Angle, Color, Vec2};

/// Fill, stroke and stroke weight applied to the next shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_weight: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            stroke: Color::BLACK,
            stroke_weight: 0.01,
        }
    }
}

/// Geometry of one shape draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned square given its bottom-left corner and half-side.
    Square { bottom_left: Vec2, radius: f32 },
    Circle { center: Vec2, radius: f32 },
    /// Rectangle given its center, per-axis half-extents and rotation.
    Rectangle {
        center: Vec2,
        radii: Vec2,
        rotation: Angle,
    },
}

impl Shape {
    /// Signed distance from `p` to the outline: negative inside.
    pub fn signed_distance(&self, p: Vec2) -> f32 {
        match *self {
            Shape::Square {
                bottom_left,
                radius,
            } => box_distance(p - (bottom_left + Vec2::splat(radius)), Vec2::splat(radius)),
            Shape::Circle { center, radius } => (p - center).length() - radius,
            Shape::Rectangle {
                center,
                radii,
                rotation,
            } => box_distance((p - center).rotated(-rotation), radii),
        }
    }

    /// Axis-aligned bounding box `(min, max)`.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        match *self {
            Shape::Square {
                bottom_left,
                radius,
            } => (bottom_left, bottom_left + Vec2::splat(2.0 * radius)),
            Shape::Circle { center, radius } => {
                (center - Vec2::splat(radius), center + Vec2::splat(radius))
            }
            Shape::Rectangle { center, radii, .. } => {
                let r = Vec2::splat(radii.length());
                (center - r, center + r)
            }
        }
    }
}

/// Signed distance to an axis-aligned box centered on the origin.
fn box_distance(local: Vec2, radii: Vec2) -> f32 {
    let q = local.abs() - radii;
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0)
}

/// Immediate-mode drawing context over normalized space.
pub trait Canvas {
    /// Paint the whole surface with `color`.
    fn background(&mut self, color: Color);

    fn style(&self) -> Style;

    fn set_style(&mut self, style: Style);

    fn set_fill(&mut self, fill: Color) {
        let style = self.style();
        self.set_style(Style { fill, ..style });
    }

    fn set_stroke(&mut self, stroke: Color) {
        let style = self.style();
        self.set_style(Style { stroke, ..style });
    }

    fn set_stroke_weight(&mut self, stroke_weight: f32) {
        let style = self.style();
        self.set_style(Style {
            stroke_weight,
            ..style
        });
    }

    /// Draw one shape with the current style.
    fn shape(&mut self, shape: Shape);

    fn square(&mut self, bottom_left: Vec2, radius: f32) {
        self.shape(Shape::Square {
            bottom_left,
            radius,
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        self.shape(Shape::Circle { center, radius });
    }

    fn rectangle(&mut self, center: Vec2, radii: Vec2, rotation: Angle) {
        self.shape(Shape::Rectangle {
            center,
            radii,
            rotation,
        });
    }

    /// Current pointer position in normalized space.
    fn mouse(&self) -> Vec2;

    /// Ask the running loop to stop after this frame.
    fn stop(&mut self);

    fn is_stopped(&self) -> bool;
}
