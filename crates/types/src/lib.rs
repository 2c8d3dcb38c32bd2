//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game rules, drawing, terminal input).
//!
//! # Normalized Space
//!
//! Everything that is drawn lives in the centered square `[-1, +1] × [-1, +1]`:
//!
//! - `x` grows to the right, `y` grows upwards
//! - `(-1, -1)` is the bottom-left corner, `(+1, +1)` the top-right corner
//! - Angles are expressed in turns (1 turn = 2π radians)
//!
//! # Session Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 3 | Noughts and Crosses board size |
//! | `MIN_BOARD_SIZE` / `MAX_BOARD_SIZE` | 2 / 9 | Accepted `--board-size` range |
//! | `WINDOW_WIDTH` × `WINDOW_HEIGHT` | 800 × 800 | Requested window size |
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) |
//! | `GRID_STROKE_WEIGHT` | 0.01 | Stroke weight of grid lines |
//!
//! # Examples
//!
//! ```
//! use tui_games_types::{CellIndex, Outcome, Player};
//!
//! let idx = CellIndex::new(1, 2);
//! assert_eq!((idx.x, idx.y), (1, 2));
//!
//! assert_eq!(Player::Crosses.other(), Player::Noughts);
//! assert_eq!(Outcome::Winner(Player::Noughts).message(), Some("Noughts have won!"));
//! assert!(!Outcome::Ongoing.is_terminal());
//! ```

use std::ops::{Add, Mul, Neg, Sub};

/// Board size used when none is configured (3x3).
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Smallest accepted board size.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest accepted board size.
pub const MAX_BOARD_SIZE: usize = 9;

/// Requested window width.
pub const WINDOW_WIDTH: u32 = 800;

/// Requested window height.
pub const WINDOW_HEIGHT: u32 = 800;

/// Title of the Noughts and Crosses window.
pub const WINDOW_TITLE: &str = "Noughts and Crosses";

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Background color cleared at the start of every frame.
pub const BACKGROUND: Color = Color::rgb(0.30, 0.25, 0.35);

/// Stroke weight used for the grid lines.
pub const GRID_STROKE_WEIGHT: f32 = 0.01;


/// A point or direction in normalized space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both components set to `v`.
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Component-wise maximum.
    pub fn max(self, other: Vec2) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Rotate counter-clockwise by `angle`.
    pub fn rotated(self, angle: Angle) -> Self {
        let (sin, cos) = angle.as_radians().sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// An angle stored in turns (1 turn = 2π radians).
///
/// ```
/// use tui_games_types::Angle;
///
/// let eighth = Angle::from_turns(0.125);
/// assert_eq!((-eighth).turns(), -0.125);
/// assert!((eighth.as_radians() - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle {
    turns: f32,
}

impl Angle {
    pub const fn from_turns(turns: f32) -> Self {
        Self { turns }
    }

    pub fn turns(self) -> f32 {
        self.turns
    }

    pub fn as_radians(self) -> f32 {
        self.turns * std::f32::consts::TAU
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::from_turns(-self.turns)
    }
}

/// RGBA color with every channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Nothing is painted with a fully transparent color.
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }
}

/// Integer coordinates `(x, y)` of a board cell, origin at the bottom-left.
///
/// Only meaningful for `x, y < n` on a board of size `n`; boards assert it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub x: usize,
    pub y: usize,
}

impl CellIndex {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// The two sides of a Noughts and Crosses game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Noughts,
    Crosses,
}

impl Player {
    /// The side that moves first.
    pub const FIRST: Player = Player::Crosses;

    /// The opposing side.
    pub fn other(self) -> Self {
        match self {
            Player::Noughts => Player::Crosses,
            Player::Crosses => Player::Noughts,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::Noughts => "Noughts",
            Player::Crosses => "Crosses",
        }
    }
}

/// A board cell
///
/// - `None`: Empty cell
/// - `Some(Player)`: Cell occupied by that player
pub type Cell = Option<Player>;

/// Result of evaluating a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No winning line and at least one empty cell.
    Ongoing,
    /// Some row, column or diagonal is filled by this player.
    Winner(Player),
    /// Every cell is occupied and nobody won.
    Draw,
}

impl Outcome {
    /// Whether the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The line printed when the game ends (`None` while ongoing).
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Ongoing => None,
            Outcome::Winner(Player::Noughts) => Some("Noughts have won!"),
            Outcome::Winner(Player::Crosses) => Some("Crosses have won!"),
            Outcome::Draw => Some("This is a draw!"),
        }
    }
}

/// Pointer buttons reported by the rendering context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// A pointer press, with the position in normalized space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Vec2,
    pub button: PointerButton,
}

/// Window descriptor handed to a rendering context at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Window {
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
        }
    }
}

/// Terminal viewport dimensions (columns x rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Placement of the normalized square inside a terminal viewport.
///
/// Every character cell carries two pixels stacked vertically, so a square of
/// `side` pixels spans `side` columns and `side / 2` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareLayout {
    /// First column of the square.
    pub origin_x: u16,
    /// First row of the square.
    pub origin_y: u16,
    /// Side length in pixels (always even).
    pub side: u16,
}

impl SquareLayout {
    /// Largest centered square that fits, leaving `reserved_rows` rows free
    /// at the bottom.
    pub fn fit(viewport: Viewport, reserved_rows: u16) -> Self {
        let rows = viewport.height.saturating_sub(reserved_rows);
        let side = viewport.width.min(rows.saturating_mul(2)) & !1;
        Self {
            origin_x: (viewport.width - side) / 2,
            origin_y: (rows - side / 2) / 2,
            side,
        }
    }

    /// Number of terminal rows covered by the square.
    pub fn rows(&self) -> u16 {
        self.side / 2
    }

    /// Whether terminal cell `(column, row)` lies inside the square.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.origin_x
            && row >= self.origin_y
            && column < self.origin_x + self.side
            && row < self.origin_y + self.rows()
    }

    /// Map the center of terminal cell `(column, row)` into normalized space.
    ///
    /// Cells outside the square map outside `[-1, +1]²`.
    pub fn to_normalized(&self, column: u16, row: u16) -> Vec2 {
        let side = self.side.max(1) as f32;
        let px = (column as f32 - self.origin_x as f32) + 0.5;
        // A row covers two pixels; its center sits on the boundary between them.
        let py = (row as f32 - self.origin_y as f32 + 0.5) * 2.0;
        Vec2::new(px / side * 2.0 - 1.0, 1.0 - py / side * 2.0)
    }
}
