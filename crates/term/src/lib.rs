//! Terminal rendering context.
//!
//! Games draw through the [`Canvas`] capability on the normalized square
//! `[-1, +1]²`. In the terminal that square is rasterized by [`PixelCanvas`]
//! at two pixels per character cell (upper half blocks), composed into a
//! [`Screen`] by [`FrameView`] and flushed by [`TerminalRenderer`] as a diff
//! against the previous frame. [`RecordingCanvas`] stands in for the terminal
//! in tests.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing code unaware of the terminal
//! - Square cells despite the 1:2 aspect ratio of character cells

pub mod canvas;
pub mod context;
pub mod draw;
pub mod raster;
pub mod record;
pub mod renderer;
pub mod screen;
pub mod view;

pub use tui_games_core as core;
pub use tui_games_input as input;
pub use tui_games_types as types;

pub use canvas::{Canvas, Shape, Style};
pub use context::{run_frame, SessionEnd, Sketch, TerminalContext};
pub use raster::PixelCanvas;
pub use record::{DrawCommand, RecordingCanvas};
pub use renderer::{encode_frame, TerminalRenderer};
pub use screen::{Glyph, Rgb, Screen, HALF_BLOCK};
pub use view::FrameView;
