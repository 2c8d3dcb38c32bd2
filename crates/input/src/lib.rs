//! Terminal input module.
//!
//! This module is intentionally independent of any drawing code. It maps
//! `crossterm` mouse events into pointer input in normalized space, keeps the
//! pointer state between frames, and provides the line-based console helpers
//! used by the menu and the text games.

pub mod console;
pub mod handler;
pub mod map;

pub use tui_games_types as types;

pub use console::{get_input_from_user, read_command, read_line};
pub use handler::PointerHandler;
pub use map::{handle_mouse_event, should_quit, PointerInput};
