//! The games behind the menu.
//!
//! - [`noughts_and_crosses`] and [`connect_four`] run in the terminal
//!   session loop and are played with the mouse
//! - [`guess_the_number`] and [`hangman`] are line-based console games
//! - [`menu`] dispatches single-character commands to them

pub mod connect_four;
pub mod guess_the_number;
pub mod hangman;
pub mod menu;
pub mod noughts_and_crosses;

pub use tui_games_core as core;
pub use tui_games_input as input;
pub use tui_games_term as term;
pub use tui_games_types as types;

pub use connect_four::ConnectFourSketch;
pub use menu::{Menu, MenuConfig};
pub use noughts_and_crosses::NoughtsAndCrosses;
