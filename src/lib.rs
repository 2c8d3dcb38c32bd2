//! TUI Games (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so binaries, tests and
//! benches can use `tui_games::{core, games, input, term, types}`.

pub mod cli;

pub use tui_games_core as core;
pub use tui_games_games as games;
pub use tui_games_input as input;
pub use tui_games_term as term;
pub use tui_games_types as types;
