//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management.
//! It has **zero dependencies** on drawing, terminals, or input devices, making it:
//!
//! - **Deterministic**: Same clicks produce identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`coords`]: Mapping between cell indices and the normalized `[-1, +1]²` square
//! - [`board`]: `n x n` Noughts and Crosses board
//! - [`rules`]: Win detection over the `2n + 2` lines and the end-of-game announcement
//! - [`turn`]: Turn controller applying pointer clicks
//! - [`game_state`]: Board plus side to move
//! - [`connect_four`]: Connect 4 grid with gravity
//! - [`hangman`]: Hangman word masking and lives
//! - [`rng`]: Deterministic LCG for the console games
//!
//! # Game Rules
//!
//! - Crosses always move first, then the sides alternate
//! - A click outside the board or on an occupied cell is ignored
//! - A line (column, row or diagonal) filled by one side wins
//! - A full board without a winning line is a draw
//!
//! # Example
//!
//! ```
//! use tui_games_core::coords::cell_center;
//! use tui_games_core::GameState;
//! use tui_games_core::types::{CellIndex, Outcome, Player};
//!
//! let mut game = GameState::new(3);
//! for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
//!     game.click(cell_center(CellIndex::new(x, y), 3));
//! }
//! assert_eq!(game.outcome(), Outcome::Winner(Player::Crosses));
//! ```

pub mod board;
pub mod connect_four;
pub mod coords;
pub mod game_state;
pub mod hangman;
pub mod rng;
pub mod rules;
pub mod turn;

pub use tui_games_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use connect_four::{ConnectFour, ConnectFourOutcome, Disc};
pub use coords::{cell_bottom_left, cell_center, cell_hovered_by, cell_radius};
pub use game_state::GameState;
pub use hangman::{Guess, Hangman};
pub use rng::SimpleRng;
pub use rules::{announce, check_for_winner, outcome};
pub use turn::{change_player, try_to_play};
