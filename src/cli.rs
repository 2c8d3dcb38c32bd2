//! Command-line options.

use clap::{Parser, ValueEnum};
use env_logger::Env;

use crate::games::MenuConfig;
use crate::types::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Games that can be started directly, skipping the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameChoice {
    GuessTheNumber,
    Hangman,
    NoughtsAndCrosses,
    ConnectFour,
}

impl GameChoice {
    /// Menu command of the game.
    pub fn command(self) -> char {
        match self {
            GameChoice::GuessTheNumber => '1',
            GameChoice::Hangman => '2',
            GameChoice::NoughtsAndCrosses => '3',
            GameChoice::ConnectFour => '4',
        }
    }
}

/// A few turn-based games for the terminal.
#[derive(Debug, Parser)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Side length of the Noughts and Crosses board
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_BOARD_SIZE,
        value_parser = parse_board_size,
    )]
    pub board_size: usize,

    /// Seed for the random games (defaults to the clock)
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Start this game instead of showing the menu
    #[arg(value_enum, short, long)]
    pub game: Option<GameChoice>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    pub fn menu_config(&self) -> MenuConfig {
        MenuConfig {
            board_size: self.board_size,
            seed: self.seed,
        }
    }

    /// Set up logging to stderr. `RUST_LOG` wins over `--debug`.
    pub fn init_logging(&self) {
        let default_filter = if self.debug { "debug" } else { "warn" };
        env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
    }
}

fn parse_board_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "board size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}"
        ))
    }
}
