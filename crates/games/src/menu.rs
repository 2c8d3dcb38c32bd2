//! The game menu.
//!
//! Commands are single characters kept in key order. The menu loops until
//! `q` is entered or the input runs out.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::{info, warn};

use crate::core::SimpleRng;
use crate::input::read_command;
use crate::types::DEFAULT_BOARD_SIZE;
use crate::{connect_four, guess_the_number, hangman, noughts_and_crosses};

/// Command that leaves the menu.
pub const QUIT: char = 'q';

pub type PlayFn = Box<dyn FnMut(&mut dyn BufRead, &mut dyn Write) -> Result<()>>;

/// A named entry point.
pub struct Game {
    pub name: String,
    play: PlayFn,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game").field("name", &self.name).finish()
    }
}

/// Settings shared by the built-in games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuConfig {
    pub board_size: usize,
    pub seed: Option<u32>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            seed: None,
        }
    }
}

impl MenuConfig {
    pub fn rng(&self) -> SimpleRng {
        self.seed.map_or_else(SimpleRng::from_clock, SimpleRng::new)
    }
}

#[derive(Debug, Default)]
pub struct Menu {
    games: BTreeMap<char, Game>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four built-in games.
    pub fn with_builtin_games(config: MenuConfig) -> Self {
        let mut guess_rng = config.rng();
        let mut hangman_rng = config.rng();
        Self::new()
            .with_game('1', "Guess the Number", move |input, output| {
                guess_the_number::play(&mut guess_rng, input, output).map(drop)
            })
            .with_game('2', "Hangman", move |input, output| {
                hangman::play(&mut hangman_rng, input, output).map(drop)
            })
            .with_game('3', "Noughts and Crosses", move |_, output| {
                noughts_and_crosses::play(config.board_size, output).map(drop)
            })
            .with_game('4', "Connect 4", |_, output| {
                connect_four::play(output).map(drop)
            })
    }

    /// Register `play` under `command`, replacing any previous entry.
    pub fn with_game<F>(mut self, command: char, name: impl Into<String>, play: F) -> Self
    where
        F: FnMut(&mut dyn BufRead, &mut dyn Write) -> Result<()> + 'static,
    {
        self.games.insert(
            command,
            Game {
                name: name.into(),
                play: Box::new(play),
            },
        );
        self
    }

    pub fn get(&self, command: char) -> Option<&Game> {
        self.games.get(&command)
    }

    pub fn commands(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.games.iter().map(|(c, g)| (*c, g.name.as_str()))
    }

    pub fn show_the_list_of_commands<W: Write + ?Sized>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "What do you want to do?")?;
        for (command, name) in self.commands() {
            writeln!(output, "{command}: Play \"{name}\"")?;
        }
        writeln!(output, "{QUIT}: Quit")?;
        output.flush()
    }

    /// Run the game registered under `command`. Returns false if there is none.
    pub fn play(
        &mut self,
        command: char,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<bool> {
        let Some(game) = self.games.get_mut(&command) else {
            return Ok(false);
        };
        info!("starting {}", game.name);
        (game.play)(input, output)?;
        Ok(true)
    }

    /// Show the menu until the user quits or the input ends.
    pub fn run(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        loop {
            self.show_the_list_of_commands(output)?;
            let Some(command) = read_command(input)? else {
                info!("input closed, leaving the menu");
                return Ok(());
            };
            if command == QUIT {
                return Ok(());
            }
            match self.play(command, &mut *input, &mut *output) {
                Ok(true) => {}
                Ok(false) => writeln!(output, "Sorry I don't know that command!")?,
                Err(err) => {
                    warn!("command '{command}' failed: {err:#}");
                    writeln!(output, "Game stopped: {err}")?;
                }
            }
        }
    }
}
