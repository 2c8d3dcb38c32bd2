//! Hangman, played on the console.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, info};

use crate::core::hangman::WORDS;
use crate::core::{Guess, Hangman, SimpleRng};
use crate::input::console::{read_command, INVALID_INPUT_HINT};

/// Play one round on a word drawn from `rng`. Returns whether the word was
/// found; `None` if the input ran out first.
pub fn play<R, W>(rng: &mut SimpleRng, input: &mut R, output: &mut W) -> Result<Option<bool>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let word = rng.choose(WORDS).copied().unwrap_or("rust");
    debug!("hangman word is {word}");
    play_word(word, input, output)
}

/// Play one round on `word`.
pub fn play_word<R, W>(word: &str, input: &mut R, output: &mut W) -> Result<Option<bool>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut game = Hangman::new(word);
    while !game.is_over() {
        writeln!(output, "{}", game.masked())?;
        writeln!(output, "Lives: {}. Guess a letter:", game.lives())?;
        output.flush()?;

        let Some(letter) = read_command(input)? else {
            return Ok(None);
        };
        match game.guess(letter) {
            Guess::Hit | Guess::Miss => {}
            Guess::AlreadyTried => writeln!(output, "You already tried '{letter}'!")?,
            Guess::Invalid => writeln!(output, "{INVALID_INPUT_HINT}")?,
        }
    }

    let won = game.is_won();
    if won {
        writeln!(output, "You won! The word was {}", game.word())?;
    } else {
        writeln!(output, "You lost! The word was {}", game.word())?;
    }
    info!("hangman over, won: {won}");
    Ok(Some(won))
}
