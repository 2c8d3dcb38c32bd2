//! Guess the Number, played on the console.

use std::cmp::Ordering;
use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, info};

use crate::core::SimpleRng;
use crate::input::get_input_from_user;

pub const LOWEST: u32 = 0;
pub const HIGHEST: u32 = 100;

/// Play until the secret is found. Returns the number of guesses, or `None`
/// if the input ran out first.
pub fn play<R, W>(rng: &mut SimpleRng, input: &mut R, output: &mut W) -> Result<Option<u32>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let secret = rng.next_inclusive(LOWEST, HIGHEST);
    debug!("secret number is {secret}");
    writeln!(output, "Guess the number between {LOWEST} and {HIGHEST}")?;
    output.flush()?;

    let mut attempts = 0;
    while let Some(guess) = get_input_from_user::<u32, _, _>(input, output)? {
        attempts += 1;
        match guess.cmp(&secret) {
            Ordering::Less => writeln!(output, "Greater")?,
            Ordering::Greater => writeln!(output, "Smaller")?,
            Ordering::Equal => {
                writeln!(output, "Congrats, you won!")?;
                info!("number guessed in {attempts} attempts");
                return Ok(Some(attempts));
            }
        }
        output.flush()?;
    }
    Ok(None)
}
