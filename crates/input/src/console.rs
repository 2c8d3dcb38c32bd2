//! Line-based console input for the menu and the text games.
//!
//! Every reader returns `Ok(None)` at end of input so callers can wind down
//! instead of spinning on an exhausted stdin.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Hint printed when a line does not parse.
pub const INVALID_INPUT_HINT: &str = "Please enter a valid value!";

/// Read one non-empty line, trimmed.
pub fn read_line<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
    }
}

/// Read lines until one parses as `T`, printing a hint after each failure.
pub fn get_input_from_user<T, R, W>(input: &mut R, output: &mut W) -> io::Result<Option<T>>
where
    T: FromStr,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    while let Some(line) = read_line(input)? {
        match line.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => {
                writeln!(output, "{INVALID_INPUT_HINT}")?;
                output.flush()?;
            }
        }
    }
    Ok(None)
}

/// First character of the next non-empty line; the rest of the line is dropped.
pub fn read_command<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<char>> {
    Ok(read_line(input)?.and_then(|line| line.chars().next()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_after_retries() {
        let mut input = "\nabc\n  42 \n".as_bytes();
        let mut output = Vec::new();
        let value: Option<u32> = get_input_from_user(&mut input, &mut output).unwrap();
        assert_eq!(value, Some(42));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{INVALID_INPUT_HINT}\n")
        );
    }

    #[test]
    fn test_end_of_input() {
        let mut input = "oops\n".as_bytes();
        let mut output = Vec::new();
        let value: Option<i32> = get_input_from_user(&mut input, &mut output).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_read_command_takes_first_char() {
        let mut input = "\n  3abc\nq\n".as_bytes();
        assert_eq!(read_command(&mut input).unwrap(), Some('3'));
        assert_eq!(read_command(&mut input).unwrap(), Some('q'));
        assert_eq!(read_command(&mut input).unwrap(), None);
    }
}
