//! Hangman rules.

use arrayvec::ArrayVec;

/// Wrong guesses allowed before the game is lost.
pub const MAX_LIVES: u8 = 10;

/// Words the secret is drawn from.
pub const WORDS: &[&str] = &[
    "code", "crous", "imac", "school", "programming", "rust", "terminal", "noughts", "crosses",
    "keyboard", "board", "pointer",
];

/// What a single guess did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    /// The letter is in the word.
    Hit,
    /// The letter is not in the word; one life lost.
    Miss,
    /// The letter was already tried; nothing changes.
    AlreadyTried,
    /// Not an ASCII letter.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hangman {
    word: String,
    tried: ArrayVec<char, 26>,
    lives: u8,
}

impl Hangman {
    /// Start a game on `word` (lowercased).
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_ascii_lowercase(),
            tried: ArrayVec::new(),
            lives: MAX_LIVES,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Letters tried so far, in order.
    pub fn tried(&self) -> &[char] {
        &self.tried
    }

    pub fn guess(&mut self, letter: char) -> Guess {
        if !letter.is_ascii_alphabetic() {
            return Guess::Invalid;
        }
        let letter = letter.to_ascii_lowercase();
        if self.tried.contains(&letter) {
            return Guess::AlreadyTried;
        }
        self.tried.push(letter);
        if self.word.contains(letter) {
            Guess::Hit
        } else {
            self.lives = self.lives.saturating_sub(1);
            Guess::Miss
        }
    }

    /// The word with untried letters replaced by `_`.
    pub fn masked(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.tried.contains(&c) { c } else { '_' })
            .collect()
    }

    pub fn is_won(&self) -> bool {
        self.word.chars().all(|c| self.tried.contains(&c))
    }

    pub fn is_lost(&self) -> bool {
        self.lives == 0
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }
}
