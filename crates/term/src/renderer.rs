//! Flushes screens to the real terminal.
//!
//! The renderer remembers the last screen it showed and only rewrites the
//! spans of glyphs that changed since. Colors are tracked separately for
//! foreground and background: neighbouring half blocks often share one of
//! the two, so only the other needs a new escape sequence.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, event, queue};

use crate::screen::{Glyph, Rgb, Screen};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: Option<Screen>,
    bytes: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            bytes: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen and mouse reporting, titled `title`.
    pub fn enter(&mut self, title: &str) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.shown = None;
        self.bytes.clear();
        queue!(
            self.bytes,
            terminal::EnterAlternateScreen,
            terminal::SetTitle(title),
            event::EnableMouseCapture,
            cursor::Hide,
            terminal::DisableLineWrap,
        )?;
        self.flush()
    }

    /// Undo everything `enter` did.
    pub fn exit(&mut self) -> Result<()> {
        self.bytes.clear();
        queue!(
            self.bytes,
            ResetColor,
            event::DisableMouseCapture,
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen,
        )?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw everything on the next `present`.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Bring the terminal in line with `screen`.
    pub fn present(&mut self, screen: &Screen) -> Result<()> {
        self.bytes.clear();
        let prev = self.shown.as_ref().filter(|shown| shown.same_shape(screen));
        encode_frame(prev, screen, &mut self.bytes)?;
        self.flush()?;
        match &mut self.shown {
            Some(shown) => shown.clone_from(screen),
            None => self.shown = Some(screen.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.bytes)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Append the escape sequences that turn `prev` into `next`.
///
/// Without a previous screen the terminal is cleared and every glyph drawn.
pub fn encode_frame(prev: Option<&Screen>, next: &Screen, out: &mut Vec<u8>) -> Result<()> {
    if prev.is_none() {
        queue!(out, terminal::Clear(ClearType::All))?;
    }
    let mut pen = Pen::default();
    for y in 0..next.height() {
        let row = next.row(y);
        let old = prev.map_or(&[][..], |prev| prev.row(y));
        for span in changed_spans(old, row) {
            queue!(out, cursor::MoveTo(span.start as u16, y))?;
            for glyph in &row[span] {
                pen.draw(out, *glyph)?;
            }
        }
    }
    queue!(out, ResetColor)?;
    Ok(())
}

/// Runs of glyphs in `new` that differ from `old`.
///
/// A glyph with no counterpart in `old` counts as changed.
fn changed_spans<'a>(old: &'a [Glyph], new: &'a [Glyph]) -> impl Iterator<Item = Range<usize>> + 'a {
    let changed = move |x: usize| old.get(x) != Some(&new[x]);
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < new.len() && !changed(x) {
            x += 1;
        }
        if x == new.len() {
            return None;
        }
        let start = x;
        while x < new.len() && changed(x) {
            x += 1;
        }
        Some(start..x)
    })
}

/// The colors last sent to the terminal.
#[derive(Debug, Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
}

impl Pen {
    fn draw(&mut self, out: &mut Vec<u8>, glyph: Glyph) -> io::Result<()> {
        // A space shows no foreground.
        if glyph.ch != ' ' && self.fg != Some(glyph.fg) {
            queue!(out, SetForegroundColor(glyph.fg.into()))?;
            self.fg = Some(glyph.fg);
        }
        if self.bg != Some(glyph.bg) {
            queue!(out, SetBackgroundColor(glyph.bg.into()))?;
            self.bg = Some(glyph.bg);
        }
        queue!(out, Print(glyph.ch))
    }
}
