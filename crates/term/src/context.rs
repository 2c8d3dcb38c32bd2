//! The terminal session loop.
//!
//! A [`Sketch`] is driven by [`TerminalContext::start`]: terminal events are
//! drained until the next tick, every pointer press collected so far is
//! delivered to the sketch, then one `update` draws the frame on a
//! [`PixelCanvas`] that is flushed to the terminal. The loop repeats every
//! `TICK_MS` until the sketch calls [`Canvas::stop`].

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use log::{debug, info};

use crate::canvas::Canvas;
use crate::input::{handle_mouse_event, should_quit, PointerHandler};
use crate::raster::PixelCanvas;
use crate::renderer::TerminalRenderer;
use crate::screen::Screen;
use crate::types::{PointerEvent, SquareLayout, Viewport, Window, TICK_MS};
use crate::view::{FrameView, STATUS_ROWS};

const HOLD_HINT: &str = "Press any key to continue.";

/// Frame callbacks of an interactive game.
pub trait Sketch {
    /// One pointer press, delivered before the next `update`.
    fn mouse_pressed(&mut self, event: PointerEvent);

    /// Draw one frame. Call `ctx.stop()` to end the loop after this frame.
    fn update(&mut self, ctx: &mut impl Canvas);

    /// Text shown on the status line under the square.
    fn status(&self) -> String {
        String::new()
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The sketch called `stop()`.
    Stopped,
    /// The user quit early.
    Abandoned,
}

/// Deliver `presses` in order, then run one `update`.
///
/// Returns whether the sketch asked to stop.
pub fn run_frame<S, C>(
    sketch: &mut S,
    ctx: &mut C,
    presses: impl IntoIterator<Item = PointerEvent>,
) -> bool
where
    S: Sketch,
    C: Canvas,
{
    for press in presses {
        sketch.mouse_pressed(press);
    }
    sketch.update(ctx);
    ctx.is_stopped()
}

pub struct TerminalContext {
    window: Window,
    canvas: PixelCanvas,
    pointer: PointerHandler,
    view: FrameView,
    screen: Screen,
    layout: SquareLayout,
    viewport: Viewport,
    too_small: bool,
}

impl TerminalContext {
    /// `window` only names the session; the square is fitted to the terminal.
    pub fn new(window: Window) -> Self {
        Self {
            window,
            canvas: PixelCanvas::new(0, 0),
            pointer: PointerHandler::new(),
            view: FrameView,
            screen: Screen::default(),
            layout: SquareLayout::fit(Viewport::new(0, 0), STATUS_ROWS),
            viewport: Viewport::new(0, 0),
            too_small: false,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Run `sketch` until it stops or the user quits.
    pub fn start<S: Sketch>(&mut self, sketch: &mut S) -> Result<SessionEnd> {
        let mut term = TerminalRenderer::new();
        term.enter(&self.window.title)?;
        info!(
            "session '{}' started ({}x{})",
            self.window.title, self.window.width, self.window.height
        );

        let result = self.run(&mut term, sketch);

        // Always try to restore terminal state.
        let _ = term.exit();
        if let Ok(end) = &result {
            info!("session '{}' ended: {:?}", self.window.title, end);
        }
        result
    }

    fn run<S: Sketch>(
        &mut self,
        term: &mut TerminalRenderer,
        sketch: &mut S,
    ) -> Result<SessionEnd> {
        let tick_duration = Duration::from_millis(TICK_MS as u64);
        self.refit();
        let mut last_tick = Instant::now();

        loop {
            // Input with timeout until next tick.
            let timeout = tick_duration
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                        return Ok(SessionEnd::Abandoned);
                    }
                    Event::Mouse(mouse) => {
                        if let Some(input) = handle_mouse_event(mouse, &self.layout) {
                            if !self.pointer.handle(input) {
                                debug!("pointer press dropped: too many in one frame");
                            }
                        }
                    }
                    Event::Resize(..) => term.invalidate(),
                    _ => {}
                }
            }

            // Frame.
            if last_tick.elapsed() >= tick_duration {
                last_tick = Instant::now();
                self.refit();

                let presses = self.pointer.drain_presses();
                self.canvas.resize(self.layout.side, self.layout.side);
                self.canvas.set_mouse(self.pointer.position());
                let stopped = run_frame(sketch, &mut self.canvas, presses);

                self.present(term, &sketch.status())?;
                if stopped {
                    return self.hold(term, sketch);
                }
            }
        }
    }

    /// Keep the final frame with its status until any key or click.
    fn hold<S: Sketch>(
        &mut self,
        term: &mut TerminalRenderer,
        sketch: &S,
    ) -> Result<SessionEnd> {
        let status = format!("{} {}", sketch.status(), HOLD_HINT);
        self.present(term, status.trim_start())?;
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(SessionEnd::Stopped)
                }
                Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                    return Ok(SessionEnd::Stopped)
                }
                Event::Resize(..) => {
                    // Terminals clear on resize; repaint the held frame.
                    term.invalidate();
                    self.present(term, status.trim_start())?;
                }
                _ => {}
            }
        }
    }

    fn refit(&mut self) {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.layout = SquareLayout::fit(viewport, STATUS_ROWS);
        let too_small = !FrameView::fits(&self.layout);
        if too_small && !self.too_small {
            info!("terminal {}x{} is too small to draw the board", w, h);
        }
        self.too_small = too_small;
    }

    fn present(&mut self, term: &mut TerminalRenderer, status: &str) -> Result<()> {
        self.view.render_into(
            &self.canvas,
            self.layout,
            self.viewport,
            status,
            &mut self.screen,
        );
        term.present(&self.screen)
    }
}
