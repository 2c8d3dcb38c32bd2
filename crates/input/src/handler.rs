//! Pointer state collected between two frames.
//!
//! The event loop feeds every pointer input here as it arrives; the frame
//! callback then reads the latest position and drains the presses, so every
//! press that arrived before a frame is applied before that frame draws.

use arrayvec::ArrayVec;

use crate::map::PointerInput;
use crate::types::{PointerEvent, Vec2};

/// Presses kept between two frames; extra presses in the same frame are dropped.
pub const MAX_PENDING_PRESSES: usize = 16;

#[derive(Debug, Clone)]
pub struct PointerHandler {
    position: Vec2,
    pending: ArrayVec<PointerEvent, MAX_PENDING_PRESSES>,
}

impl PointerHandler {
    /// Pointer parked outside the square until the first event arrives.
    pub fn new() -> Self {
        Self {
            position: Vec2::splat(f32::INFINITY),
            pending: ArrayVec::new(),
        }
    }

    /// Latest pointer position in normalized space.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Record one pointer input. Returns false if a press had to be dropped.
    pub fn handle(&mut self, input: PointerInput) -> bool {
        match input {
            PointerInput::Moved(position) => {
                self.position = position;
                true
            }
            PointerInput::Pressed(event) => {
                self.position = event.position;
                self.pending.try_push(event).is_ok()
            }
        }
    }

    /// Take the presses received since the last call, oldest first.
    pub fn drain_presses(&mut self) -> ArrayVec<PointerEvent, MAX_PENDING_PRESSES> {
        std::mem::take(&mut self.pending)
    }
}

impl Default for PointerHandler {
    fn default() -> Self {
        Self::new()
    }
}
