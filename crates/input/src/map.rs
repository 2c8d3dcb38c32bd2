//! Mapping from terminal events to pointer input and commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::types::{PointerButton, PointerEvent, SquareLayout, Vec2};

/// Pointer activity in normalized space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// The pointer moved (with or without a button held).
    Moved(Vec2),
    /// A button went down.
    Pressed(PointerEvent),
}

/// Map a terminal mouse event through the square layout.
///
/// Releases and scroll events carry no pointer input.
pub fn handle_mouse_event(mouse: MouseEvent, layout: &SquareLayout) -> Option<PointerInput> {
    let position = layout.to_normalized(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(button) => Some(PointerInput::Pressed(PointerEvent {
            position,
            button: pointer_button(button),
        })),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(PointerInput::Moved(position)),
        _ => None,
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
    }
}

/// Check if key should abandon the current game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
