use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::Intent;

/// Map a mouse event to a user intent: clicks pick a row, the wheel moves the selection
pub fn map_mouse_to_intent(mouse: &MouseEvent) -> Option<Intent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Intent::SelectRow(mouse.row)),
        MouseEventKind::ScrollUp => Some(Intent::MoveUp),
        MouseEventKind::ScrollDown => Some(Intent::MoveDown),
        _ => None,
    }
}
