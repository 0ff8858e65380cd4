//! Translation of terminal mouse events into pointer events.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use dewdrop_core::PointerEvent;

/// Pointer id reported for motion with no button held.
pub const HOVER_POINTER: u32 = 0;

fn button_pointer(button: MouseButton) -> u32 {
    match button {
        MouseButton::Left => 1,
        MouseButton::Right => 2,
        MouseButton::Middle => 3,
    }
}

/// Map a mouse event to a pointer event at the pixel center of its cell.
///
/// Scroll events have no pointer equivalent and map to `None`.
pub fn pointer_event(
    mouse: &MouseEvent,
    cell_width: u16,
    cell_height: u16,
) -> Option<PointerEvent> {
    let x = (f32::from(mouse.column) + 0.5) * f32::from(cell_width);
    let y = (f32::from(mouse.row) + 0.5) * f32::from(cell_height);
    match mouse.kind {
        MouseEventKind::Down(button) => Some(PointerEvent::down(button_pointer(button), x, y)),
        MouseEventKind::Drag(button) => Some(PointerEvent::moved(button_pointer(button), x, y)),
        MouseEventKind::Moved => Some(PointerEvent::moved(HOVER_POINTER, x, y)),
        MouseEventKind::Up(button) => Some(PointerEvent::up(button_pointer(button), x, y)),
        _ => None,
    }
}
