//! Pointer input events.

use crate::Vec2;

/// Identifies one pointer (mouse button, touch contact, pen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// A pointer event in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub id: PointerId,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn down(id: u32, x: f32, y: f32) -> Self {
        Self::new(PointerKind::Down, id, x, y)
    }

    pub fn moved(id: u32, x: f32, y: f32) -> Self {
        Self::new(PointerKind::Move, id, x, y)
    }

    pub fn up(id: u32, x: f32, y: f32) -> Self {
        Self::new(PointerKind::Up, id, x, y)
    }

    fn new(kind: PointerKind, id: u32, x: f32, y: f32) -> Self {
        Self {
            kind,
            id: PointerId(id),
            position: Vec2::new(x, y),
        }
    }
}
