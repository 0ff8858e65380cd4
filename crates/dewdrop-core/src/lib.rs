//! Core types shared by the dewdrop crates.
//!
//! The simulations in `dewdrop-physics` and `dewdrop-particles` only see the
//! values defined here: the active [`Theme`], the [`Viewport`] they run in,
//! the overlay [`DropSize`] and the [`PointerEvent`] stream.

mod color;
mod geometry;
mod input;
mod theme;

pub use color::Rgba;
pub use geometry::{Vec2, Viewport};
pub use input::{PointerEvent, PointerId, PointerKind};
pub use theme::{DropSize, Theme, UnknownTheme};
