//! Seasonal particle field for dewdrop.
//!
//! A [`ParticleField`] owns a fixed-size population of particles whose look
//! and motion come from the active [`Theme`](dewdrop_core::Theme)'s
//! [`ThemeProfile`]. Each frame it is stepped once and drawn onto a
//! [`Surface`], a pixel-addressed raster backed by terminal cells.

mod chars;
mod field;
mod particle;
mod profile;
mod surface;
mod variants;

pub use field::ParticleField;
pub use particle::{Particle, Variant};
pub use profile::{Placement, Recycle, SpawnArea, ThemeProfile};
pub use surface::{Cell, Surface};
