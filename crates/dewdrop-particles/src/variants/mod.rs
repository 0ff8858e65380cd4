//! Per-variant generator, motion and drawing, looked up by [`Variant`] tag.

use rand::RngCore;

use crate::particle::{Particle, Variant};
use crate::profile::SpawnArea;
use crate::surface::Surface;

mod leaf;
mod petal;
mod rain;
mod snow;
mod star;

/// The three operations every variant implements.
#[derive(Debug)]
pub struct Behavior {
    /// Produce one fresh particle.
    pub spawn: fn(&mut dyn RngCore, &SpawnArea) -> Particle,
    /// Extra per-frame motion on top of velocity and spin.
    pub motion: fn(&mut Particle),
    /// Paint the particle; `time_ms` drives time-based effects.
    pub draw: fn(&Particle, &mut Surface, f64),
}

/// Indexed by `Variant as usize`.
static BEHAVIORS: [Behavior; 5] = [
    petal::BEHAVIOR,
    rain::BEHAVIOR,
    leaf::BEHAVIOR,
    snow::BEHAVIOR,
    star::BEHAVIOR,
];

impl Variant {
    pub fn behavior(self) -> &'static Behavior {
        &BEHAVIORS[self as usize]
    }
}

/// Horizontal sway for things that flutter as they fall.
fn sway(p: &mut Particle) {
    p.position.x += (p.position.y * 0.01).sin() * 0.5;
}

fn no_motion(_: &mut Particle) {}
