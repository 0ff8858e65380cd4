//! Winter snow: soft round flakes drifting slowly down.

use dewdrop_core::Vec2;
use rand::{Rng, RngCore};

use super::{Behavior, no_motion};
use crate::chars::{SNOW_CHARS, graded};
use crate::particle::{Particle, Variant};
use crate::profile::SpawnArea;
use crate::surface::Surface;

pub const BEHAVIOR: Behavior = Behavior {
    spawn,
    motion: no_motion,
    draw,
};

/// Largest flake radius a generator produces.
const MAX_RADIUS: f32 = 4.0;

fn spawn(rng: &mut dyn RngCore, area: &SpawnArea) -> Particle {
    Particle {
        position: Vec2::new(area.x(rng), area.y(rng)),
        velocity: Vec2::new(rng.r#gen::<f32>() * 0.5 - 0.25, rng.r#gen::<f32>() + 0.5),
        size: rng.r#gen::<f32>() * 3.0 + 1.0,
        color: area.color(rng),
        rotation: 0.0,
        rotation_speed: 0.0,
        opacity: rng.r#gen::<f32>() * 0.5 + 0.5,
        variant: Variant::Snow,
    }
}

fn draw(p: &Particle, surface: &mut Surface, _time_ms: f64) {
    let glyph = graded(SNOW_CHARS, p.size, MAX_RADIUS);
    surface.fill_circle(p.position, p.size, p.color, glyph);
}
