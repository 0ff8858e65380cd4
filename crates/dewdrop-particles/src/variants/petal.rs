//! Spring petals: small pink ovals that flutter down and spin.

use dewdrop_core::Vec2;
use rand::{Rng, RngCore};

use super::{Behavior, sway};
use crate::chars::PETAL_CHAR;
use crate::particle::{Particle, Variant};
use crate::profile::SpawnArea;
use crate::surface::Surface;

pub const BEHAVIOR: Behavior = Behavior {
    spawn,
    motion: sway,
    draw,
};

/// Minor radius as a fraction of the major radius.
const ASPECT: f32 = 0.5;

fn spawn(rng: &mut dyn RngCore, area: &SpawnArea) -> Particle {
    Particle {
        position: Vec2::new(area.x(rng), area.y(rng)),
        velocity: Vec2::new(rng.r#gen::<f32>() - 0.5, rng.r#gen::<f32>() + 1.0),
        size: rng.r#gen::<f32>() * 5.0 + 3.0,
        color: area.color(rng),
        rotation: rng.r#gen::<f32>() * 360.0,
        rotation_speed: rng.r#gen::<f32>() * 2.0 - 1.0,
        opacity: 1.0,
        variant: Variant::Petal,
    }
}

fn draw(p: &Particle, surface: &mut Surface, _time_ms: f64) {
    surface.fill_ellipse(
        p.position,
        p.size,
        p.size * ASPECT,
        p.rotation,
        p.color,
        PETAL_CHAR,
    );
}
