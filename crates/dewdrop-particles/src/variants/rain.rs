//! Summer rain: fast, straight, thin streaks.

use dewdrop_core::Vec2;
use rand::{Rng, RngCore};

use super::{Behavior, no_motion};
use crate::chars::RAIN_CHAR;
use crate::particle::{Particle, Variant};
use crate::profile::SpawnArea;
use crate::surface::Surface;

pub const BEHAVIOR: Behavior = Behavior {
    spawn,
    motion: no_motion,
    draw,
};

fn spawn(rng: &mut dyn RngCore, area: &SpawnArea) -> Particle {
    Particle {
        position: Vec2::new(area.x(rng), area.y(rng)),
        velocity: Vec2::new(0.0, rng.r#gen::<f32>() * 10.0 + 15.0),
        // Streak length.
        size: rng.r#gen::<f32>() * 2.0 + 10.0,
        color: area.color(rng),
        rotation: 0.0,
        rotation_speed: 0.0,
        opacity: rng.r#gen::<f32>() * 0.3 + 0.1,
        variant: Variant::Rain,
    }
}

fn draw(p: &Particle, surface: &mut Surface, _time_ms: f64) {
    surface.stroke_vline(p.position, p.size, p.color, RAIN_CHAR);
}
