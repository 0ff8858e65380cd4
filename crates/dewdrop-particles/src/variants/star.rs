//! Night stars: nearly still points that twinkle over time.

use dewdrop_core::{Rgba, Vec2};
use rand::{Rng, RngCore};

use super::{Behavior, no_motion};
use crate::chars::{STAR_CHARS, graded};
use crate::particle::{Particle, Variant};
use crate::profile::SpawnArea;
use crate::surface::Surface;

pub const BEHAVIOR: Behavior = Behavior {
    spawn,
    motion: no_motion,
    draw,
};

/// Stars are scattered over the whole sky no matter the placement.
fn spawn(rng: &mut dyn RngCore, area: &SpawnArea) -> Particle {
    let vp = area.viewport;
    Particle {
        position: Vec2::new(rng.r#gen::<f32>() * vp.width, rng.r#gen::<f32>() * vp.height),
        velocity: Vec2::new(
            rng.r#gen::<f32>() * 0.05 - 0.025,
            rng.r#gen::<f32>() * 0.05 - 0.025,
        ),
        size: rng.r#gen::<f32>() * 1.5,
        color: area.color(rng).with_alpha(rng.r#gen()),
        rotation: 0.0,
        rotation_speed: rng.r#gen::<f32>() * 0.02,
        opacity: rng.r#gen(),
        variant: Variant::Star,
    }
}

/// Brightness in `0.0..=1.0` of a star at horizontal position `x`.
pub fn twinkle(time_ms: f64, x: f32) -> f32 {
    (time_ms * 0.001 + f64::from(x)).sin().abs() as f32
}

fn draw(p: &Particle, surface: &mut Surface, time_ms: f64) {
    let alpha = twinkle(time_ms, p.position.x);
    let glyph = graded(STAR_CHARS, alpha, 1.0);
    surface.fill_circle(p.position, p.size, Rgba::WHITE.with_alpha(alpha), glyph);
}
