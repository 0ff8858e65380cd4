//! Autumn leaves: larger, tumbling ovals with a wider sway.

use dewdrop_core::Vec2;
use rand::{Rng, RngCore};

use super::{Behavior, sway};
use crate::chars::LEAF_CHAR;
use crate::particle::{Particle, Variant};
use crate::profile::SpawnArea;
use crate::surface::Surface;

pub const BEHAVIOR: Behavior = Behavior {
    spawn,
    motion: sway,
    draw,
};

/// Minor radius as a fraction of the major radius.
const ASPECT: f32 = 0.6;

fn spawn(rng: &mut dyn RngCore, area: &SpawnArea) -> Particle {
    Particle {
        position: Vec2::new(area.x(rng), area.y(rng)),
        velocity: Vec2::new(rng.r#gen::<f32>() * 2.0 - 1.0, rng.r#gen::<f32>() * 1.5 + 1.0),
        size: rng.r#gen::<f32>() * 8.0 + 5.0,
        color: area.color(rng),
        rotation: rng.r#gen::<f32>() * 360.0,
        rotation_speed: rng.r#gen::<f32>() * 4.0 - 2.0,
        opacity: 1.0,
        variant: Variant::Leaf,
    }
}

fn draw(p: &Particle, surface: &mut Surface, _time_ms: f64) {
    surface.fill_ellipse(
        p.position,
        p.size,
        p.size * ASPECT,
        p.rotation,
        p.color,
        LEAF_CHAR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Placement, ThemeProfile};
    use dewdrop_core::{Rgba, Theme, Viewport};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let area = SpawnArea {
            viewport: Viewport::new(800.0, 600.0),
            placement: Placement::Top,
            palette: ThemeProfile::of(Theme::Autumn).palette,
        };
        for _ in 0..200 {
            let p = spawn(&mut rng, &area);
            assert_eq!(p.variant, Variant::Leaf);
            assert!((-1.0..1.0).contains(&p.velocity.x));
            assert!((1.0..2.5).contains(&p.velocity.y));
            assert!((5.0..13.0).contains(&p.size));
            assert!((-2.0..2.0).contains(&p.rotation_speed));
        }
    }

    #[test]
    fn test_rotation_turns_the_oval() {
        // A wide flat leaf spanning three cells horizontally...
        let mut flat = Surface::new(9, 9, 4, 4);
        let mut p = Particle {
            position: Vec2::new(18.0, 18.0),
            velocity: Vec2::ZERO,
            size: 6.0,
            color: Rgba::new(217, 119, 6, 0.8),
            rotation: 0.0,
            rotation_speed: 0.0,
            opacity: 1.0,
            variant: Variant::Leaf,
        };
        draw(&p, &mut flat, 0.0);
        assert!(flat.cell(3, 4).is_some_and(|c| c.glyph == LEAF_CHAR));
        assert!(flat.cell(4, 3).is_some_and(|c| c.glyph == ' '));

        // ...stands upright when rotated a quarter turn.
        let mut upright = Surface::new(9, 9, 4, 4);
        p.rotation = 90.0;
        draw(&p, &mut upright, 0.0);
        assert!(upright.cell(4, 3).is_some_and(|c| c.glyph == LEAF_CHAR));
        assert!(upright.cell(3, 4).is_some_and(|c| c.glyph == ' '));
    }
}
