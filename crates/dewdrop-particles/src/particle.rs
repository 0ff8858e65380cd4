//! A single particle and its variant tag.

use dewdrop_core::{Rgba, Vec2};

/// The closed set of particle kinds, one per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Petal,
    Rain,
    Leaf,
    Snow,
    Star,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Petal,
        Variant::Rain,
        Variant::Leaf,
        Variant::Snow,
        Variant::Star,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Petal => "petal",
            Variant::Rain => "rain",
            Variant::Leaf => "leaf",
            Variant::Snow => "snow",
            Variant::Star => "star",
        }
    }
}

/// One particle. Positions and velocities are in pixels and pixels/frame,
/// rotation in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Rgba,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub opacity: f32,
    pub variant: Variant,
}

impl Particle {
    /// Apply one frame of linear motion and spin.
    pub fn advance(&mut self) {
        self.position = self.position + self.velocity;
        self.rotation += self.rotation_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() {
        let mut p = Particle {
            position: Vec2::new(10.0, 20.0),
            velocity: Vec2::new(-1.0, 2.5),
            size: 3.0,
            color: Rgba::WHITE,
            rotation: 350.0,
            rotation_speed: 15.0,
            opacity: 1.0,
            variant: Variant::Leaf,
        };
        p.advance();
        assert_eq!(p.position, Vec2::new(9.0, 22.5));
        assert_eq!(p.rotation, 365.0);
        assert_eq!(p.variant, Variant::Leaf);
    }

    #[test]
    fn test_variant_names() {
        let names: Vec<&str> = Variant::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(names, ["petal", "rain", "leaf", "snow", "star"]);
    }
}
