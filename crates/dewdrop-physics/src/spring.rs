//! Damped spring integration.

use dewdrop_core::Vec2;

/// How strongly position is pulled toward the target each frame.
pub const TENSION: f32 = 0.08;

/// Velocity retained after each frame.
pub const FRICTION: f32 = 0.85;

/// A per-frame spring pulling a point toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub tension: f32,
    pub friction: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            tension: TENSION,
            friction: FRICTION,
        }
    }
}

impl Spring {
    /// Advance one frame: accelerate toward `target`, damp, then move.
    pub fn integrate(&self, position: &mut Vec2, velocity: &mut Vec2, target: Vec2) {
        velocity.x += (target.x - position.x) * self.tension;
        velocity.y += (target.y - position.y) * self.tension;
        velocity.x *= self.friction;
        velocity.y *= self.friction;
        position.x += velocity.x;
        position.y += velocity.y;
    }
}
