//! Particle field state management.

use dewdrop_core::{Theme, Viewport};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::particle::Particle;
use crate::profile::{Placement, Recycle, ThemeProfile};
use crate::surface::Surface;

/// How far past the sides or bottom a particle may travel before recycling.
const EXIT_MARGIN: f32 = 20.0;

/// The active particle population for one theme.
///
/// Changing the theme or the viewport rebuilds the whole population at once;
/// otherwise its size never changes.
#[derive(Debug)]
pub struct ParticleField {
    profile: &'static ThemeProfile,
    viewport: Viewport,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// A freshly filled field seeded from OS entropy.
    pub fn new(theme: Theme, viewport: Viewport) -> Self {
        Self::with_rng(theme, viewport, StdRng::from_entropy())
    }

    /// A field with a deterministic random sequence.
    pub fn with_seed(theme: Theme, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(theme, viewport, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(theme: Theme, viewport: Viewport, rng: StdRng) -> Self {
        let mut field = Self {
            profile: ThemeProfile::of(theme),
            viewport,
            particles: Vec::new(),
            rng,
        };
        field.reinitialize();
        field
    }

    /// Discard every particle and fill the viewport anew.
    fn reinitialize(&mut self) {
        let profile = self.profile;
        let viewport = self.viewport;
        let rng = &mut self.rng;
        self.particles = (0..profile.count)
            .map(|_| profile.spawn(&mut *rng, viewport, Placement::Anywhere))
            .collect();
        tracing::debug!(
            theme = %profile.theme,
            variant = profile.variant.name(),
            count = profile.count,
            width = viewport.width,
            height = viewport.height,
            "particle field rebuilt"
        );
    }

    /// Switch to another theme's profile. Returns `false` if it was already
    /// active, in which case the field is left untouched.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        if self.profile.theme == theme {
            return false;
        }
        self.profile = ThemeProfile::of(theme);
        self.reinitialize();
        true
    }

    /// Adopt new viewport dimensions. Returns `false` if unchanged.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if self.viewport == viewport {
            return false;
        }
        self.viewport = viewport;
        self.reinitialize();
        true
    }

    /// Advance every particle one frame and recycle the ones that left.
    ///
    /// Returns how many particles were replaced.
    pub fn step(&mut self) -> usize {
        if self.viewport.is_empty() {
            return 0;
        }
        let profile = self.profile;
        let viewport = self.viewport;
        let motion = profile.variant.behavior().motion;
        let mut replaced = 0;

        for p in &mut self.particles {
            p.advance();
            motion(p);

            match profile.recycle {
                Recycle::Wrap => wrap(p, viewport),
                Recycle::Respawn if has_exited(p, viewport) => {
                    *p = profile.spawn(&mut self.rng, viewport, Placement::Top);
                    replaced += 1;
                }
                Recycle::Respawn => {}
            }
        }
        replaced
    }

    /// Repaint `surface` with the current particles.
    pub fn draw(&self, surface: &mut Surface, time_ms: f64) {
        surface.clear();
        if self.viewport.is_empty() {
            return;
        }
        let draw = self.profile.variant.behavior().draw;
        for p in &self.particles {
            draw(p, surface, time_ms);
        }
    }

    pub fn theme(&self) -> Theme {
        self.profile.theme
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Whether a falling particle is past the bottom or either side.
fn has_exited(p: &Particle, viewport: Viewport) -> bool {
    p.position.y > viewport.height + EXIT_MARGIN
        || p.position.x < -EXIT_MARGIN
        || p.position.x > viewport.width + EXIT_MARGIN
}

/// Fold a particle that drifted off the viewport back onto it.
fn wrap(p: &mut Particle, viewport: Viewport) {
    if viewport.contains(p.position) {
        return;
    }
    p.position.x = p.position.x.rem_euclid(viewport.width);
    p.position.y = p.position.y.rem_euclid(viewport.height);
}
