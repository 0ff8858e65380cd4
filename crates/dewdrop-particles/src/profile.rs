//! Per-theme particle profiles.

use dewdrop_core::{Rgba, Theme, Viewport};
use rand::{Rng, RngCore};

use crate::particle::{Particle, Variant};

/// What happens to a particle that leaves the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recycle {
    /// Replace it with a fresh particle entering from the top.
    Respawn,
    /// Keep it and wrap its coordinates around the viewport.
    Wrap,
}

/// Where a newly generated particle is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Anywhere in the viewport; used when filling a new field.
    Anywhere,
    /// Just above the top edge; used for replacements.
    Top,
}

/// Vertical position of replacement particles.
pub const SPAWN_Y: f32 = -20.0;

/// Everything a generator needs to produce one particle.
#[derive(Debug, Clone, Copy)]
pub struct SpawnArea {
    pub viewport: Viewport,
    pub placement: Placement,
    pub palette: &'static [Rgba],
}

impl SpawnArea {
    /// Random x across the viewport width.
    pub fn x(&self, rng: &mut dyn RngCore) -> f32 {
        rng.r#gen::<f32>() * self.viewport.width
    }

    /// Random y for an initial fill, [`SPAWN_Y`] for a replacement.
    pub fn y(&self, rng: &mut dyn RngCore) -> f32 {
        match self.placement {
            Placement::Anywhere => rng.r#gen::<f32>() * self.viewport.height,
            Placement::Top => SPAWN_Y,
        }
    }

    /// Random color from the palette.
    pub fn color(&self, rng: &mut dyn RngCore) -> Rgba {
        if self.palette.is_empty() {
            return Rgba::WHITE;
        }
        self.palette[rng.gen_range(0..self.palette.len())]
    }
}

/// How one theme populates its particle field.
#[derive(Debug)]
pub struct ThemeProfile {
    pub theme: Theme,
    /// Population size, constant for the whole session.
    pub count: usize,
    pub variant: Variant,
    pub palette: &'static [Rgba],
    pub recycle: Recycle,
}

const SPRING_PALETTE: &[Rgba] = &[
    Rgba::new(255, 183, 178, 0.8),
    Rgba::new(255, 218, 218, 0.8),
    Rgba::new(255, 255, 255, 0.6),
];

const SUMMER_PALETTE: &[Rgba] = &[Rgba::new(173, 216, 230, 0.5)];

const AUTUMN_PALETTE: &[Rgba] = &[
    Rgba::new(234, 88, 12, 0.8),
    Rgba::new(217, 119, 6, 0.8),
    Rgba::new(180, 83, 9, 0.8),
    Rgba::new(251, 191, 36, 0.8),
];

const WINTER_PALETTE: &[Rgba] = &[Rgba::new(255, 255, 255, 0.8)];

/// Star alpha is randomized per particle at spawn.
const DARK_PALETTE: &[Rgba] = &[Rgba::WHITE];

/// Indexed by `Theme as usize`.
static PROFILES: [ThemeProfile; 5] = [
    ThemeProfile {
        theme: Theme::Spring,
        count: 40,
        variant: Variant::Petal,
        palette: SPRING_PALETTE,
        recycle: Recycle::Respawn,
    },
    ThemeProfile {
        theme: Theme::Summer,
        count: 100,
        variant: Variant::Rain,
        palette: SUMMER_PALETTE,
        recycle: Recycle::Respawn,
    },
    ThemeProfile {
        theme: Theme::Autumn,
        count: 50,
        variant: Variant::Leaf,
        palette: AUTUMN_PALETTE,
        recycle: Recycle::Respawn,
    },
    ThemeProfile {
        theme: Theme::Winter,
        count: 80,
        variant: Variant::Snow,
        palette: WINTER_PALETTE,
        recycle: Recycle::Respawn,
    },
    ThemeProfile {
        theme: Theme::Dark,
        count: 60,
        variant: Variant::Star,
        palette: DARK_PALETTE,
        recycle: Recycle::Wrap,
    },
];

impl ThemeProfile {
    /// The profile for `theme`.
    pub fn of(theme: Theme) -> &'static ThemeProfile {
        &PROFILES[theme as usize]
    }

    /// Generate one particle for this profile.
    pub fn spawn(
        &self,
        rng: &mut dyn RngCore,
        viewport: Viewport,
        placement: Placement,
    ) -> Particle {
        let area = SpawnArea {
            viewport,
            placement,
            palette: self.palette,
        };
        (self.variant.behavior().spawn)(rng, &area)
    }
}
