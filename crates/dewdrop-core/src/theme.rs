//! Seasonal themes and the drop size setting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Rgba;

/// Seasonal theme driving the particle field and accent colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
    Dark,
}

impl Theme {
    /// All themes in cycling order.
    pub const ALL: [Theme; 5] = [
        Theme::Spring,
        Theme::Summer,
        Theme::Autumn,
        Theme::Winter,
        Theme::Dark,
    ];

    /// Cycle to the next theme.
    pub fn next(self) -> Self {
        match self {
            Theme::Spring => Theme::Summer,
            Theme::Summer => Theme::Autumn,
            Theme::Autumn => Theme::Winter,
            Theme::Winter => Theme::Dark,
            Theme::Dark => Theme::Spring,
        }
    }

    /// Lowercase identifier, as used in config files.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Spring => "spring",
            Theme::Summer => "summer",
            Theme::Autumn => "autumn",
            Theme::Winter => "winter",
            Theme::Dark => "dark",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Spring => "Spring",
            Theme::Summer => "Summer",
            Theme::Autumn => "Autumn",
            Theme::Winter => "Winter",
            Theme::Dark => "Dark Mode",
        }
    }

    /// Accent color used for highlights and the status line.
    pub fn accent(self) -> Rgba {
        match self {
            Theme::Spring => Rgba::hex(0x0d9488),
            Theme::Summer => Rgba::hex(0x2563eb),
            Theme::Autumn => Rgba::hex(0xea580c),
            Theme::Winter => Rgba::hex(0x4f46e5),
            Theme::Dark => Rgba::hex(0x22d3ee),
        }
    }

    /// Opaque backdrop the particles are composited onto.
    pub fn backdrop(self) -> Rgba {
        match self {
            Theme::Spring => Rgba::hex(0xe6f7ff),
            Theme::Summer => Rgba::hex(0xeff6ff),
            Theme::Autumn => Rgba::hex(0xffedd5),
            Theme::Winter => Rgba::hex(0xe2e8f0),
            Theme::Dark => Rgba::hex(0x020617),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a theme name that is not one of the five themes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}` (expected spring, summer, autumn, winter or dark)")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Edge length of the drop overlay in pixels.
///
/// Always within `100..=500` and a multiple of 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct DropSize(u32);

impl DropSize {
    pub const MIN: u32 = 100;
    pub const MAX: u32 = 500;
    pub const STEP: u32 = 10;

    /// Clamp into range and snap to the nearest step.
    pub fn new(px: u32) -> Self {
        let clamped = px.clamp(Self::MIN, Self::MAX);
        let snapped = (clamped + Self::STEP / 2) / Self::STEP * Self::STEP;
        Self(snapped.min(Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn px(self) -> f32 {
        self.0 as f32
    }

    /// One step larger, saturating at [`DropSize::MAX`].
    pub fn grow(self) -> Self {
        Self::new(self.0 + Self::STEP)
    }

    /// One step smaller, saturating at [`DropSize::MIN`].
    pub fn shrink(self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }
}

impl Default for DropSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<u32> for DropSize {
    fn from(px: u32) -> Self {
        Self::new(px)
    }
}

impl From<DropSize> for u32 {
    fn from(size: DropSize) -> Self {
        size.0
    }
}
