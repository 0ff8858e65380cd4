//! Translucent colors and alpha compositing onto terminal cells.

use ratatui::style::Color;

/// An sRGB color with a straight (non-premultiplied) alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Self = Self::new(255, 255, 255, 1.0);
    pub const BLACK: Self = Self::new(0, 0, 0, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 1.0)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Source-over composite of `self` onto an opaque `backdrop`.
    pub fn over(self, backdrop: Rgba) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |src: u8, dst: u8| {
            (f32::from(src) * a + f32::from(dst) * (1.0 - a)).round() as u8
        };
        Rgba::new(
            mix(self.r, backdrop.r),
            mix(self.g, backdrop.g),
            mix(self.b, backdrop.b),
            1.0,
        )
    }

    /// Terminal color, ignoring alpha.
    pub fn color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}
