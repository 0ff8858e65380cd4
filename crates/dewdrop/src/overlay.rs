//! The liquid drop, drawn as a tinted glass disc over the particle field.

use dewdrop_core::{Rgba, Vec2};
use dewdrop_physics::DropSimulator;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// White blended into cells under the body of the drop.
const BODY_TINT: f32 = 0.18;
/// White blended into the outer ring.
const RIM_TINT: f32 = 0.4;
/// Fraction of the radius where the rim starts.
const RIM_START: f32 = 0.85;
/// Specular highlight, up and to the left of center.
const HIGHLIGHT_OFFSET: f32 = -0.35;
const HIGHLIGHT_RADIUS: f32 = 0.25;
const HIGHLIGHT_GLYPH: &str = "◦";

/// Widget rendering one frame of the drop.
#[derive(Debug, Clone, Copy)]
pub struct DropView {
    /// Disc center in pixels, relative to the render area.
    pub center: Vec2,
    pub radius: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    /// Color assumed behind cells that have no background of their own.
    pub backdrop: Rgba,
}

impl DropView {
    pub fn new(drop: &DropSimulator, cell_width: u16, cell_height: u16, backdrop: Rgba) -> Self {
        let half = drop.size().px() / 2.0;
        Self {
            center: drop.offset() + Vec2::new(half, half),
            radius: half * drop.scale(),
            cell_width: f32::from(cell_width.max(1)),
            cell_height: f32::from(cell_height.max(1)),
            backdrop,
        }
    }

    fn tint(&self, color: Color, amount: f32) -> Color {
        let under = match color {
            Color::Rgb(r, g, b) => Rgba::new(r, g, b, 1.0),
            _ => self.backdrop,
        };
        Rgba::WHITE.with_alpha(amount).over(under).color()
    }
}

impl Widget for DropView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.radius <= 0.0 {
            return;
        }
        let r = self.radius;
        let highlight = self.center + Vec2::new(HIGHLIGHT_OFFSET * r, HIGHLIGHT_OFFSET * r);
        let max_col = f32::from(area.width) - 1.0;
        let max_row = f32::from(area.height) - 1.0;
        let col0 = ((self.center.x - r) / self.cell_width).floor().max(0.0);
        let col1 = ((self.center.x + r) / self.cell_width).floor().min(max_col);
        let row0 = ((self.center.y - r) / self.cell_height).floor().max(0.0);
        let row1 = ((self.center.y + r) / self.cell_height).floor().min(max_row);
        if col0 > col1 || row0 > row1 {
            return;
        }

        for row in row0 as u16..=row1 as u16 {
            for col in col0 as u16..=col1 as u16 {
                let p = Vec2::new(
                    (f32::from(col) + 0.5) * self.cell_width,
                    (f32::from(row) + 0.5) * self.cell_height,
                );
                let dist = (p - self.center).length() / r;
                if dist > 1.0 {
                    continue;
                }
                let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                let amount = if dist >= RIM_START { RIM_TINT } else { BODY_TINT };
                let bg = self.tint(cell.bg, amount);
                cell.set_bg(bg);
                if (p - highlight).length() <= HIGHLIGHT_RADIUS * r {
                    cell.set_symbol(HIGHLIGHT_GLYPH).set_fg(Color::White);
                }
            }
        }
    }
}
