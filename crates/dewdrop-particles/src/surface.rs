//! Pixel-addressed raster backed by a grid of terminal cells.

use dewdrop_core::{Rgba, Vec2, Viewport};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// One terminal cell: a glyph and its already composited color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub color: Rgba,
}

/// Drawing target for particles.
///
/// Shapes are given in pixels. A shape covers every cell whose center lies
/// inside it; a shape too small to cover any center still marks the cell
/// under its own center. Colors are alpha-blended onto whatever the cell
/// already shows, starting from the backdrop.
#[derive(Debug, Clone)]
pub struct Surface {
    cols: u16,
    rows: u16,
    cell_width: f32,
    cell_height: f32,
    backdrop: Rgba,
    fill_backdrop: bool,
    cells: Vec<Cell>,
}

impl Surface {
    /// A blank surface of `cols` x `rows` cells, each `cell_width` x
    /// `cell_height` pixels.
    pub fn new(cols: u16, rows: u16, cell_width: u16, cell_height: u16) -> Self {
        let mut surface = Self {
            cols,
            rows,
            cell_width: f32::from(cell_width.max(1)),
            cell_height: f32::from(cell_height.max(1)),
            backdrop: Rgba::BLACK,
            fill_backdrop: false,
            cells: Vec::new(),
        };
        surface.clear();
        surface
    }

    /// Change the grid size, discarding the contents.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if cols != self.cols || rows != self.rows {
            self.cols = cols;
            self.rows = rows;
            self.clear();
        }
    }

    /// Color particles are blended onto; painted behind them if `fill`.
    pub fn set_backdrop(&mut self, backdrop: Rgba, fill: bool) {
        self.backdrop = backdrop.with_alpha(1.0);
        self.fill_backdrop = fill;
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        let blank = Cell {
            glyph: ' ',
            color: self.backdrop,
        };
        self.cells.clear();
        self.cells
            .resize(usize::from(self.cols) * usize::from(self.rows), blank);
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Pixel extent of the surface.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            f32::from(self.cols) * self.cell_width,
            f32::from(self.rows) * self.cell_height,
        )
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        self.index(col, row).map(|i| self.cells[i])
    }

    /// Number of cells holding a glyph.
    pub fn painted(&self) -> usize {
        self.cells.iter().filter(|c| c.glyph != ' ').count()
    }

    fn index(&self, col: u16, row: u16) -> Option<usize> {
        (col < self.cols && row < self.rows)
            .then(|| usize::from(row) * usize::from(self.cols) + usize::from(col))
    }

    /// Cell containing pixel `p`, if on the surface.
    fn cell_of(&self, p: Vec2) -> Option<(u16, u16)> {
        let col = (p.x / self.cell_width).floor();
        let row = (p.y / self.cell_height).floor();
        if col < 0.0 || row < 0.0 || col >= f32::from(self.cols) || row >= f32::from(self.rows) {
            return None;
        }
        Some((col as u16, row as u16))
    }

    fn cell_center(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (f32::from(col) + 0.5) * self.cell_width,
            (f32::from(row) + 0.5) * self.cell_height,
        )
    }

    fn paint(&mut self, col: u16, row: u16, color: Rgba, glyph: char) {
        if let Some(i) = self.index(col, row) {
            let cell = &mut self.cells[i];
            cell.color = color.over(cell.color);
            cell.glyph = glyph;
        }
    }

    /// Paint every cell whose center satisfies `inside`, searching the cells
    /// within `reach` pixels of `center`.
    fn fill_shape(
        &mut self,
        center: Vec2,
        reach: f32,
        color: Rgba,
        glyph: char,
        inside: impl Fn(Vec2) -> bool,
    ) {
        if self.cells.is_empty() || reach <= 0.0 || !reach.is_finite() {
            return;
        }
        let max_col = f32::from(self.cols) - 1.0;
        let max_row = f32::from(self.rows) - 1.0;
        let col0 = ((center.x - reach) / self.cell_width).floor().max(0.0);
        let col1 = ((center.x + reach) / self.cell_width).floor().min(max_col);
        let row0 = ((center.y - reach) / self.cell_height).floor().max(0.0);
        let row1 = ((center.y + reach) / self.cell_height).floor().min(max_row);

        let mut covered = false;
        if col0 <= col1 && row0 <= row1 {
            for row in row0 as u16..=row1 as u16 {
                for col in col0 as u16..=col1 as u16 {
                    if inside(self.cell_center(col, row) - center) {
                        self.paint(col, row, color, glyph);
                        covered = true;
                    }
                }
            }
        }
        if !covered
            && let Some((col, row)) = self.cell_of(center)
        {
            self.paint(col, row, color, glyph);
        }
    }

    /// Filled circle of `radius` pixels.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glyph: char) {
        let r2 = radius * radius;
        self.fill_shape(center, radius, color, glyph, |d| d.x * d.x + d.y * d.y <= r2);
    }

    /// Filled ellipse with radii `rx`, `ry`, rotated clockwise by `angle_deg`.
    pub fn fill_ellipse(
        &mut self,
        center: Vec2,
        rx: f32,
        ry: f32,
        angle_deg: f32,
        color: Rgba,
        glyph: char,
    ) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        self.fill_shape(center, rx.max(ry), color, glyph, |d| {
            // Undo the rotation to test against the axis-aligned ellipse.
            let lx = d.x * cos + d.y * sin;
            let ly = -d.x * sin + d.y * cos;
            (lx / rx).powi(2) + (ly / ry).powi(2) <= 1.0
        });
    }

    /// Vertical segment from `top` down `length` pixels.
    pub fn stroke_vline(&mut self, top: Vec2, length: f32, color: Rgba, glyph: char) {
        if self.cells.is_empty() || length <= 0.0 {
            return;
        }
        let col = (top.x / self.cell_width).floor();
        if col < 0.0 || col >= f32::from(self.cols) {
            return;
        }
        let row0 = (top.y / self.cell_height).floor().max(0.0);
        let row1 = ((top.y + length) / self.cell_height)
            .floor()
            .min(f32::from(self.rows) - 1.0);
        if row0 > row1 {
            return;
        }
        for row in row0 as u16..=row1 as u16 {
            self.paint(col as u16, row, color, glyph);
        }
    }

    /// The surface as styled lines, one per row.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let base = if self.fill_backdrop {
            Style::new().bg(self.backdrop.color())
        } else {
            Style::new()
        };
        self.cells
            .chunks(usize::from(self.cols.max(1)))
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| {
                        if cell.glyph == ' ' {
                            Span::styled(" ", base)
                        } else {
                            Span::styled(cell.glyph.to_string(), base.fg(cell.color.color()))
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}
