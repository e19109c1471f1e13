//! The rain renderer: per-column drop positions plus the per-tick paint
//! operation.

use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use sonagi_core::{RainParams, RandomSource};

use crate::chars::ALPHABET;
use crate::surface::Surface;

/// The digital rain renderer.
///
/// Owns the surface and one drop position per column. [`Rain::tick`]
/// advances a single frame; [`Rain::resize`] follows the host surface,
/// keeping the column count equal to `width / font_size` at all times.
#[derive(Debug, Clone)]
pub struct Rain {
    params: RainParams,
    surface: Surface,
    /// Row index of each column's leading glyph.
    drops: Vec<u32>,
}

impl Rain {
    /// Create a renderer for a surface of the given pixel dimensions.
    ///
    /// Every column starts at row 1 so the first frame paints the top row.
    pub fn new(params: RainParams, width: u32, height: u32) -> Self {
        let surface = Surface::new(width, height, params.font_size);
        let drops = vec![1; surface.columns()];
        Self {
            params,
            surface,
            drops,
        }
    }

    /// The renderer's parameters.
    pub fn params(&self) -> &RainParams {
        &self.params
    }

    /// The drawing surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The per-column drop positions.
    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    /// Advance one frame.
    ///
    /// Fades the whole trail, then for every column stamps a random glyph
    /// at the drop's current row in the given color, restarts columns that
    /// have fallen past the bottom with a small probability, and advances
    /// each drop one row.
    pub fn tick<R: RandomSource>(&mut self, rng: &mut R, color: Color) {
        self.surface.fade(self.params.fade);

        let font_size = u64::from(self.params.font_size);
        let height = u64::from(self.surface.height());
        for (column, drop) in self.drops.iter_mut().enumerate() {
            let glyph = ALPHABET[rng.index(ALPHABET.len())];
            // The drop value is the glyph's baseline row; the cell ending at
            // that baseline is the one lit on screen.
            if let Some(row) = drop.checked_sub(1) {
                self.surface.stamp(column, row as usize, glyph, color);
            }
            // The reset draw is taken only once the column is past the
            // bottom.
            if u64::from(*drop) * font_size > height && rng.unit() > self.params.reset_threshold {
                *drop = 0;
            }
            *drop += 1;
        }
    }

    /// Follow a host surface resize.
    ///
    /// Resets the surface (dropping the trail) and grows or shrinks the
    /// drop array to the new column count: new columns start at row 1,
    /// surviving columns keep their positions.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        let columns = self.surface.columns();
        if self.drops.len() < columns {
            self.drops.resize(columns, 1);
        } else {
            self.drops.truncate(columns);
        }
    }

    /// Render the retained trail into the frame, one cell per span, dimming
    /// each glyph's stamped color by its remaining luminance.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let lines: Vec<Line> = (0..area.height)
            .map(|y| {
                let spans: Vec<Span> = (0..area.width)
                    .map(|x| self.render_cell(x as usize, y as usize))
                    .collect();
                Line::from(spans)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_cell(&self, column: usize, row: usize) -> Span<'static> {
        match self.surface.cell(column, row) {
            Some(cell) => {
                let color = dim(cell.color, cell.luminance);
                Span::styled(cell.glyph.to_string(), Style::new().fg(color))
            }
            None => Span::raw(" "),
        }
    }
}

/// Scale an RGB color towards black by a luminance factor in `[0, 1]`.
fn dim(color: Color, luminance: f64) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (f64::from(r) * luminance) as u8,
            (f64::from(g) * luminance) as u8,
            (f64::from(b) * luminance) as u8,
        ),
        other => other,
    }
}
