//! The drawing surface: logical pixel dimensions plus the retained glyph
//! trail that the per-tick overpaint decays.

use ratatui::style::Color;

/// Luminance below one 8-bit step reads as empty.
const LUMINANCE_FLOOR: f64 = 1.0 / 255.0;

/// One retained glyph cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailCell {
    /// Glyph last stamped into this cell.
    pub glyph: char,
    /// Color the glyph was stamped with.
    pub color: Color,
    /// Remaining luminance in `[0, 1]`; 1.0 right after a stamp.
    pub luminance: f64,
}

const EMPTY: TrailCell = TrailCell {
    glyph: ' ',
    color: Color::Reset,
    luminance: 0.0,
};

/// The drawing target.
///
/// Dimensions are logical pixels; one cell spans `font_size` pixels each
/// way, so a surface `w` pixels wide holds `w / font_size` whole columns.
/// Stamped glyphs are retained and darken a little every tick instead of
/// being cleared, which is what produces the fading trail. Resizing resets
/// the dimensions and drops all retained content.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    font_size: u16,
    columns: usize,
    rows: usize,
    cells: Vec<TrailCell>,
}

impl Surface {
    /// Create a surface of the given pixel dimensions.
    pub fn new(width: u32, height: u32, font_size: u16) -> Self {
        debug_assert!(font_size > 0, "font_size must be non-zero");
        let font_size_px = u32::from(font_size);
        let columns = (width / font_size_px) as usize;
        // The bottom row may be only partially inside the surface; glyphs
        // landing there are still painted.
        let rows = (height.div_ceil(font_size_px)) as usize;
        Self {
            width,
            height,
            font_size,
            columns,
            rows,
            cells: vec![EMPTY; columns * rows],
        }
    }

    /// Surface width in logical pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in logical pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Glyph cell size in logical pixels.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Number of whole glyph columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of glyph rows, counting a partial bottom row.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Reset the dimensions, dropping all retained content.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height, self.font_size);
    }

    /// Darken every retained cell by the overpaint opacity.
    ///
    /// Cells that decay below one 8-bit step become empty.
    pub fn fade(&mut self, fade: f64) {
        for cell in &mut self.cells {
            if cell.luminance == 0.0 {
                continue;
            }
            cell.luminance *= 1.0 - fade;
            if cell.luminance < LUMINANCE_FLOOR {
                *cell = EMPTY;
            }
        }
    }

    /// Stamp a glyph at full luminance. Positions outside the surface are
    /// clipped silently.
    pub fn stamp(&mut self, column: usize, row: usize, glyph: char, color: Color) {
        if column >= self.columns || row >= self.rows {
            return;
        }
        self.cells[row * self.columns + column] = TrailCell {
            glyph,
            color,
            luminance: 1.0,
        };
    }

    /// The retained cell at the given position, `None` when empty or out of
    /// bounds.
    pub fn cell(&self, column: usize, row: usize) -> Option<&TrailCell> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        let cell = &self.cells[row * self.columns + column];
        (cell.luminance > 0.0).then_some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Color = Color::Rgb(0, 255, 65);

    #[test]
    fn geometry_follows_pixel_dimensions() {
        let surface = Surface::new(320, 240, 16);
        assert_eq!(surface.columns(), 20);
        assert_eq!(surface.rows(), 15);

        // Partial cells: columns truncate, rows round up.
        let surface = Surface::new(330, 250, 16);
        assert_eq!(surface.columns(), 20);
        assert_eq!(surface.rows(), 16);
    }

    #[test]
    fn stamp_then_read_back() {
        let mut surface = Surface::new(64, 64, 16);
        surface.stamp(2, 3, 'ﾊ', GREEN);
        let cell = surface.cell(2, 3).unwrap();
        assert_eq!(cell.glyph, 'ﾊ');
        assert_eq!(cell.color, GREEN);
        assert_eq!(cell.luminance, 1.0);
        assert!(surface.cell(1, 3).is_none());
    }

    #[test]
    fn out_of_bounds_stamps_are_clipped() {
        let mut surface = Surface::new(64, 64, 16);
        surface.stamp(4, 0, 'A', GREEN);
        surface.stamp(0, 4, 'A', GREEN);
        for column in 0..surface.columns() {
            for row in 0..surface.rows() {
                assert!(surface.cell(column, row).is_none());
            }
        }
        assert!(surface.cell(99, 99).is_none());
    }

    #[test]
    fn fade_decays_multiplicatively() {
        let mut surface = Surface::new(16, 16, 16);
        surface.stamp(0, 0, 'X', GREEN);
        surface.fade(0.05);
        surface.fade(0.05);
        let cell = surface.cell(0, 0).unwrap();
        assert!((cell.luminance - 0.95 * 0.95).abs() < 1e-12);
        // The stamped color is retained; only luminance decays.
        assert_eq!(cell.color, GREEN);
    }

    #[test]
    fn fade_empties_cells_below_the_floor() {
        let mut surface = Surface::new(16, 16, 16);
        surface.stamp(0, 0, 'X', GREEN);
        // 0.95^n < 1/255 after 109 ticks.
        for _ in 0..120 {
            surface.fade(0.05);
        }
        assert!(surface.cell(0, 0).is_none());
    }

    #[test]
    fn resize_clears_retained_content() {
        let mut surface = Surface::new(320, 240, 16);
        surface.stamp(0, 0, 'X', GREEN);
        surface.resize(160, 240);
        assert_eq!(surface.width(), 160);
        assert_eq!(surface.columns(), 10);
        assert!(surface.cell(0, 0).is_none());
    }
}
