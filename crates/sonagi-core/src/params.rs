//! Tunable parameters for the rain renderer.

use std::time::Duration;

/// Glyph cell size in logical pixels.
pub const DEFAULT_FONT_SIZE: u16 = 16;

/// Paint cadence, about 30 Hz.
pub const DEFAULT_TICK: Duration = Duration::from_millis(33);

/// Per-tick luminance decay, the opacity of the dark overpaint.
pub const DEFAULT_FADE: f64 = 0.05;

/// A column past the bottom restarts when a unit draw exceeds this.
pub const DEFAULT_RESET_THRESHOLD: f64 = 0.975;

/// Tunable parameters for the rain renderer.
///
/// The defaults are the classic constants of the effect; they can be
/// overridden through the configuration file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainParams {
    /// Glyph cell size in logical pixels; one column is one cell wide.
    pub font_size: u16,
    /// Fraction of luminance removed from every retained cell per tick.
    pub fade: f64,
    /// Unit draws above this restart a column that has left the surface.
    pub reset_threshold: f64,
}

impl Default for RainParams {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            fade: DEFAULT_FADE,
            reset_threshold: DEFAULT_RESET_THRESHOLD,
        }
    }
}
