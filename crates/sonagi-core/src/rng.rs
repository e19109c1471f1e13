//! Randomness seam for the rain engine.

use rand::Rng;

/// Source of randomness for glyph picks and column resets.
///
/// Any [`rand::Rng`] qualifies through the blanket impl; tests implement the
/// trait directly to script exact draw sequences.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `[0, bound)`. `bound` must be non-zero.
    fn index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.random()
    }

    fn index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}
