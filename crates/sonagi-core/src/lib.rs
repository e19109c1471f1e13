//! Core types shared across the sonagi digital rain crates.

mod color;
mod params;
mod rng;

pub use color::{DEFAULT_MATRIX_COLOR, parse_hex_color, resolve_matrix_color};
pub use params::{
    DEFAULT_FADE, DEFAULT_FONT_SIZE, DEFAULT_RESET_THRESHOLD, DEFAULT_TICK, RainParams,
};
pub use rng::RandomSource;
