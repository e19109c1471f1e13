//! Digital rain rendering for the sonagi terminal screensaver.
//!
//! The engine works in logical pixel space: the surface has pixel
//! dimensions, one glyph column per `font_size` pixels of width, and a
//! per-column drop position that walks down one row per tick. The fading
//! trail comes from a retained cell grid whose luminance decays every tick
//! instead of the screen being cleared between frames.

mod chars;
mod rain;
mod surface;

pub use chars::ALPHABET;
pub use rain::Rain;
pub use surface::{Surface, TrailCell};
