//! The live color channel.
//!
//! The `SONAGI_MATRIX` environment variable is read once per frame, so a
//! color set in the launching shell tints new trails from their next stamp
//! on while already-painted trails keep fading in their own color.

/// Environment variable holding a hex color that overrides the config.
pub const MATRIX_ENV_VAR: &str = "SONAGI_MATRIX";

/// The current live override, if one is set.
pub fn live_value() -> Option<String> {
    std::env::var(MATRIX_ENV_VAR).ok()
}
