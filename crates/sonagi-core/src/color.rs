//! Matrix color parsing and per-frame resolution.

use ratatui::style::Color;

/// Fallback matrix green, used when no style source yields a usable color.
pub const DEFAULT_MATRIX_COLOR: Color = Color::Rgb(0x00, 0xff, 0x41);

/// Parse a `#rrggbb` or `#rgb` hex color. The leading `#` is optional.
///
/// Returns `None` for anything that is not a well-formed hex color so the
/// caller can fall through to the next style source.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim();
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            // #rgb is shorthand for #rrggbb
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Color::Rgb(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Resolve the frame's matrix color from the style sources.
///
/// The live value wins, then the configured base color; a source that is
/// missing, empty, or unparsable falls through to the next, ending at the
/// default green.
pub fn resolve_matrix_color(live: Option<&str>, configured: Option<&str>) -> Color {
    live.and_then(parse_hex_color)
        .or_else(|| configured.and_then(parse_hex_color))
        .unwrap_or(DEFAULT_MATRIX_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_hex_color("#123456"), Some(Color::Rgb(0x12, 0x34, 0x56)));
        assert_eq!(parse_hex_color("00ff41"), Some(Color::Rgb(0, 255, 65)));
    }

    #[test]
    fn parses_shorthand_hex() {
        assert_eq!(parse_hex_color("#0f4"), Some(Color::Rgb(0x00, 0xff, 0x44)));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_hex_color("  #00ff41 "), Some(Color::Rgb(0, 255, 65)));
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("#"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert_eq!(parse_hex_color("green"), None);
        // Multibyte input must fall through, not panic on slicing.
        assert_eq!(parse_hex_color("#００ff41"), None);
    }

    #[test]
    fn live_value_wins() {
        let color = resolve_matrix_color(Some("#123456"), Some("#abcdef"));
        assert_eq!(color, Color::Rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn unusable_live_value_falls_through_to_configured() {
        let color = resolve_matrix_color(Some(""), Some("#abcdef"));
        assert_eq!(color, Color::Rgb(0xab, 0xcd, 0xef));
    }

    #[test]
    fn missing_sources_fall_back_to_default_green() {
        assert_eq!(resolve_matrix_color(None, None), DEFAULT_MATRIX_COLOR);
        assert_eq!(resolve_matrix_color(Some("nope"), None), Color::Rgb(0, 255, 65));
    }
}
