//! Color utility functions for the background effects.

use ratatui::style::Color;

/// Parse a `#rrggbb` hex string into a color.
pub fn parse_hex(value: &str) -> Option<Color> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Parse a hex string, falling back to the given color on bad input.
pub fn parse_hex_or(value: &str, fallback: Color) -> Color {
    parse_hex(value).unwrap_or(fallback)
}

/// Approximate opacity on a terminal without alpha blending by scaling the
/// channels toward black.
pub fn fade(color: Color, opacity: f64) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f64 * opacity) as u8,
            (g as f64 * opacity) as u8,
            (b as f64 * opacity) as u8,
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#64ffda"), Some(Color::Rgb(0x64, 0xff, 0xda)));
        assert_eq!(parse_hex("#FFFFFF"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex("64ffda"), None);
        assert_eq!(parse_hex("#64ffd"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_fade_scales_toward_black() {
        assert_eq!(fade(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(fade(Color::Rgb(200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(fade(Color::Rgb(200, 100, 50), 1.5), Color::Rgb(200, 100, 50));
    }
}
