use ratatui::style::Color;

/// Ribbon color used when a task has no category. Matches the list
/// background so the ribbon visually disappears.
pub const RIBBON_DEFAULT: Color = Color::Reset;

/// Parse a `#RRGGBB` category color into a terminal color.
///
/// Anything that is not a well-formed hex triplet falls back to
/// [`RIBBON_DEFAULT`].
#[must_use]
pub fn parse_hex_color(value: &str) -> Color {
    // is_ascii makes the byte-range slices below safe
    let hex = match value.strip_prefix('#') {
        Some(hex) if hex.len() == 6 && hex.is_ascii() => hex,
        _ => return RIBBON_DEFAULT,
    };

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => RIBBON_DEFAULT,
    }
}
