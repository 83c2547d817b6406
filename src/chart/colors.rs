//! Color definitions for map charts

/// Common colors
pub(super) const COLOR_BACKGROUND: &str = "#1B2A3A"; // Daylight plate
pub(super) const COLOR_NIGHT: &str = "#0A0A0C"; // Near black
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White
pub(super) const COLOR_GRID: &str = "#505050"; // Graticule
pub(super) const COLOR_RECEIVER: &str = "#FF3030"; // Receiver markers

/// Convert `#RRGGBB` or `#RRGGBBAA` into a css `rgba()` string
pub(crate) fn css_rgba(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if digits.len() == 8 { channel(6)? } else { 255 };

    Some(format!(
        "rgba({},{},{},{:.3})",
        r,
        g,
        b,
        a as f64 / 255.0
    ))
}
