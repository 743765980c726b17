//! Hex color parsing for fill colors.

use crate::types::PipelineError;

/// Parse `#RRGGBB` (leading `#` optional, case-insensitive) into RGB.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidConfig`] if `text` is not six hex
/// digits after the optional `#`.
pub fn parse_hex_color(text: &str) -> Result<[u8; 3], PipelineError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PipelineError::InvalidConfig(format!(
            "fill color must be '#RRGGBB', got: '{text}'"
        )));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|e| {
            PipelineError::InvalidConfig(format!("invalid fill color '{text}': {e}"))
        })
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Format RGB as `#RRGGBB`.
#[must_use]
pub fn to_hex(rgb: [u8; 3]) -> String {
    let [r, g, b] = rgb;
    format!("#{r:02X}{g:02X}{b:02X}")
}
