//! Validation for typed color entry.
//!
//! Both fields validate on every keystroke. Text that does not parse is not
//! an error for the user; it simply produces no color.

use crate::color::Rgb;
use crate::error::ColorError;
use crate::math;

/// Field text after a keystroke: trimmed and lower-cased.
pub fn normalize_hex_field(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Accept hex field text only when it is exactly `#` plus 3 or 6 hex digits.
///
/// The `#` is implied when missing.
pub fn parse_hex_field(text: &str) -> Option<Rgb> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    let well_formed = matches!(digits.len(), 3 | 6)
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, 'a'..='f'));
    if !well_formed {
        return None;
    }
    math::parse_hex_digits(digits)
}

/// Parse one channel entry.
///
/// Reads a leading integer (optional sign, then digits; anything after the
/// digits is ignored) and clamps it into 0–255.
pub fn parse_channel(raw: &str) -> Result<u8, ColorError> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return Err(ColorError::InvalidChannel(raw.to_string()));
    }
    if negative {
        return Ok(0);
    }
    // Anything too long for u32 is far above 255 anyway.
    let value = rest[..end].parse::<u32>().unwrap_or(u32::MAX);
    Ok(value.min(255) as u8)
}
