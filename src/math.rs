//! Color math: direct conversions without external dependencies.
//!
//! Hue is in degrees (0.0–360.0, exclusive), saturation and value are in
//! 0.0–1.0, and RGB channels are 8-bit. Every function here is total: out of
//! range or non-finite input is clamped, never rejected.

use crate::color::{Hsv, Rgb};

/// Largest hue a clamped position can produce; keeps hue inside [0, 360).
pub(crate) const MAX_HUE: f64 = 360.0 - 1e-9;

/// Wrap any hue into [0, 360). Non-finite input becomes 0.
pub(crate) fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Clamp into 0.0–1.0. NaN becomes 0.
pub(crate) fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Clamp and round an arbitrary number into a 0–255 channel. NaN becomes 0.
pub fn clamp_channel(x: f64) -> u8 {
    if x.is_nan() {
        return 0;
    }
    x.round().clamp(0.0, 255.0) as u8
}

fn unit_to_channel(x: f64) -> u8 {
    clamp_channel(clamp_unit(x) * 255.0)
}

/// Parse 3 or 6 hex digits with an optional leading `#`.
pub(crate) fn parse_hex_digits(hex: &str) -> Option<Rgb> {
    let stripped = hex.strip_prefix('#').unwrap_or(hex);
    if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match stripped.len() {
        3 => {
            let r = u8::from_str_radix(&stripped[0..1], 16).ok()?;
            let g = u8::from_str_radix(&stripped[1..2], 16).ok()?;
            let b = u8::from_str_radix(&stripped[2..3], 16).ok()?;
            Some(Rgb::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
            let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
            let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

/// Hex → RGB. Accepts `#rgb`, `rgb`, `#rrggbb` or `rrggbb` in any case.
///
/// Malformed input yields black instead of an error; use
/// [`Rgb::from_hex`] when the failure matters.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex_digits(hex).unwrap_or(Rgb::BLACK)
}

/// RGB → `#rrggbb`. Channels are clamped to 0–255 and rounded.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        clamp_channel(r),
        clamp_channel(g),
        clamp_channel(b)
    )
}

/// RGB → HSV. Achromatic colors get hue 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    Hsv::new(h, s, v)
}

/// HSV → RGB. Hue wraps, saturation and value clamp, channels round.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = wrap_hue(h);
    let s = clamp_unit(s);
    let v = clamp_unit(v);

    if s == 0.0 {
        let c = unit_to_channel(v);
        return Rgb::new(c, c, c);
    }

    let h6 = h / 60.0;
    let i = h6.floor();
    let f = h6 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match i as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(unit_to_channel(r), unit_to_channel(g), unit_to_channel(b))
}

/// Pack into `0xRRGGBB`, the layout addressable LED strips report.
pub fn rgb_to_int(rgb: Rgb) -> u32 {
    (u32::from(rgb.r()) << 16) | (u32::from(rgb.g()) << 8) | u32::from(rgb.b())
}

/// Unpack `0xRRGGBB`. Bits above the low 24 are ignored.
pub fn int_to_rgb(packed: u32) -> Rgb {
    Rgb::new(
        ((packed >> 16) & 0xff) as u8,
        ((packed >> 8) & 0xff) as u8,
        (packed & 0xff) as u8,
    )
}
