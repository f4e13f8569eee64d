//! Color value types.
//!
//! [`Rgb`] and [`Hsv`] are the two working representations the picker keeps
//! in lockstep. [`ColorValue`] is what crosses the boundary with the owner:
//! either a hex string or a channel array, and whichever family came in is
//! the family that goes back out.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::math;

/// One of the three RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel.
    Red,
    /// Green channel.
    Green,
    /// Blue channel.
    Blue,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Single-letter label shown under the numeric field.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

/// RGB color with 8-bit channels.
///
/// Serializes as a `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    /// `#000000`, the fallback for anything unparseable.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// `#ffffff`.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create from 0–255 channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red channel.
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green channel.
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue channel.
    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Copy with one channel replaced.
    #[must_use]
    pub fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
        self
    }

    /// Parse `#rgb` / `#rrggbb` (the `#` is optional, case is ignored).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        math::parse_hex_digits(hex).ok_or_else(|| ColorError::InvalidHex(hex.to_string()))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        math::rgb_to_hex(f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }

    /// Convert to HSV.
    pub fn to_hsv(&self) -> Hsv {
        math::rgb_to_hsv(self.r, self.g, self.b)
    }

    /// Channels as `f64`s, the shape of an array-typed [`ColorValue`].
    pub fn to_channels(&self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    /// Build from arbitrary numbers, clamping and rounding each one.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::new(
            math::clamp_channel(r),
            math::clamp_channel(g),
            math::clamp_channel(b),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// HSV color: hue in degrees [0, 360), saturation and value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    h: f64,
    s: f64,
    v: f64,
}

impl Hsv {
    /// Create from raw components. Hue wraps, saturation and value clamp.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: math::wrap_hue(h),
            s: math::clamp_unit(s),
            v: math::clamp_unit(v),
        }
    }

    /// Hue in degrees.
    pub fn h(&self) -> f64 {
        self.h
    }
    /// Saturation (0.0–1.0).
    pub fn s(&self) -> f64 {
        self.s
    }
    /// Value (0.0–1.0).
    pub fn v(&self) -> f64 {
        self.v
    }

    #[must_use]
    pub fn with_hue(self, h: f64) -> Self {
        Self::new(h, self.s, self.v)
    }

    #[must_use]
    pub fn with_saturation_value(self, s: f64, v: f64) -> Self {
        Self::new(self.h, s, v)
    }

    /// True when hue carries no information (gray, black or white).
    pub fn is_achromatic(&self) -> bool {
        self.s == 0.0 || self.v == 0.0
    }

    pub fn to_rgb(&self) -> Rgb {
        math::hsv_to_rgb(self.h, self.s, self.v)
    }
}

/// Which representation family the owner speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `#rrggbb` string.
    Hex,
    /// `[r, g, b]` number array.
    Channels,
}

/// A color as the owner supplies it.
///
/// Deserializes from either a JSON string or a JSON number array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// Hex string such as `"#ff8800"` or `"f80"`.
    Hex(String),
    /// Channel array such as `[255, 136, 0]`.
    Channels(Vec<f64>),
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::Channels(vec![0.0, 0.0, 0.0])
    }
}

impl ColorValue {
    pub fn hex(hex: impl Into<String>) -> Self {
        Self::Hex(hex.into())
    }

    pub fn channels(r: f64, g: f64, b: f64) -> Self {
        Self::Channels(vec![r, g, b])
    }

    /// Encode `rgb` in the given family.
    pub fn from_rgb(rgb: Rgb, format: ColorFormat) -> Self {
        match format {
            ColorFormat::Hex => Self::Hex(rgb.to_hex()),
            ColorFormat::Channels => Self::Channels(rgb.to_channels().to_vec()),
        }
    }

    pub fn format(&self) -> ColorFormat {
        match self {
            Self::Hex(_) => ColorFormat::Hex,
            Self::Channels(_) => ColorFormat::Channels,
        }
    }

    /// Normalize to [`Rgb`].
    ///
    /// Channel values are clamped and rounded; a wrong channel count,
    /// non-finite channel or malformed hex string is an error.
    pub fn to_rgb(&self) -> Result<Rgb, ColorError> {
        match self {
            Self::Hex(hex) => Rgb::from_hex(hex.trim()),
            Self::Channels(channels) => {
                let [r, g, b] = channels.as_slice() else {
                    return Err(ColorError::ChannelCount(channels.len()));
                };
                if let Some(index) = [r, g, b].iter().position(|c| !c.is_finite()) {
                    return Err(ColorError::NonFiniteChannel { index });
                }
                Ok(Rgb::from_channels(*r, *g, *b))
            }
        }
    }
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb, ColorFormat::Channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_strict() {
        assert_eq!(Rgb::from_hex("#FF5733").unwrap(), Rgb::new(255, 87, 51));
        assert_eq!("0f0".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 0));
        assert_eq!(
            Rgb::from_hex("zz"),
            Err(ColorError::InvalidHex("zz".to_string()))
        );
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgb::new(171, 205, 239).to_string(), "#abcdef");
    }

    #[test]
    fn with_channel_replaces_one() {
        let c = Rgb::new(1, 2, 3).with_channel(Channel::Green, 200);
        assert_eq!(c, Rgb::new(1, 200, 3));
        assert_eq!(c.channel(Channel::Blue), 3);
    }

    #[test]
    fn hsv_new_normalizes() {
        let hsv = Hsv::new(-30.0, 1.5, f64::NAN);
        assert!((hsv.h() - 330.0).abs() < 1e-9);
        assert_eq!(hsv.s(), 1.0);
        assert_eq!(hsv.v(), 0.0);
        assert!(hsv.is_achromatic());
    }

    #[test]
    fn value_keeps_its_family() {
        let c = Rgb::new(255, 136, 0);
        assert_eq!(
            ColorValue::from_rgb(c, ColorFormat::Hex),
            ColorValue::hex("#ff8800")
        );
        assert_eq!(
            ColorValue::from_rgb(c, ColorFormat::Channels),
            ColorValue::channels(255.0, 136.0, 0.0)
        );
        assert_eq!(ColorValue::hex("#fff").format(), ColorFormat::Hex);
    }

    #[test]
    fn value_to_rgb_clamps_channels() {
        let v = ColorValue::channels(300.0, -2.0, 127.6);
        assert_eq!(v.to_rgb().unwrap(), Rgb::new(255, 0, 128));
    }

    #[test]
    fn value_to_rgb_rejects_malformed() {
        assert_eq!(
            ColorValue::Channels(vec![1.0, 2.0]).to_rgb(),
            Err(ColorError::ChannelCount(2))
        );
        assert_eq!(
            ColorValue::channels(1.0, f64::NAN, 3.0).to_rgb(),
            Err(ColorError::NonFiniteChannel { index: 1 })
        );
        assert!(ColorValue::hex("#12").to_rgb().is_err());
    }
}
