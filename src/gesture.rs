//! Pointer position → color component mapping.
//!
//! Positions are in the surface's local coordinates. Anything outside the
//! surface clamps to its nearest edge, which is what lets a captured drag
//! keep working after the pointer leaves the widget.

use floem::kurbo::{Point, Size};

use crate::math;

/// The two pointer-driven surfaces of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// 2D panel: x → saturation, y → value (inverted).
    SaturationValue,
    /// 1D strip: x → hue.
    Hue,
}

/// Position as a fraction of the surface, each axis clamped into 0.0–1.0.
///
/// A zero-sized axis maps to 0.
pub fn normalize(pos: Point, size: Size) -> (f64, f64) {
    let axis = |p: f64, len: f64| {
        if len > 0.0 {
            math::clamp_unit(p / len)
        } else {
            0.0
        }
    };
    (axis(pos.x, size.width), axis(pos.y, size.height))
}

/// Saturation and value under the pointer on the S/V panel.
///
/// Top-left is `(0, 1)`, bottom-right is `(1, 0)`.
pub fn saturation_value_at(pos: Point, size: Size) -> (f64, f64) {
    let (x, y) = normalize(pos, size);
    (x, 1.0 - y)
}

/// Hue under the pointer on the hue strip, in [0, 360).
pub fn hue_at(pos: Point, size: Size) -> f64 {
    let (x, _) = normalize(pos, size);
    (x * 360.0).min(math::MAX_HUE)
}

/// Which surface, if any, currently holds the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Drag {
    surface: Option<Surface>,
}

impl Drag {
    pub fn begin(&mut self, surface: Surface) {
        self.surface = Some(surface);
    }

    /// Release the pointer. Returns the surface that held it.
    pub fn end(&mut self) -> Option<Surface> {
        self.surface.take()
    }

    pub fn active(&self) -> Option<Surface> {
        self.surface
    }

    /// True when `surface` holds the pointer.
    pub fn holds(&self, surface: Surface) -> bool {
        self.surface == Some(surface)
    }
}
