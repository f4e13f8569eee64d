//! Sizing, color, and styling constants for the picker.

use floem::peniko::Color;

/// Hue strip height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Saturation/value panel height
pub const PANEL_HEIGHT: f32 = 160.0;

/// Cursor circle radius on the saturation/value panel
pub const CURSOR_RADIUS: f64 = 7.0;

/// Thumb radius on the hue strip
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for panels and strips
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the editor
pub const PADDING: f32 = 12.0;

/// Editor width
pub const EDITOR_WIDTH: f32 = 288.0;

/// Trigger swatch side length
pub const SWATCH_SIZE: f32 = 48.0;

/// Current/new preview swatch side length
pub const PREVIEW_SIZE: f32 = 28.0;

/// Channel input field width
pub const INPUT_WIDTH: f32 = 36.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 72.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Resolution of the cached saturation/value raster (per side)
pub const PLANE_RASTER_SIZE: u32 = 128;

/// Width of the cached hue strip raster
pub const HUE_RASTER_WIDTH: u32 = 360;

/// Editor background
pub const EDITOR_BACKGROUND: Color = Color::rgb8(242, 242, 242);

/// Field and swatch borders
pub const BORDER: Color = Color::rgb8(200, 200, 200);

/// Muted label text
pub const MUTED: Color = Color::rgb8(120, 120, 120);
