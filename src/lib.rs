//! # floem-hsv-picker
//!
//! An HSV color picker for [Floem](https://github.com/lapce/floem) with
//! commit/cancel editing.
//!
//! A swatch shows the owner's color; clicking it opens an editor with a
//! saturation/value panel, a hue strip, and hex and RGB inputs. Edits stay
//! pending until OK (or a double-click on either surface) commits them;
//! Cancel restores the color the editor opened with.
//!
//! The owner's color is a [`ColorValue`], either a hex string or a channel
//! array, and commits come back in the same family.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_hsv_picker::{color_picker, ColorValue, PickerConfig};
//!
//! let color = RwSignal::new(ColorValue::hex("#3b82f6"));
//! // Use `color_picker(color, PickerConfig::default())` in your Floem view tree.
//! ```
//!
//! The editing logic lives in [`Picker`] and does not need a window; the
//! conversions in [`math`] are plain functions.

mod color;
mod config;
mod constants;
mod editor;
mod error;
mod gesture;
mod hue_strip;
mod input;
mod inputs;
pub mod math;
mod picker;
mod sv_panel;

pub use color::{Channel, ColorFormat, ColorValue, Hsv, Rgb};
pub use config::{PickerConfig, Presentation, TriggerWhileOpen};
pub use error::ColorError;
pub use gesture::{Drag, Surface, hue_at, normalize, saturation_value_at};
pub use input::{normalize_hex_field, parse_channel, parse_hex_field};
pub use math::{hex_to_rgb, hsv_to_rgb, int_to_rgb, rgb_to_hex, rgb_to_hsv, rgb_to_int};
pub use picker::{Phase, Picker};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::{
    Memo, RwSignal, SignalGet, SignalUpdate, SignalWith, create_effect, create_memo,
};
use floem::text::FONT_SYSTEM;

use editor::PickerHandle;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates a color picker bound to `value`.
///
/// External writes to `value` are picked up while the editor is closed;
/// commits (and, with [`PickerConfig::live_preview`], every pending change)
/// are written back to it.
pub fn color_picker(value: RwSignal<ColorValue>, config: PickerConfig) -> impl IntoView {
    let disabled = config.disabled;
    color_picker_with_disabled(value, config, move || disabled)
}

/// Like [`color_picker`], with a reactive disabled flag.
///
/// Disabling the picker while the editor is open cancels the edit.
pub fn color_picker_with_disabled(
    value: RwSignal<ColorValue>,
    config: PickerConfig,
    disabled: impl Fn() -> bool + 'static,
) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });

    let picker = RwSignal::new(Picker::new(value.get_untracked(), config));
    let handle = PickerHandle { picker, value };

    // Owner value → picker
    create_effect(move |_| {
        let v = value.get();
        if picker.with_untracked(|p| p.committed() != &v) {
            picker.update(|p| p.set_external(v));
        }
    });

    create_effect(move |_| {
        let d = disabled();
        if picker.with_untracked(|p| p.config().disabled != d) {
            handle.apply(|p| p.set_disabled(d));
        }
    });

    let is_open = create_memo(move |_| picker.with(|p| p.is_open()));
    let is_disabled = create_memo(move |_| picker.with(|p| p.config().disabled));
    let overlay = config.presentation == Presentation::Overlay;

    v_stack((
        swatch(handle, is_open, is_disabled),
        editor::editor(handle).style(move |s| {
            let s = if overlay {
                s.absolute()
                    .inset_top(constants::SWATCH_SIZE + constants::GAP)
                    .z_index(10)
            } else {
                s.margin_top(constants::GAP)
            };
            s.apply_if(!is_open.get(), |s| s.hide())
        }),
    ))
}

/// The trigger: a swatch of the committed color.
fn swatch(
    handle: PickerHandle,
    is_open: Memo<bool>,
    is_disabled: Memo<bool>,
) -> impl IntoView {
    let picker = handle.picker;
    empty()
        .style(move |s| {
            // Pending mirrors the owner's color while closed
            let c = picker.with(|p| if p.is_open() { p.original() } else { p.pending() });
            let open = is_open.get();
            let off = is_disabled.get();
            s.size(constants::SWATCH_SIZE, constants::SWATCH_SIZE)
                .border_radius(constants::RADIUS * 2.0)
                .border(2.0)
                .border_color(if open {
                    Color::rgb8(59, 130, 246)
                } else {
                    Color::rgb8(156, 163, 175)
                })
                .background(Color::rgb8(c.r(), c.g(), c.b()))
                .apply_if(off, |s| {
                    s.cursor(floem::style::CursorStyle::Default)
                        .border_color(Color::rgb8(107, 114, 128))
                })
                .apply_if(!off, |s| s.cursor(floem::style::CursorStyle::Pointer))
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            handle.apply(Picker::activate);
        })
}
