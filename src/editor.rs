//! Editor panel: OK / Cancel header, current → new preview, saturation/value
//! panel, hue strip, hex and RGB inputs.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalUpdate, SignalWith};

use crate::color::{Channel, ColorValue, Rgb};
use crate::constants;
use crate::hue_strip::hue_strip;
use crate::inputs::{channel_input, copy_button, hex_input};
use crate::picker::Picker;
use crate::sv_panel::sv_panel;

/// The picker state together with the owner's value signal.
///
/// Every user action goes through [`PickerHandle::apply`], which runs it
/// against the picker and forwards whatever it emits to the owner.
#[derive(Clone, Copy)]
pub(crate) struct PickerHandle {
    pub(crate) picker: RwSignal<Picker>,
    pub(crate) value: RwSignal<ColorValue>,
}

impl PickerHandle {
    pub(crate) fn apply(self, action: impl FnOnce(&mut Picker) -> Option<ColorValue>) {
        if let Some(Some(out)) = self.picker.try_update(action) {
            self.value.set(out);
        }
    }

    /// Drop pointer capture. Safe to call after the picker is disposed.
    pub(crate) fn release(self) {
        let _ = self.picker.try_update(Picker::end_drag);
    }
}

fn rgb_color(c: Rgb) -> Color {
    Color::rgb8(c.r(), c.g(), c.b())
}

fn preview_swatch(get: impl Fn() -> Rgb + 'static, title: &'static str) -> impl IntoView {
    v_stack((
        empty().style(move |st| {
            st.size(constants::PREVIEW_SIZE, constants::PREVIEW_SIZE)
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(rgb_color(get()))
        }),
        label(move || title).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(constants::MUTED)
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

fn action_button(
    text: &'static str,
    primary: bool,
    on_press: impl Fn() + 'static,
) -> impl IntoView {
    label(move || text)
        .style(move |s| {
            let (bg, fg) = if primary {
                (Color::rgb8(37, 99, 235), Color::WHITE)
            } else {
                (Color::rgb8(225, 225, 225), Color::rgb8(60, 60, 60))
            };
            s.padding_horiz(10.0)
                .padding_vert(3.0)
                .font_size(constants::INPUT_FONT)
                .border_radius(3.0)
                .background(bg)
                .color(fg)
                .cursor(floem::style::CursorStyle::Pointer)
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            on_press();
        })
}

/// Creates the editor panel for the picker behind `handle`.
pub(crate) fn editor(handle: PickerHandle) -> impl IntoView {
    let picker = handle.picker;

    v_stack((
        // Title + Cancel / OK
        h_stack((
            label(|| "Choose Color").style(|s| s.font_size(12.0)),
            empty().style(|s| s.flex_grow(1.0)),
            action_button("Cancel", false, move || handle.apply(Picker::cancel)),
            action_button("OK", true, move || handle.apply(Picker::commit)),
        ))
        .style(|s| s.items_center().gap(constants::GAP / 2.0)),
        // Current → new
        h_stack((
            preview_swatch(move || picker.with(|p| p.original()), "Current"),
            label(|| "→").style(|s| s.color(constants::MUTED)),
            preview_swatch(move || picker.with(|p| p.pending()), "New"),
        ))
        .style(|s| s.items_center().gap(constants::GAP)),
        sv_panel(handle),
        hue_strip(handle),
        // Hex + copy, then R / G / B
        h_stack((
            hex_input(handle),
            copy_button(move || picker.with_untracked(|p| p.pending().to_hex())),
            empty().style(|s| s.flex_grow(1.0)),
            channel_input(handle, Channel::Red),
            channel_input(handle, Channel::Green),
            channel_input(handle, Channel::Blue),
        ))
        .style(|s| s.gap(constants::GAP / 2.0).items_start()),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .width(constants::EDITOR_WIDTH)
            .padding(constants::PADDING)
            .border_radius(constants::RADIUS * 2.0)
            .border(1.0)
            .border_color(constants::BORDER)
            .background(constants::EDITOR_BACKGROUND)
    })
}
