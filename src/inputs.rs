//! Text inputs for hex and per-channel color entry.
//!
//! Both fields validate on every keystroke. The field text is only replaced
//! from the picker when the picker's value actually moved, so partial input
//! (`"#ab"`, an emptied channel) survives until the user finishes typing.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, SignalWith, create_effect, create_memo};

use crate::color::Channel;
use crate::constants;
use crate::editor::PickerHandle;
use crate::input;

fn field_style(s: floem::style::Style, width: f32) -> floem::style::Style {
    s.width(width)
        .padding(2.0)
        .font_size(constants::INPUT_FONT)
        .font_family("monospace".to_string())
        .background(Color::WHITE)
        .border(1.0)
        .border_color(constants::BORDER)
        .border_radius(3.0)
}

fn is_enter(e: &floem::event::Event) -> bool {
    matches!(
        e,
        floem::event::Event::KeyDown(ke)
            if ke.key.logical_key
                == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
    )
}

/// A numeric input for one RGB channel of the pending color.
///
/// Each keystroke is parsed and clamped; text that is not a number leaves
/// the color alone. Enter or focus loss rewrites the text to the accepted
/// value.
pub(crate) fn channel_input(handle: PickerHandle, channel: Channel) -> impl IntoView {
    let picker = handle.picker;
    let value = create_memo(move |_| picker.with(|p| p.pending().channel(channel)));
    let text = RwSignal::new(value.get_untracked().to_string());

    // Picker → text, only when the channel value moved
    create_effect(move |_| {
        let v = value.get();
        let current = text.get_untracked();
        if input::parse_channel(&current) != Ok(v) {
            text.set(v.to_string());
        }
    });

    // Text → picker on every keystroke
    create_effect(move |_| {
        let raw = text.get();
        if input::parse_channel(&raw) == Ok(value.get_untracked()) {
            return;
        }
        handle.apply(|p| p.channel_input(channel, &raw));
    });

    let on_commit = move || {
        let formatted = value.get_untracked().to_string();
        if text.get_untracked() != formatted {
            text.set(formatted);
        }
    };
    let on_commit_clone = on_commit;

    v_stack((
        text_input(text)
            .style(|s| field_style(s, constants::INPUT_WIDTH))
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    on_commit_clone();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
        label(move || channel.label()).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(constants::MUTED)
                .justify_content(Some(floem::taffy::AlignContent::Center))
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A hex input field bound to the picker's hex text.
///
/// Invalid text stays in the field; only a complete `#rgb` or `#rrggbb`
/// changes the color.
pub(crate) fn hex_input(handle: PickerHandle) -> impl IntoView {
    let picker = handle.picker;
    let hex = create_memo(move |_| picker.with(|p| p.hex_text().to_string()));
    let text = RwSignal::new(hex.get_untracked());

    // Picker → text (drags, channel edits, lower-casing of typed text)
    create_effect(move |_| {
        let val = hex.get();
        if text.get_untracked() != val {
            text.set(val);
        }
    });

    // Text → picker on every keystroke
    create_effect(move |_| {
        let raw = text.get();
        if raw == hex.get_untracked() {
            return;
        }
        handle.apply(|p| p.hex_input(&raw));
    });

    // Enter / focus loss: drop leftover partial text in favor of the color
    let on_commit = move || {
        let canonical = picker.with_untracked(|p| p.pending().to_hex());
        if text.get_untracked() != canonical {
            text.set(canonical);
        }
    };
    let on_commit_clone = on_commit;

    v_stack((
        text_input(text)
            .style(|s| field_style(s, constants::HEX_INPUT_WIDTH))
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    on_commit_clone();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
        label(|| "Hex").style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(constants::MUTED)
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                constants::MUTED
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .align_self(Some(floem::taffy::AlignItems::Start))
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
    if let Err(error) = result {
        tracing::warn!(%error, "Failed to copy color to clipboard");
    }
}
