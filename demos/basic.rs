//! Standalone demo: a hex-valued picker in a popover and an array-valued
//! picker inline, each echoing its committed value.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hsv_picker::{ColorValue, PickerConfig, Presentation, color_picker};

fn describe(value: &ColorValue) -> String {
    match value {
        ColorValue::Hex(hex) => hex.clone(),
        ColorValue::Channels(c) => format!("{c:?}"),
    }
}

fn main() {
    let hex = RwSignal::new(ColorValue::hex("#3b82f6"));
    let channels = RwSignal::new(ColorValue::channels(255.0, 136.0, 0.0));

    floem::Application::new()
        .window(
            move |_| {
                v_stack((
                    h_stack((
                        color_picker(
                            hex,
                            PickerConfig::default().with_presentation(Presentation::Overlay),
                        ),
                        label(move || describe(&hex.get())),
                    ))
                    .style(|s| s.gap(8.0).items_start()),
                    h_stack((
                        color_picker(channels, PickerConfig::default().with_live_preview(true)),
                        label(move || describe(&channels.get())),
                    ))
                    .style(|s| s.gap(8.0).items_start()),
                ))
                .style(|s| s.gap(16.0).padding(16.0))
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((420.0, 560.0))
                    .title("floem-hsv-picker"),
            ),
        )
        .run();
}
