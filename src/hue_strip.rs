//! Hue strip (0–360°, left to right).
//!
//! Renders the fully saturated hue spectrum as a rasterized image, avoiding
//! vger's broken linear gradient coordinate handling.

use std::sync::Arc;

use floem::kurbo::{Rect, Size};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{SignalWith, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::constants;
use crate::editor::PickerHandle;
use crate::gesture::Surface;
use crate::math;

/// Rasterize the hue spectrum: hue 0 on the left, just under 360 on the right.
fn rasterize_hue_spectrum(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let hue = 360.0 * px as f64 / width.max(1) as f64;
        let c = math::hsv_to_rgb(hue, 1.0, 1.0);
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = c.r();
            buf[offset + 1] = c.g();
            buf[offset + 2] = c.b();
            buf[offset + 3] = 255;
        }
    }
    buf
}

pub(crate) struct HueStrip {
    id: ViewId,
    handle: PickerHandle,
    held: bool,
    hue: f64,
    size: floem::taffy::prelude::Size<f32>,
    /// Spectrum image; independent of the current color, so built once.
    spectrum_img: Option<peniko::Image>,
    spectrum_hash: Vec<u8>,
}

/// Creates the hue strip for the picker behind `handle`.
pub(crate) fn hue_strip(handle: PickerHandle) -> HueStrip {
    let id = ViewId::new();

    create_effect(move |_| {
        let hue = handle.picker.with(|p| p.hsv().h());
        id.update_state(hue);
    });

    HueStrip {
        id,
        handle,
        held: false,
        hue: handle.picker.with_untracked(|p| p.hsv().h()),
        size: Default::default(),
        spectrum_img: None,
        spectrum_hash: Vec::new(),
    }
    .style(|s| {
        s.width_full()
            .height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HueStrip {
    fn local_size(&self) -> Size {
        Size::new(self.size.width as f64, self.size.height as f64)
    }

    fn release(&mut self) {
        if self.held {
            self.held = false;
            self.handle.release();
        }
    }

    fn ensure_spectrum_image(&mut self) {
        if self.spectrum_img.is_some() {
            return;
        }
        let width = constants::HUE_RASTER_WIDTH;
        let pixels = rasterize_hue_spectrum(width, 1);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, width, 1);

        self.spectrum_hash = blob.id().to_le_bytes().to_vec();
        self.spectrum_img = Some(img);
    }
}

impl Drop for HueStrip {
    fn drop(&mut self) {
        self.release();
    }
}

impl View for HueStrip {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(hue) = state.downcast::<f64>() {
            self.hue = *hue;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        let size = self.local_size();
        match event {
            Event::PointerDown(e) if e.count >= 2 => {
                self.release();
                self.handle
                    .apply(|p| p.double_click(Surface::Hue, e.pos, size));
                EventPropagation::Stop
            }
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.handle.apply(|p| p.begin_drag(Surface::Hue, e.pos, size));
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.handle.apply(|p| p.drag_to(Surface::Hue, e.pos, size));
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.release();
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let size = self.local_size();
        let (w, h) = (size.width, size.height);
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = size.to_rect();
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        self.ensure_spectrum_image();
        if let Some(ref img) = self.spectrum_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.spectrum_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb ring, kept inside the strip at the ends
        let radius = constants::THUMB_RADIUS;
        let thumb_x = (self.hue / 360.0 * w).clamp(radius, (w - radius).max(radius));
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let innermost = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 3.0);
        cx.stroke(
            &innermost,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
