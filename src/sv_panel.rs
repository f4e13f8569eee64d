//! Saturation/value panel.
//!
//! Horizontal position maps to saturation (left 0, right 1) and vertical
//! position to value (top 1, bottom 0), at the picker's current hue. The
//! plane is rasterized to an RGBA8 buffer at a fixed resolution, scaled to
//! the widget, and only re-rasterized when the hue changes.

use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect, Size};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{SignalWith, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::color::Hsv;
use crate::constants;
use crate::editor::PickerHandle;
use crate::gesture::Surface;
use crate::math;

/// Rasterize the saturation/value plane for `hue` to an RGBA8 buffer.
///
/// Column 0 is saturation 0, the last column saturation 1; row 0 is value
/// 1, the last row value 0.
fn rasterize_plane(width: u32, height: u32, hue: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    let col_span = (width - 1).max(1) as f64;
    let row_span = (height - 1).max(1) as f64;

    for py in 0..height {
        let v = 1.0 - py as f64 / row_span;
        let row_offset = (py * width * 4) as usize;
        for px in 0..width {
            let s = px as f64 / col_span;
            let c = math::hsv_to_rgb(hue, s, v);
            let offset = row_offset + (px * 4) as usize;
            buf[offset] = c.r();
            buf[offset + 1] = c.g();
            buf[offset + 2] = c.b();
            buf[offset + 3] = 255;
        }
    }
    buf
}

/// Hue bucket the cached raster was built for (tenths of a degree).
fn hue_key(hue: f64) -> u32 {
    (hue * 10.0).round() as u32
}

pub(crate) struct SaturationPanel {
    id: ViewId,
    handle: PickerHandle,
    held: bool,
    hsv: Hsv,
    size: floem::taffy::prelude::Size<f32>,
    plane_img: Option<peniko::Image>,
    plane_hash: Vec<u8>,
    cached_hue: Option<u32>,
}

/// Creates the saturation/value panel for the picker behind `handle`.
pub(crate) fn sv_panel(handle: PickerHandle) -> SaturationPanel {
    let id = ViewId::new();

    create_effect(move |_| {
        let hsv = handle.picker.with(|p| p.hsv());
        id.update_state(hsv);
    });

    SaturationPanel {
        id,
        handle,
        held: false,
        hsv: handle.picker.with_untracked(|p| p.hsv()),
        size: Default::default(),
        plane_img: None,
        plane_hash: Vec::new(),
        cached_hue: None,
    }
    .style(|s| {
        s.width_full()
            .height(constants::PANEL_HEIGHT)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl SaturationPanel {
    fn local_size(&self) -> Size {
        Size::new(self.size.width as f64, self.size.height as f64)
    }

    fn cursor_position(&self) -> Point {
        let size = self.local_size();
        Point::new(
            self.hsv.s() * size.width,
            (1.0 - self.hsv.v()) * size.height,
        )
    }

    fn release(&mut self) {
        if self.held {
            self.held = false;
            self.handle.release();
        }
    }

    fn ensure_plane_image(&mut self) {
        let key = hue_key(self.hsv.h());
        if self.plane_img.is_some() && self.cached_hue == Some(key) {
            return;
        }

        let side = constants::PLANE_RASTER_SIZE;
        let pixels = rasterize_plane(side, side, self.hsv.h());
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, side, side);

        self.plane_hash = blob.id().to_le_bytes().to_vec();
        self.plane_img = Some(img);
        self.cached_hue = Some(key);
    }
}

impl Drop for SaturationPanel {
    fn drop(&mut self) {
        // Torn down mid-drag: the pointer capture goes with the view.
        self.release();
    }
}

impl View for SaturationPanel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(hsv) = state.downcast::<Hsv>() {
            self.hsv = *hsv;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        let size = self.local_size();
        match event {
            Event::PointerDown(e) if e.count >= 2 => {
                self.release();
                self.handle
                    .apply(|p| p.double_click(Surface::SaturationValue, e.pos, size));
                EventPropagation::Stop
            }
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.handle
                    .apply(|p| p.begin_drag(Surface::SaturationValue, e.pos, size));
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.handle
                        .apply(|p| p.drag_to(Surface::SaturationValue, e.pos, size));
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
        if size.width == 0.0 || size.height == 0.0 {
            return;
        }
        let rect = size.to_rect();
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);
        self.ensure_plane_image();
        if let Some(ref img) = self.plane_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.plane_hash,
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

        // Cursor, filled with the pending color
        let cur_pt = self.cursor_position();
        let fill = self.hsv.to_rgb();
        let cursor = Circle::new(cur_pt, constants::CURSOR_RADIUS);
        cx.fill(&cursor, Color::rgb8(fill.r(), fill.g(), fill.b()), 0.0);
        let outer = Circle::new(cur_pt, constants::CURSOR_RADIUS + 1.0);
        cx.stroke(
            &outer,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        cx.stroke(&cursor, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_corners() {
        let buf = rasterize_plane(4, 4, 0.0);
        let px = |x: usize, y: usize| {
            let o = (y * 4 + x) * 4;
            (buf[o], buf[o + 1], buf[o + 2], buf[o + 3])
        };
        assert_eq!(px(0, 0), (255, 255, 255, 255));
        assert_eq!(px(3, 0), (255, 0, 0, 255));
        assert_eq!(px(0, 3), (0, 0, 0, 255));
        assert_eq!(px(3, 3), (0, 0, 0, 255));
    }

    #[test]
    fn hue_key_buckets_tenths() {
        assert_eq!(hue_key(0.0), 0);
        assert_eq!(hue_key(120.04), 1200);
        assert_eq!(hue_key(359.99), 3600);
    }
}
