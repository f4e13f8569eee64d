//! Picker state machine.
//!
//! `Closed → Open → {commit, cancel} → Closed`. While open, the picker owns
//! a pending color that drags and keystrokes mutate; the owner's value is
//! never touched until commit (or, with live preview, is fed previews that
//! cancel takes back).
//!
//! Every mutating operation returns `Option<ColorValue>`: the value the
//! owner should adopt, if any. A single call yields at most one value.

use floem::kurbo::{Point, Size};
use tracing::{debug, trace, warn};

use crate::color::{Channel, ColorFormat, ColorValue, Hsv, Rgb};
use crate::config::{PickerConfig, TriggerWhileOpen};
use crate::gesture::{self, Drag, Surface};
use crate::input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Open,
}

/// Editing state for one color picker.
#[derive(Debug, Clone)]
pub struct Picker {
    config: PickerConfig,
    /// Latest value supplied by the owner.
    committed: ColorValue,
    /// Committed color as it was when the editor opened.
    opened_with: Rgb,
    pending: Rgb,
    hsv: Hsv,
    hex_text: String,
    phase: Phase,
    drag: Drag,
}

/// Owner values are read-only input; anything malformed becomes black.
fn normalize(value: &ColorValue) -> Rgb {
    value.to_rgb().unwrap_or_else(|error| {
        warn!(?value, %error, "Malformed color value, falling back to black");
        Rgb::BLACK
    })
}

impl Picker {
    pub fn new(value: ColorValue, config: PickerConfig) -> Self {
        let rgb = normalize(&value);
        Self {
            config,
            committed: value,
            opened_with: rgb,
            pending: rgb,
            hsv: rgb.to_hsv(),
            hex_text: rgb.to_hex(),
            phase: Phase::Closed,
            drag: Drag::default(),
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// The owner's current value.
    pub fn committed(&self) -> &ColorValue {
        &self.committed
    }

    /// The owner's current value, normalized.
    pub fn committed_rgb(&self) -> Rgb {
        normalize(&self.committed)
    }

    /// Committed color as it was when the editor last opened.
    pub fn original(&self) -> Rgb {
        self.opened_with
    }

    pub fn pending(&self) -> Rgb {
        self.pending
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Hex field text, including whatever partial input the user typed.
    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    /// Surface currently holding the pointer.
    pub fn dragging(&self) -> Option<Surface> {
        self.drag.active()
    }

    /// Record a new value from the owner.
    ///
    /// Pending state follows it only while closed; an open editor keeps the
    /// user's work.
    pub fn set_external(&mut self, value: ColorValue) {
        if value == self.committed {
            return;
        }
        trace!(?value, open = self.is_open(), "External color changed");
        self.committed = value;
        if !self.is_open() {
            self.reset_to(self.committed_rgb());
        }
    }

    /// Enable or disable the picker. Disabling an open picker cancels it.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<ColorValue> {
        self.config.disabled = disabled;
        if disabled { self.cancel() } else { None }
    }

    /// Open the editor, snapshotting the committed color. Returns false when
    /// disabled.
    pub fn open(&mut self) -> bool {
        if self.config.disabled {
            trace!("Ignoring open on disabled picker");
            return false;
        }
        if self.is_open() {
            return true;
        }
        self.opened_with = self.committed_rgb();
        self.reset_to(self.opened_with);
        self.phase = Phase::Open;
        debug!(color = %self.opened_with, "Picker opened");
        true
    }

    /// Swatch click.
    pub fn activate(&mut self) -> Option<ColorValue> {
        match self.phase {
            Phase::Closed => {
                self.open();
                None
            }
            Phase::Open => match self.config.trigger_while_open {
                TriggerWhileOpen::Cancel => self.cancel(),
                TriggerWhileOpen::StayOpen => None,
            },
        }
    }

    /// Pointer pressed on a surface: capture it and apply the position.
    pub fn begin_drag(&mut self, surface: Surface, pos: Point, size: Size) -> Option<ColorValue> {
        if !self.is_open() {
            return None;
        }
        self.drag.begin(surface);
        self.apply_position(surface, pos, size)
    }

    /// Pointer moved. Ignored unless `surface` holds the drag.
    pub fn drag_to(&mut self, surface: Surface, pos: Point, size: Size) -> Option<ColorValue> {
        if !self.drag.holds(surface) {
            return None;
        }
        self.apply_position(surface, pos, size)
    }

    /// Pointer released, capture lost, or the surface went away.
    pub fn end_drag(&mut self) {
        if let Some(surface) = self.drag.end() {
            trace!(?surface, "Drag ended");
        }
    }

    /// Double activation: position update, then commit and close.
    pub fn double_click(&mut self, surface: Surface, pos: Point, size: Size) -> Option<ColorValue> {
        if !self.is_open() {
            return None;
        }
        self.end_drag();
        self.apply_position(surface, pos, size);
        self.commit()
    }

    /// A keystroke in the hex field. Ignored while closed.
    pub fn hex_input(&mut self, raw: &str) -> Option<ColorValue> {
        if !self.is_open() {
            return None;
        }
        let text = input::normalize_hex_field(raw);
        let parsed = input::parse_hex_field(&text);
        self.hex_text = text;
        match parsed {
            Some(rgb) => {
                self.pending = rgb;
                self.hsv = self.hsv_keeping_hue(rgb);
                self.preview()
            }
            None => {
                trace!(text = %self.hex_text, "Hex input incomplete, color unchanged");
                None
            }
        }
    }

    /// A keystroke in one of the channel fields. Ignored while closed.
    pub fn channel_input(&mut self, channel: Channel, raw: &str) -> Option<ColorValue> {
        if !self.is_open() {
            return None;
        }
        let value = match input::parse_channel(raw) {
            Ok(value) => value,
            Err(error) => {
                trace!(?channel, %error, "Channel input ignored");
                return None;
            }
        };
        let rgb = self.pending.with_channel(channel, value);
        self.pending = rgb;
        self.hsv = self.hsv_keeping_hue(rgb);
        self.hex_text = rgb.to_hex();
        self.preview()
    }

    /// Promote the pending color, in the owner's representation, and close.
    pub fn commit(&mut self) -> Option<ColorValue> {
        if !self.is_open() {
            return None;
        }
        self.end_drag();
        let value = self.encode(self.pending);
        debug!(?value, "Picker committed");
        self.committed = value.clone();
        self.opened_with = self.pending;
        self.phase = Phase::Closed;
        Some(value)
    }

    /// Drop the pending edit and close.
    ///
    /// With live preview the color from open time is returned so the owner
    /// can undo the previews it already applied. Otherwise pending follows
    /// the owner's current value, which may have changed while open.
    pub fn cancel(&mut self) -> Option<ColorValue> {
        if !self.is_open() {
            return None;
        }
        self.end_drag();
        self.phase = Phase::Closed;
        debug!(color = %self.opened_with, "Picker cancelled");
        if self.config.live_preview {
            let value = self.encode(self.opened_with);
            self.committed = value.clone();
            self.reset_to(self.opened_with);
            Some(value)
        } else {
            self.reset_to(self.committed_rgb());
            None
        }
    }

    fn format(&self) -> ColorFormat {
        self.committed.format()
    }

    fn encode(&self, rgb: Rgb) -> ColorValue {
        ColorValue::from_rgb(rgb, self.format())
    }

    fn reset_to(&mut self, rgb: Rgb) {
        self.pending = rgb;
        self.hsv = rgb.to_hsv();
        self.hex_text = rgb.to_hex();
    }

    /// Gray, black and white carry no hue; keep the one the user picked.
    fn hsv_keeping_hue(&self, rgb: Rgb) -> Hsv {
        let hsv = rgb.to_hsv();
        if hsv.is_achromatic() {
            hsv.with_hue(self.hsv.h())
        } else {
            hsv
        }
    }

    fn apply_position(&mut self, surface: Surface, pos: Point, size: Size) -> Option<ColorValue> {
        self.hsv = match surface {
            Surface::SaturationValue => {
                let (s, v) = gesture::saturation_value_at(pos, size);
                self.hsv.with_saturation_value(s, v)
            }
            Surface::Hue => self.hsv.with_hue(gesture::hue_at(pos, size)),
        };
        self.pending = self.hsv.to_rgb();
        self.hex_text = self.pending.to_hex();
        trace!(?surface, hsv = ?self.hsv, "Pointer moved color");
        self.preview()
    }

    fn preview(&self) -> Option<ColorValue> {
        self.config
            .live_preview
            .then(|| self.encode(self.pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const PANEL: Size = Size::new(100.0, 100.0);
    const STRIP: Size = Size::new(360.0, 12.0);

    fn open_picker(value: ColorValue, config: PickerConfig) -> Picker {
        let mut picker = Picker::new(value, config);
        assert!(picker.open());
        picker
    }

    #[test]
    fn starts_closed_with_committed_color() {
        let picker = Picker::new(ColorValue::hex("#ABCDEF"), PickerConfig::default());
        assert_eq!(picker.phase(), Phase::Closed);
        assert_eq!(picker.pending(), Rgb::new(171, 205, 239));
        assert_eq!(picker.hex_text(), "#abcdef");
    }

    #[test]
    fn commit_returns_hex_for_hex_owner() {
        let mut picker = open_picker(ColorValue::hex("#000000"), PickerConfig::default());
        assert_eq!(picker.hex_input("f00"), None);
        assert_eq!(picker.commit(), Some(ColorValue::hex("#ff0000")));
        assert_eq!(picker.phase(), Phase::Closed);
        assert_eq!(picker.committed(), &ColorValue::hex("#ff0000"));
    }

    #[test]
    fn commit_returns_channels_for_array_owner() {
        let mut picker = open_picker(
            ColorValue::channels(0.0, 0.0, 0.0),
            PickerConfig::default(),
        );
        picker.channel_input(Channel::Green, "128");
        assert_eq!(
            picker.commit(),
            Some(ColorValue::channels(0.0, 128.0, 0.0))
        );
    }

    #[test]
    fn cancel_restores_color_from_open_time() {
        let mut picker = Picker::new(ColorValue::hex("#112233"), PickerConfig::default());
        picker.set_external(ColorValue::hex("#445566"));
        picker.open();

        picker.begin_drag(Surface::SaturationValue, Point::new(80.0, 10.0), PANEL);
        picker.drag_to(Surface::SaturationValue, Point::new(30.0, 70.0), PANEL);
        picker.end_drag();
        picker.hex_input("#abc");
        assert_ne!(picker.pending(), Rgb::new(0x44, 0x55, 0x66));

        assert_eq!(picker.cancel(), None);
        assert_eq!(picker.phase(), Phase::Closed);
        assert_eq!(picker.pending(), Rgb::new(0x44, 0x55, 0x66));
        assert_eq!(picker.hex_text(), "#445566");
    }

    #[test]
    fn panel_corners_set_saturation_and_value() {
        let mut picker = open_picker(ColorValue::hex("#ff0000"), PickerConfig::default());

        picker.begin_drag(Surface::SaturationValue, Point::new(0.0, 0.0), PANEL);
        assert_eq!((picker.hsv().s(), picker.hsv().v()), (0.0, 1.0));
        assert_eq!(picker.pending(), Rgb::WHITE);

        picker.drag_to(Surface::SaturationValue, Point::new(100.0, 100.0), PANEL);
        assert_eq!((picker.hsv().s(), picker.hsv().v()), (1.0, 0.0));
        assert_eq!(picker.pending(), Rgb::BLACK);
        assert_eq!(picker.hex_text(), "#000000");
    }

    #[test]
    fn drag_outside_bounds_clamps() {
        let mut picker = open_picker(ColorValue::hex("#ff0000"), PickerConfig::default());
        picker.begin_drag(Surface::SaturationValue, Point::new(50.0, 50.0), PANEL);
        picker.drag_to(Surface::SaturationValue, Point::new(400.0, -300.0), PANEL);
        assert_eq!(picker.pending(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn hue_strip_edges() {
        let mut picker = open_picker(ColorValue::hex("#ff0000"), PickerConfig::default());
        picker.begin_drag(Surface::Hue, Point::new(360.0, 6.0), STRIP);
        let h = picker.hsv().h();
        assert!(h > 359.0 && h < 360.0, "{h}");

        picker.drag_to(Surface::Hue, Point::new(0.0, 6.0), STRIP);
        assert_eq!(picker.hsv().h(), 0.0);

        picker.drag_to(Surface::Hue, Point::new(120.0, 6.0), STRIP);
        assert_eq!(picker.pending(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn moves_without_drag_are_ignored() {
        let mut picker = open_picker(ColorValue::hex("#ff0000"), PickerConfig::default());
        picker.drag_to(Surface::Hue, Point::new(120.0, 6.0), STRIP);
        assert_eq!(picker.pending(), Rgb::new(255, 0, 0));

        picker.begin_drag(Surface::Hue, Point::new(0.0, 6.0), STRIP);
        picker.drag_to(Surface::SaturationValue, Point::new(0.0, 0.0), PANEL);
        assert_eq!(picker.pending(), Rgb::new(255, 0, 0));

        picker.end_drag();
        assert_eq!(picker.dragging(), None);
        picker.drag_to(Surface::Hue, Point::new(120.0, 6.0), STRIP);
        assert_eq!(picker.pending(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn closed_picker_ignores_gestures() {
        let mut picker = Picker::new(ColorValue::hex("#ff0000"), PickerConfig::default());
        assert_eq!(
            picker.begin_drag(Surface::Hue, Point::new(120.0, 6.0), STRIP),
            None
        );
        assert_eq!(picker.dragging(), None);
        assert_eq!(picker.commit(), None);
        assert_eq!(picker.cancel(), None);
    }

    #[test]
    fn closed_picker_ignores_typed_input() {
        let config = PickerConfig::default().with_live_preview(true);
        let mut picker = Picker::new(ColorValue::hex("#000000"), config);
        assert_eq!(picker.hex_input("#ffffff"), None);
        assert_eq!(picker.channel_input(Channel::Red, "10"), None);
        assert!(!picker.is_open());
        assert_eq!(picker.pending(), Rgb::BLACK);
        assert_eq!(picker.hex_text(), "#000000");
        assert_eq!(picker.committed(), &ColorValue::hex("#000000"));
    }

    #[test]
    fn end_drag_releases_without_closing() {
        let mut picker = open_picker(ColorValue::hex("#ff0000"), PickerConfig::default());
        picker.begin_drag(Surface::Hue, Point::new(120.0, 6.0), STRIP);
        assert_eq!(picker.dragging(), Some(Surface::Hue));
        let pending = picker.pending();

        picker.end_drag();
        assert_eq!(picker.dragging(), None);
        assert!(picker.is_open());
        assert_eq!(picker.pending(), pending);
        assert_eq!(picker.committed(), &ColorValue::hex("#ff0000"));

        // A later release, e.g. from a view being dropped, is a no-op
        picker.end_drag();
        assert!(picker.is_open());
        assert_eq!(picker.pending(), pending);
    }

    #[test]
    fn double_click_commits_position() {
        let mut picker = open_picker(ColorValue::hex("#ff0000"), PickerConfig::default());
        let out = picker.double_click(Surface::Hue, Point::new(240.0, 6.0), STRIP);
        assert_eq!(out, Some(ColorValue::hex("#0000ff")));
        assert!(!picker.is_open());
        assert_eq!(picker.dragging(), None);
    }

    #[test]
    fn invalid_hex_keeps_text_without_change() {
        let config = PickerConfig::default().with_live_preview(true);
        let mut picker = open_picker(ColorValue::hex("#123456"), config);
        assert_eq!(picker.hex_input("zz"), None);
        assert_eq!(picker.hex_text(), "zz");
        assert_eq!(picker.pending(), Rgb::new(0x12, 0x34, 0x56));

        assert_eq!(
            picker.hex_input(" #ABCDEF "),
            Some(ColorValue::hex("#abcdef"))
        );
        assert_eq!(picker.hex_text(), "#abcdef");
        assert_eq!(picker.pending(), Rgb::new(171, 205, 239));
    }

    #[test]
    fn channel_input_updates_hex_and_hsv() {
        let mut picker = open_picker(ColorValue::hex("#000000"), PickerConfig::default());
        picker.channel_input(Channel::Red, "300");
        assert_eq!(picker.pending(), Rgb::new(255, 0, 0));
        assert_eq!(picker.hex_text(), "#ff0000");
        assert_eq!(picker.hsv().v(), 1.0);

        assert_eq!(picker.channel_input(Channel::Blue, "abc"), None);
        assert_eq!(picker.pending(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn gray_input_keeps_hue() {
        let mut picker = open_picker(ColorValue::hex("#ff0000"), PickerConfig::default());
        picker.begin_drag(Surface::Hue, Point::new(200.0, 6.0), STRIP);
        picker.end_drag();
        picker.hex_input("#808080");
        assert!((picker.hsv().h() - 200.0).abs() < 1e-9);
        assert_eq!(picker.hsv().s(), 0.0);
    }

    #[test]
    fn external_change_only_resyncs_while_closed() {
        let mut picker = Picker::new(ColorValue::hex("#000000"), PickerConfig::default());
        picker.set_external(ColorValue::hex("#00ff00"));
        assert_eq!(picker.pending(), Rgb::new(0, 255, 0));

        picker.open();
        picker.hex_input("#0000ff");
        picker.set_external(ColorValue::hex("#ff0000"));
        assert_eq!(picker.pending(), Rgb::new(0, 0, 255));
        assert_eq!(picker.committed(), &ColorValue::hex("#ff0000"));

        // Once closed, pending mirrors the owner's latest value
        assert_eq!(picker.cancel(), None);
        assert_eq!(picker.pending(), picker.committed_rgb());
        assert_eq!(picker.pending(), Rgb::new(255, 0, 0));
        assert_eq!(picker.hex_text(), "#ff0000");
    }

    #[test]
    fn live_preview_emits_and_cancel_restores() {
        let config = PickerConfig::default().with_live_preview(true);
        let mut picker = open_picker(ColorValue::channels(10.0, 20.0, 30.0), config);

        let preview = picker.channel_input(Channel::Red, "200");
        assert_eq!(preview, Some(ColorValue::channels(200.0, 20.0, 30.0)));
        // Owner echoes the preview back while the editor is open.
        picker.set_external(preview.unwrap());

        let restored = picker.cancel();
        assert_eq!(restored, Some(ColorValue::channels(10.0, 20.0, 30.0)));
        assert_eq!(picker.pending(), Rgb::new(10, 20, 30));
    }

    #[test]
    fn trigger_while_open_cancel() {
        let mut picker = Picker::new(ColorValue::hex("#102030"), PickerConfig::default());
        assert_eq!(picker.activate(), None);
        assert!(picker.is_open());
        picker.hex_input("#ffffff");
        assert_eq!(picker.activate(), None);
        assert!(!picker.is_open());
        assert_eq!(picker.pending(), Rgb::new(0x10, 0x20, 0x30));
    }

    #[test]
    fn trigger_while_open_stay_open() {
        let config = PickerConfig::default().with_trigger_while_open(TriggerWhileOpen::StayOpen);
        let mut picker = Picker::new(ColorValue::hex("#102030"), config);
        picker.activate();
        picker.hex_input("#ffffff");
        assert_eq!(picker.activate(), None);
        assert!(picker.is_open());
        assert_eq!(picker.pending(), Rgb::WHITE);
    }

    #[test]
    fn disabled_picker_does_not_open() {
        let mut picker = Picker::new(
            ColorValue::hex("#102030"),
            PickerConfig::default().with_disabled(true),
        );
        assert!(!picker.open());
        assert_eq!(picker.activate(), None);
        assert!(!picker.is_open());
    }

    #[test]
    fn disabling_open_picker_cancels() {
        let mut picker = open_picker(ColorValue::hex("#102030"), PickerConfig::default());
        picker.hex_input("#ffffff");
        assert_eq!(picker.set_disabled(true), None);
        assert!(!picker.is_open());
        assert_eq!(picker.pending(), Rgb::new(0x10, 0x20, 0x30));
        assert_eq!(picker.set_disabled(false), None);
        assert!(picker.open());
    }

    #[test]
    fn malformed_external_value_falls_back_to_black() {
        let mut picker = Picker::new(
            ColorValue::Channels(vec![1.0, 2.0]),
            PickerConfig::default(),
        );
        assert_eq!(picker.pending(), Rgb::BLACK);
        picker.open();
        assert_eq!(
            picker.commit(),
            Some(ColorValue::channels(0.0, 0.0, 0.0))
        );
    }

    #[test]
    fn reopening_after_commit_starts_from_new_color() {
        let mut picker = open_picker(ColorValue::hex("#000000"), PickerConfig::default());
        picker.hex_input("#00ff00");
        picker.commit();
        picker.open();
        picker.hex_input("#0000ff");
        picker.cancel();
        assert_eq!(picker.pending(), Rgb::new(0, 255, 0));
    }
}
