//! Picker configuration.

use serde::{Deserialize, Serialize};

/// Where the editor appears relative to the swatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    /// In the layout flow, pushing following content down.
    #[default]
    Inline,
    /// Floating above surrounding content.
    Overlay,
}

/// What a click on the swatch does while the editor is already open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerWhileOpen {
    /// Discard the edit and close.
    #[default]
    Cancel,
    /// Ignore the click; only OK / Cancel close the editor.
    StayOpen,
}

/// Behavior switches for a color picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub presentation: Presentation,
    pub trigger_while_open: TriggerWhileOpen,
    /// Send every pending change to the owner as it happens. Cancel then
    /// sends the original color back.
    pub live_preview: bool,
    /// Swatch ignores clicks; the editor cannot be opened.
    pub disabled: bool,
}

impl PickerConfig {
    #[must_use]
    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    #[must_use]
    pub fn with_trigger_while_open(mut self, behavior: TriggerWhileOpen) -> Self {
        self.trigger_while_open = behavior;
        self
    }

    #[must_use]
    pub fn with_live_preview(mut self, live: bool) -> Self {
        self.live_preview = live;
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
