//! Selection, filter and preview state held by a session.

use crate::core::frame::FrameBuffer;
use crate::core::types::{PresetId, PresetType};
use serde::{Deserialize, Serialize};

/// Session options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Start a preview whenever a preset is selected, even if preview mode is off.
    pub preview_on_select: bool,
    /// Host slider position, 0-100, used instead of a preset's own default
    /// intensity when no intensity is supplied. `None` keeps preset defaults.
    pub default_slider: Option<f64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            preview_on_select: false,
            default_slider: None,
        }
    }
}

impl SessionOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable preview on select.
    pub fn with_preview_on_select(mut self, enabled: bool) -> Self {
        self.preview_on_select = enabled;
        self
    }

    /// Set the default slider value.
    pub fn with_default_slider(mut self, value: f64) -> Self {
        self.default_slider = Some(value);
        self
    }
}

/// Panel selection and filter state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Whether the panel is shown.
    pub is_visible: bool,
    /// Whether preview mode is on.
    pub is_preview_mode: bool,
    /// Selected preset, if any.
    pub selected_preset: Option<PresetId>,
    /// 0 selects all categories; `i > 0` selects the `i - 1`th category.
    pub selected_category_index: usize,
    /// Free-text search.
    pub search_text: String,
    /// Only list favorites.
    pub show_favorites_only: bool,
    /// Type to filter by.
    pub type_filter: Option<PresetType>,
    /// Whether the type filter is active.
    pub use_type_filter: bool,
}

/// Live preview state.
#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    /// Whether a preview is running.
    pub is_active: bool,
    /// Preset being previewed.
    pub preset: Option<PresetId>,
    /// Intensity of the preview.
    pub intensity: f64,
    /// A render is pending.
    pub needs_update: bool,
    /// Last rendered preview.
    pub buffer: Option<FrameBuffer>,
}

impl PreviewState {
    /// Reset to the inactive state and drop the rendered buffer.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
