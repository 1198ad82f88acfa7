//! Preset session.
//!
//! A [`PresetSession`] ties a catalog, a search filter built from panel state,
//! and the effect pipeline together for one plugin instance. It refers to
//! presets only by id.

pub mod state;

pub use state::{PreviewState, SessionOptions, SessionState};

use crate::catalog::SharedCatalog;
use crate::core::error::{CatalogError, PresetFxResult};
use crate::core::frame::FrameBuffer;
use crate::core::types::{Category, Preset, PresetId, PresetType};
use crate::effects::pipeline::{intensity_from_slider, EffectPipeline};
use crate::search::SearchFilter;
use log::{debug, info};

/// Selection, filtering and preview coordinator.
#[derive(Debug)]
pub struct PresetSession {
    catalog: SharedCatalog,
    pipeline: EffectPipeline,
    options: SessionOptions,
    state: SessionState,
    preview: PreviewState,
    filtered: Vec<PresetId>,
    categories: Vec<Category>,
}

impl PresetSession {
    /// Create a session over a catalog.
    pub fn new(catalog: SharedCatalog, pipeline: EffectPipeline) -> Self {
        Self::with_options(catalog, pipeline, SessionOptions::default())
    }

    /// Create a session with explicit options.
    pub fn with_options(catalog: SharedCatalog, pipeline: EffectPipeline, options: SessionOptions) -> Self {
        let mut session = Self {
            catalog,
            pipeline,
            options,
            state: SessionState {
                is_visible: true,
                ..SessionState::default()
            },
            preview: PreviewState::default(),
            filtered: Vec::new(),
            categories: Vec::new(),
        };
        session.refresh_categories();
        session
    }

    /// The shared catalog.
    pub fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }

    /// The effect pipeline.
    pub fn pipeline(&self) -> &EffectPipeline {
        &self.pipeline
    }

    /// Panel state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Preview state.
    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    /// Categories as last refreshed.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Selected preset id.
    pub fn selected_preset(&self) -> Option<PresetId> {
        self.state.selected_preset
    }

    /// Re-read the category list from the catalog and re-filter.
    ///
    /// The selected category is followed by name. If it no longer exists the
    /// selection falls back to all.
    pub fn refresh_categories(&mut self) {
        let selected = self.selected_category().map(|c| c.name.clone());
        self.categories = self.catalog.read().categories().cloned().collect();
        self.state.selected_category_index = selected
            .and_then(|name| self.categories.iter().position(|c| c.name == name))
            .map(|position| position + 1)
            .unwrap_or(0);
        self.apply_filters();
    }

    /// The selected category, or `None` when all categories are shown.
    pub fn selected_category(&self) -> Option<&Category> {
        self.state
            .selected_category_index
            .checked_sub(1)
            .and_then(|i| self.categories.get(i))
    }

    /// The filter described by the current panel state.
    pub fn current_filter(&self) -> SearchFilter {
        let mut filter = SearchFilter::new()
            .with_text(self.state.search_text.clone())
            .favorites_only(self.state.show_favorites_only);

        filter.type_filter = self.state.type_filter;
        filter.use_type_filter = self.state.use_type_filter && self.state.type_filter.is_some();

        if let Some(category) = self.selected_category() {
            filter = filter.with_category(category.name.clone());
        }
        filter
    }

    /// Re-run the search for the current filter.
    pub fn apply_filters(&mut self) {
        let filter = self.current_filter();
        self.filtered = self.catalog.search(&filter);
        debug!("Session filter matched {} preset(s)", self.filtered.len());
    }

    /// Ids listed by the last search.
    pub fn filtered_presets(&self) -> &[PresetId] {
        &self.filtered
    }

    /// Presets listed by the last search, cloned from the catalog.
    pub fn filtered_preset_values(&self) -> Vec<Preset> {
        let catalog = self.catalog.read();
        self.filtered
            .iter()
            .filter_map(|id| catalog.get_by_id(*id).ok().cloned())
            .collect()
    }

    // ------------------------------------------------------------------
    // Selection and filters
    // ------------------------------------------------------------------

    /// Select a preset. Restarts the preview at its default intensity when
    /// preview mode is on.
    pub fn select_preset(&mut self, id: PresetId) -> PresetFxResult<()> {
        let intensity = self.fallback_intensity(&self.lookup(id)?);
        self.state.selected_preset = Some(id);
        debug!("Selected preset {}", id);

        if self.state.is_preview_mode || self.options.preview_on_select {
            self.start_preview(id, intensity)?;
        }
        Ok(())
    }

    /// Select a category by panel index (0 = all) and re-filter.
    pub fn select_category(&mut self, index: usize) {
        self.state.selected_category_index = index;
        self.apply_filters();
    }

    /// Set the search text and re-filter.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
        self.apply_filters();
    }

    /// Set the type filter and re-filter.
    pub fn set_type_filter(&mut self, preset_type: PresetType, enabled: bool) {
        self.state.type_filter = Some(preset_type);
        self.state.use_type_filter = enabled;
        self.apply_filters();
    }

    /// Flip favorites-only and re-filter.
    pub fn toggle_favorites_only(&mut self) {
        self.state.show_favorites_only = !self.state.show_favorites_only;
        self.apply_filters();
    }

    /// Flip the selected preset's favorite flag and re-filter. Returns the new flag.
    pub fn toggle_selected_favorite(&mut self) -> PresetFxResult<bool> {
        let id = self.state.selected_preset.ok_or(CatalogError::NothingSelected)?;
        let favorite = self.catalog.toggle_favorite(id)?;
        self.apply_filters();
        Ok(favorite)
    }

    // ------------------------------------------------------------------
    // Preview
    // ------------------------------------------------------------------

    /// Start previewing a preset.
    pub fn start_preview(&mut self, id: PresetId, intensity: f64) -> PresetFxResult<()> {
        self.lookup(id)?;
        self.preview.is_active = true;
        self.preview.preset = Some(id);
        self.preview.intensity = intensity;
        self.preview.needs_update = true;
        self.state.is_preview_mode = true;
        info!("Preview started for preset {} at {:.2}", id, intensity);
        Ok(())
    }

    /// Stop the preview and drop its buffer.
    pub fn stop_preview(&mut self) {
        if self.preview.is_active {
            debug!("Preview stopped");
        }
        self.preview.clear();
        self.state.is_preview_mode = false;
    }

    /// Turn preview mode off, or on for the selected preset.
    ///
    /// Does nothing when turning on with no selection.
    pub fn toggle_preview(&mut self) -> PresetFxResult<()> {
        if self.state.is_preview_mode {
            self.stop_preview();
            return Ok(());
        }
        if let Some(id) = self.state.selected_preset {
            let intensity = self.fallback_intensity(&self.lookup(id)?);
            self.start_preview(id, intensity)?;
        }
        Ok(())
    }

    /// Check whether a preview is running.
    pub fn is_preview_active(&self) -> bool {
        self.preview.is_active
    }

    /// Render the preview if an update is pending and return the preview buffer.
    ///
    /// Returns `None` when no preview is active. A new input size always
    /// triggers a render.
    pub fn render_preview(&mut self, input: &FrameBuffer) -> PresetFxResult<Option<&FrameBuffer>> {
        if !self.preview.is_active {
            return Ok(None);
        }
        let Some(id) = self.preview.preset else {
            return Ok(None);
        };

        let stale = self
            .preview
            .buffer
            .as_ref()
            .map(|b| b.dimensions() != input.dimensions())
            .unwrap_or(true);

        if self.preview.needs_update || stale {
            let mut output = FrameBuffer::new(input.width(), input.height());
            self.catalog
                .render(&self.pipeline, id, input, &mut output, self.preview.intensity)?;
            self.preview.buffer = Some(output);
            self.preview.needs_update = false;
        }
        Ok(self.preview.buffer.as_ref())
    }

    /// Apply the selected preset and leave preview mode.
    ///
    /// `None` uses the configured default slider, or the preset's default
    /// intensity when no slider default is set.
    pub fn apply_selected(
        &mut self,
        input: &FrameBuffer,
        output: &mut FrameBuffer,
        intensity: Option<f64>,
    ) -> PresetFxResult<()> {
        let id = self.state.selected_preset.ok_or(CatalogError::NothingSelected)?;
        let intensity = match intensity {
            Some(value) => value,
            None => self.fallback_intensity(&self.lookup(id)?),
        };
        self.catalog.render(&self.pipeline, id, input, output, intensity)?;
        self.stop_preview();
        info!("Applied preset {} at {:.2}", id, intensity);
        Ok(())
    }

    /// Intensity used when the caller supplies none.
    pub fn fallback_intensity(&self, preset: &Preset) -> f64 {
        preset.resolve_intensity(self.options.default_slider.map(intensity_from_slider))
    }

    fn lookup(&self, id: PresetId) -> PresetFxResult<Preset> {
        Ok(self.catalog.read().get_by_id(id)?.clone())
    }
}
