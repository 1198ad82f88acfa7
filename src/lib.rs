//! # PresetFX - Preset-driven Image Effects
//!
//! PresetFX keeps a catalog of named, categorized effect presets, lets hosts
//! search and filter them, and renders a chosen preset onto RGBA8 frames at a
//! given intensity.
//!
//! ## Features
//!
//! - **Preset Catalog**: Built-in transitions, effects and color grades plus
//!   runtime custom presets and categories, with favorites
//! - **Search**: Text, type, category and favorites filters evaluated in
//!   catalog order
//! - **Effect Pipeline**: Per-pixel kernels over stride-aware frame buffers that
//!   validate before writing
//! - **Sessions**: Selection, filter and live-preview state for a host panel
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use presetfx::prelude::*;
//!
//! let catalog = PresetCatalog::with_builtins();
//! let ids = SearchEngine::new(&catalog).search(&SearchFilter::new().with_text("sunset"));
//! let preset = catalog.get_by_id(ids[0]).unwrap();
//!
//! let input = FrameBuffer::filled(64, 64, [120, 110, 100, 255]);
//! let mut output = FrameBuffer::new(64, 64);
//! EffectPipeline::new()
//!     .apply(preset, &input, &mut output, preset.default_intensity)
//!     .unwrap();
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Preset values, frame buffers and error handling
//! - [`catalog`]: Preset and category store, built-ins, shared handle
//! - [`search`]: Search filters and the search engine
//! - [`effects`]: Kernel dispatch and the effect pipeline
//! - [`session`]: Selection and preview coordination
//! - [`config`]: TOML configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod core;
pub mod effects;
pub mod search;
pub mod session;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use presetfx::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::frame::FrameBuffer;
    pub use crate::core::types::{Category, Preset, PresetBuilder, PresetDraft, PresetId, PresetType};

    // Errors
    pub use crate::core::error::{CatalogError, EffectError, ErrorKind, PresetFxError, PresetFxResult};

    // Catalog
    pub use crate::catalog::builtin::ids as builtin_ids;
    pub use crate::catalog::{CatalogStats, PresetCatalog, SharedCatalog};

    // Search
    pub use crate::search::{SearchEngine, SearchFilter};

    // Effects
    pub use crate::effects::{intensity_from_slider, EffectPipeline, Kernel, PipelineOptions};

    // Session and configuration
    pub use crate::config::EngineConfig;
    pub use crate::session::{PresetSession, SessionOptions};
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
        assert_eq!(super::NAME, "presetfx");
    }

    #[test]
    fn test_search_then_apply() {
        let catalog = PresetCatalog::with_builtins();
        let ids = SearchEngine::new(&catalog).search(&SearchFilter::new().with_text("sunset"));
        assert_eq!(ids, vec![builtin_ids::WARM_SUNSET]);

        let preset = catalog.get_by_id(ids[0]).unwrap();
        let input = FrameBuffer::filled(4, 4, [100, 100, 100, 255]);
        let output = EffectPipeline::new().render(preset, &input, 1.0).unwrap();
        let [r, g, b, a] = output.pixel(1, 1);
        assert!(r > g && g > b);
        assert_eq!(a, 255);
    }

    #[test]
    fn test_custom_preset_end_to_end() {
        let shared = SharedCatalog::default();
        shared.write().create_category("Looks", "My looks").unwrap();
        let draft = Preset::builder("Flat", PresetType::Custom)
            .category("Looks")
            .tag("flat")
            .default_intensity(0.4)
            .build()
            .unwrap();
        let id = shared.write().add_preset(draft).unwrap();

        let mut session = PresetSession::new(shared.clone(), EffectPipeline::new());
        session.set_search_text("flat");
        assert_eq!(session.filtered_presets(), &[id]);

        session.select_preset(id).unwrap();
        let input = FrameBuffer::filled(2, 2, [9, 8, 7, 6]);
        let mut output = FrameBuffer::new(2, 2);
        session.apply_selected(&input, &mut output, None).unwrap();
        assert_eq!(output, input);

        let removed = shared.write().delete_category("Looks").unwrap();
        assert_eq!(removed, vec![id]);
        session.apply_filters();
        assert!(session.filtered_presets().is_empty());
    }
}
