//! Core types for the PresetFX effect engine.
//!
//! This module contains the foundational types shared by the catalog, the
//! search engine and the effect pipeline:
//! - Preset and category values
//! - The RGBA8 frame buffer abstraction
//! - Error types

pub mod error;
pub mod frame;
pub mod types;

// Re-export commonly used types
pub use error::{CatalogError, EffectError, ErrorKind, PresetFxError};
pub use frame::FrameBuffer;
pub use types::{Category, Preset, PresetBuilder, PresetDraft, PresetId, PresetType, MAX_TAGS};
