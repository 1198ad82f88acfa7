//! Error types for PresetFX.
//!
//! Uses thiserror for structured errors with context. Every error maps onto one
//! of four coarse [`ErrorKind`]s so callers at the host boundary can branch on
//! the failure class without matching every variant.

use crate::core::types::PresetId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification shared by all PresetFX errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or mismatched buffers, malformed values.
    InvalidArgument,
    /// Unknown preset id, name, index, or category.
    NotFound,
    /// Duplicate category name or preset id.
    AlreadyExists,
    /// Attempt to delete or rename a built-in.
    Protected,
}

/// Top-level error type for PresetFX.
#[derive(Error, Debug)]
pub enum PresetFxError {
    /// Catalog lookup or mutation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Rendering failed.
    #[error("Effect error: {0}")]
    Effect(#[from] EffectError),

    /// Configuration did not parse.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// File access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode or encode failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Errors raised by catalog lookups and mutations.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogError {
    /// No preset has this id.
    #[error("Preset {0} not found")]
    PresetNotFound(PresetId),

    /// No preset has this name.
    #[error("No preset named '{0}'")]
    PresetNameNotFound(String),

    /// Ordinal index past the end.
    #[error("Preset index {index} out of range (catalog holds {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of presets.
        len: usize,
    },

    /// No category has this name.
    #[error("Category '{0}' not found")]
    CategoryNotFound(String),

    /// Category name already taken.
    #[error("Category '{0}' already exists")]
    CategoryExists(String),

    /// Preset id already taken.
    #[error("Preset {0} already exists")]
    PresetExists(PresetId),

    /// Built-in categories cannot be deleted or renamed.
    #[error("Category '{0}' is built in and cannot be modified")]
    ProtectedCategory(String),

    /// Built-in presets cannot be deleted.
    #[error("Preset {0} is built in and cannot be deleted")]
    ProtectedPreset(PresetId),

    /// A session operation needs a selection.
    #[error("No preset is selected")]
    NothingSelected,

    /// Every `u32` id has been handed out.
    #[error("Preset id space is exhausted")]
    IdsExhausted,

    /// Preset fields break a construction rule.
    #[error("Invalid preset: {reason}")]
    InvalidPreset {
        /// What was wrong.
        reason: String,
    },
}

/// Errors raised by the effect pipeline before any pixel is written.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EffectError {
    /// A required argument was absent.
    #[error("Missing {0}")]
    Missing(String),

    /// Input and output sizes differ.
    #[error("Dimension mismatch: input is {input_width}x{input_height}, output is {output_width}x{output_height}")]
    DimensionMismatch {
        /// Input width.
        input_width: u32,
        /// Input height.
        input_height: u32,
        /// Output width.
        output_width: u32,
        /// Output height.
        output_height: u32,
    },

    /// Rows are shorter than `width * 4` bytes.
    #[error("Row stride {stride} is smaller than {min} bytes")]
    StrideTooSmall {
        /// Given stride.
        stride: usize,
        /// Minimum stride.
        min: usize,
    },

    /// Storage does not cover every row.
    #[error("Buffer holds {actual} bytes, needs at least {required}")]
    BufferTooSmall {
        /// Bytes needed.
        required: usize,
        /// Bytes present.
        actual: usize,
    },

    /// The preset could not be looked up.
    #[error("Preset lookup failed: {0}")]
    Lookup(#[from] CatalogError),
}

// ============================================================================
// Error Utilities
// ============================================================================

impl CatalogError {
    /// Get the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::PresetNotFound(_)
            | CatalogError::PresetNameNotFound(_)
            | CatalogError::IndexOutOfRange { .. }
            | CatalogError::CategoryNotFound(_)
            | CatalogError::NothingSelected => ErrorKind::NotFound,
            CatalogError::CategoryExists(_) | CatalogError::PresetExists(_) => {
                ErrorKind::AlreadyExists
            }
            CatalogError::ProtectedCategory(_) | CatalogError::ProtectedPreset(_) => {
                ErrorKind::Protected
            }
            CatalogError::InvalidPreset { .. } | CatalogError::IdsExhausted => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

impl EffectError {
    /// Get the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EffectError::Lookup(inner) => inner.kind(),
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl PresetFxError {
    /// Get the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PresetFxError::Catalog(e) => e.kind(),
            PresetFxError::Effect(e) => e.kind(),
            PresetFxError::Config(_) | PresetFxError::Io(_) | PresetFxError::Image(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

/// Result type alias for PresetFX operations.
pub type PresetFxResult<T> = Result<T, PresetFxError>;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Result type alias for pipeline operations.
pub type EffectResult<T> = Result<T, EffectError>;
