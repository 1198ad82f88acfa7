//! Preset and category value types.
//!
//! The preset type system uses an enum-based approach: the set of preset
//! families is closed, and each family selects a kernel family in the effect
//! pipeline.

use crate::core::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of tags a preset may carry.
pub const MAX_TAGS: usize = 10;

/// Unique identifier for a preset in a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetId(pub u32);

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for PresetId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Preset family. Selects which kernel family applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetType {
    /// Transitions between scenes (fades, wipes)
    Transition,
    /// Visual effects and filters
    Effect,
    /// Color correction and grading
    ColorGrade,
    /// User-defined presets with no built-in kernel
    Custom,
}

impl PresetType {
    /// Get the display name for this type.
    pub fn display_name(&self) -> &'static str {
        match self {
            PresetType::Transition => "Transition",
            PresetType::Effect => "Effect",
            PresetType::ColorGrade => "Color Grade",
            PresetType::Custom => "Custom",
        }
    }

    /// Get all types in display order.
    pub fn all() -> &'static [PresetType] {
        &[
            PresetType::Transition,
            PresetType::Effect,
            PresetType::ColorGrade,
            PresetType::Custom,
        ]
    }

    /// Parse a type from a loose, case-insensitive name.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().replace(['-', ' ', '_'], "").as_str() {
            "transition" | "transitions" => Some(PresetType::Transition),
            "effect" | "effects" => Some(PresetType::Effect),
            "colorgrade" | "colorgrading" | "color" => Some(PresetType::ColorGrade),
            "custom" => Some(PresetType::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for PresetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A named, typed configuration describing one visual transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Catalog-unique identifier
    pub id: PresetId,
    /// Display name (not necessarily unique)
    pub name: String,
    /// Name of the owning category
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Search tags, at most [`MAX_TAGS`]
    pub tags: Vec<String>,
    /// Preset family
    #[serde(rename = "type")]
    pub preset_type: PresetType,
    /// Suggested intensity in [0, 1]
    pub default_intensity: f64,
    /// Mirrors membership in the catalog's favorites set
    #[serde(default)]
    pub is_favorite: bool,
    /// Author metadata
    #[serde(default)]
    pub author: String,
    /// Version metadata
    #[serde(default)]
    pub version: String,
}

impl Preset {
    /// Create a builder for a new preset.
    pub fn builder(name: impl Into<String>, preset_type: PresetType) -> PresetBuilder {
        PresetBuilder::new(name, preset_type)
    }

    /// Check the construction-time constraints.
    pub fn validate(&self) -> CatalogResult<()> {
        validate_fields(&self.name, &self.tags, self.default_intensity)
    }

    /// Pick the caller's intensity, or this preset's default when none is given.
    pub fn resolve_intensity(&self, intensity: Option<f64>) -> f64 {
        intensity.unwrap_or(self.default_intensity)
    }

    /// Check whether the preset carries a tag (case-insensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

fn validate_fields(name: &str, tags: &[String], default_intensity: f64) -> CatalogResult<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::InvalidPreset {
            reason: "name must not be empty".to_string(),
        });
    }
    if tags.len() > MAX_TAGS {
        return Err(CatalogError::InvalidPreset {
            reason: format!("{} tags given, at most {} allowed", tags.len(), MAX_TAGS),
        });
    }
    if !(0.0..=1.0).contains(&default_intensity) {
        return Err(CatalogError::InvalidPreset {
            reason: format!("default intensity {} is outside [0, 1]", default_intensity),
        });
    }
    Ok(())
}

/// A validated preset that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetDraft {
    name: String,
    category: String,
    description: String,
    tags: Vec<String>,
    preset_type: PresetType,
    default_intensity: f64,
    author: String,
    version: String,
}

impl PresetDraft {
    /// Category the draft will be filed under.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Attach an id, producing a full preset.
    pub fn with_id(self, id: PresetId) -> Preset {
        Preset {
            id,
            name: self.name,
            category: self.category,
            description: self.description,
            tags: self.tags,
            preset_type: self.preset_type,
            default_intensity: self.default_intensity,
            is_favorite: false,
            author: self.author,
            version: self.version,
        }
    }
}

/// Builder for [`PresetDraft`].
#[derive(Debug, Clone)]
pub struct PresetBuilder {
    name: String,
    category: String,
    description: String,
    tags: Vec<String>,
    preset_type: PresetType,
    default_intensity: f64,
    author: String,
    version: String,
}

impl PresetBuilder {
    /// Create a new builder. Presets default to the "Custom" category.
    pub fn new(name: impl Into<String>, preset_type: PresetType) -> Self {
        Self {
            name: name.into(),
            category: "Custom".to_string(),
            description: String::new(),
            tags: Vec::new(),
            preset_type,
            default_intensity: 0.5,
            author: "Custom".to_string(),
            version: "1.0".to_string(),
        }
    }

    /// Set the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add one tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add several tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the default intensity.
    pub fn default_intensity(mut self, intensity: f64) -> Self {
        self.default_intensity = intensity;
        self
    }

    /// Set the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Validate and build the draft.
    pub fn build(self) -> CatalogResult<PresetDraft> {
        validate_fields(&self.name, &self.tags, self.default_intensity)?;
        Ok(PresetDraft {
            name: self.name,
            category: self.category,
            description: self.description,
            tags: self.tags,
            preset_type: self.preset_type,
            default_intensity: self.default_intensity,
            author: self.author,
            version: self.version,
        })
    }
}

/// A user-facing grouping label for presets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique name
    pub name: String,
    /// Description shown in the browser
    pub description: String,
    /// Number of presets filed under this category (derived by the catalog)
    #[serde(default)]
    pub preset_count: usize,
    /// Whether the category was created at runtime (and may be deleted)
    pub is_custom: bool,
}

impl Category {
    /// Create a runtime (custom) category.
    pub fn custom(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            preset_count: 0,
            is_custom: true,
        }
    }

    pub(crate) fn builtin(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            preset_count: 0,
            is_custom: false,
        }
    }
}
