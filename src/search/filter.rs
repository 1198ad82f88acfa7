//! Search filters and the predicate they evaluate.

use crate::core::types::{Preset, PresetType};
use serde::{Deserialize, Serialize};

/// A request value describing which presets to return.
///
/// The default filter has no active predicates and matches every preset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    /// Case-insensitive substring matched against name, description and tags.
    pub search_text: String,
    /// Type to match when `use_type_filter` is set.
    pub type_filter: Option<PresetType>,
    /// Whether the type predicate is active.
    pub use_type_filter: bool,
    /// Category name to match exactly when `use_category_filter` is set.
    pub category_filter: String,
    /// Whether the category predicate is active.
    pub use_category_filter: bool,
    /// Only return favorited presets.
    pub favorites_only: bool,
}

impl SearchFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Restrict to one preset type.
    pub fn with_type(mut self, preset_type: PresetType) -> Self {
        self.type_filter = Some(preset_type);
        self.use_type_filter = true;
        self
    }

    /// Restrict to one category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category_filter = category.into();
        self.use_category_filter = true;
        self
    }

    /// Restrict to favorites.
    pub fn favorites_only(mut self, enabled: bool) -> Self {
        self.favorites_only = enabled;
        self
    }

    /// Check if no predicate is active.
    pub fn is_empty(&self) -> bool {
        !self.favorites_only
            && !self.use_type_filter
            && !self.use_category_filter
            && self.search_text.is_empty()
    }

    /// Check whether a preset passes every active predicate.
    pub fn matches(&self, preset: &Preset) -> bool {
        if self.favorites_only && !preset.is_favorite {
            return false;
        }

        if self.use_type_filter && self.type_filter != Some(preset.preset_type) {
            return false;
        }

        if self.use_category_filter && preset.category != self.category_filter {
            return false;
        }

        if !self.search_text.is_empty() && !text_matches(preset, &self.search_text.to_lowercase()) {
            return false;
        }

        true
    }
}

/// Name first, then description, then tags in order.
fn text_matches(preset: &Preset, needle: &str) -> bool {
    preset.name.to_lowercase().contains(needle)
        || preset.description.to_lowercase().contains(needle)
        || preset.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PresetId;

    fn sample() -> Preset {
        Preset::builder("Warm Sunset", PresetType::ColorGrade)
            .category("Color Grading")
            .description("Orange and red tones")
            .tags(["warm", "Golden-Hour"])
            .build()
            .unwrap()
            .with_id(PresetId(9))
    }

    #[test]
    fn test_empty_filter_matches() {
        let filter = SearchFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&sample()));
    }

    #[test]
    fn test_text_sources() {
        let preset = sample();
        assert!(SearchFilter::new().with_text("SUNSET").matches(&preset));
        assert!(SearchFilter::new().with_text("red tones").matches(&preset));
        assert!(SearchFilter::new().with_text("golden").matches(&preset));
        assert!(!SearchFilter::new().with_text("teal").matches(&preset));
    }

    #[test]
    fn test_type_and_category_predicates() {
        let preset = sample();
        assert!(SearchFilter::new().with_type(PresetType::ColorGrade).matches(&preset));
        assert!(!SearchFilter::new().with_type(PresetType::Effect).matches(&preset));
        assert!(SearchFilter::new().with_category("Color Grading").matches(&preset));
        assert!(!SearchFilter::new().with_category("color grading").matches(&preset));
    }

    #[test]
    fn test_inactive_predicates_are_ignored() {
        let filter = SearchFilter {
            type_filter: Some(PresetType::Transition),
            category_filter: "Effects".to_string(),
            ..SearchFilter::default()
        };
        assert!(filter.matches(&sample()));
    }

    #[test]
    fn test_favorites_only() {
        let mut preset = sample();
        let filter = SearchFilter::new().favorites_only(true);
        assert!(!filter.matches(&preset));
        preset.is_favorite = true;
        assert!(filter.matches(&preset));
    }
}
