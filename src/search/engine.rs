//! Search over a preset catalog.

use crate::catalog::PresetCatalog;
use crate::core::types::{Preset, PresetId, PresetType};
use crate::search::filter::SearchFilter;
use log::trace;

/// Evaluates filters against a borrowed catalog.
///
/// Results are always returned in catalog storage order.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    catalog: &'a PresetCatalog,
}

impl<'a> SearchEngine<'a> {
    /// Create a search engine over a catalog.
    pub fn new(catalog: &'a PresetCatalog) -> Self {
        Self { catalog }
    }

    /// Ids of every preset matching the filter.
    pub fn search(&self, filter: &SearchFilter) -> Vec<PresetId> {
        let results = self.collect(|p| filter.matches(p));
        trace!("Search {:?} matched {} preset(s)", filter.search_text, results.len());
        results
    }

    /// Ids of every preset filed under `category`.
    pub fn filter_by_category(&self, category: &str) -> Vec<PresetId> {
        self.search(&SearchFilter::new().with_category(category))
    }

    /// Ids of every preset of the given type.
    pub fn filter_by_type(&self, preset_type: PresetType) -> Vec<PresetId> {
        self.search(&SearchFilter::new().with_type(preset_type))
    }

    /// Ids of presets carrying every one of `tags` (case-insensitive).
    pub fn filter_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<PresetId> {
        self.collect(|p| tags.iter().all(|t| p.has_tag(t.as_ref())))
    }

    /// Resolve search results back to presets, skipping ids no longer present.
    pub fn resolve(&self, ids: &[PresetId]) -> Vec<&'a Preset> {
        ids.iter()
            .filter_map(|id| self.catalog.get_by_id(*id).ok())
            .collect()
    }

    fn collect<F>(&self, predicate: F) -> Vec<PresetId>
    where
        F: Fn(&Preset) -> bool,
    {
        self.catalog
            .presets()
            .filter(|p| predicate(p))
            .map(|p| p.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::{ids, COLOR_GRADING, CUSTOM, EFFECTS, TRANSITIONS};
    use proptest::prelude::*;

    #[test]
    fn test_empty_filter_returns_catalog_order() {
        let catalog = PresetCatalog::with_builtins();
        let results = SearchEngine::new(&catalog).search(&SearchFilter::new());
        assert_eq!(results, catalog.ids().collect::<Vec<_>>());
    }

    #[test]
    fn test_insertion_order_not_alphabetic() {
        let mut catalog = PresetCatalog::with_builtins();
        let draft = Preset::builder("Aardvark Fade", PresetType::Transition)
            .category(TRANSITIONS)
            .build()
            .unwrap();
        let id = catalog.add_preset(draft).unwrap();

        let results = SearchEngine::new(&catalog).filter_by_category(TRANSITIONS);
        assert_eq!(results, vec![ids::FADE, ids::ZOOM_BLUR, ids::SLIDE, id]);
    }

    #[test]
    fn test_text_search() {
        let catalog = PresetCatalog::with_builtins();
        let engine = SearchEngine::new(&catalog);

        // "vintage" is a Film Grain tag and Vintage Film's name.
        let results = engine.search(&SearchFilter::new().with_text("Vintage"));
        assert_eq!(results, vec![ids::FILM_GRAIN, ids::VINTAGE_FILM]);

        // "cinematic" appears in Vignette's description and Cinematic Blue's name.
        let results = engine.search(&SearchFilter::new().with_text("cinematic"));
        assert_eq!(results, vec![ids::VIGNETTE, ids::CINEMATIC_BLUE]);
    }

    #[test]
    fn test_combined_predicates() {
        let mut catalog = PresetCatalog::with_builtins();
        catalog.toggle_favorite(ids::TEAL_ORANGE).unwrap();
        catalog.toggle_favorite(ids::SLIDE).unwrap();

        let filter = SearchFilter::new()
            .with_text("orange")
            .with_category(COLOR_GRADING)
            .favorites_only(true);
        let results = SearchEngine::new(&catalog).search(&filter);
        assert_eq!(results, vec![ids::TEAL_ORANGE]);
    }

    #[test]
    fn test_filter_by_type() {
        let catalog = PresetCatalog::with_builtins();
        let engine = SearchEngine::new(&catalog);
        assert_eq!(
            engine.filter_by_type(PresetType::Effect),
            vec![ids::BLUR, ids::SHARPEN, ids::FILM_GRAIN, ids::VIGNETTE]
        );
        assert!(engine.filter_by_type(PresetType::Custom).is_empty());
    }

    #[test]
    fn test_filter_by_tags() {
        let catalog = PresetCatalog::with_builtins();
        let engine = SearchEngine::new(&catalog);
        assert_eq!(engine.filter_by_tags(&["cinematic"]), vec![ids::VIGNETTE, ids::CINEMATIC_BLUE]);
        assert_eq!(engine.filter_by_tags(&["CINEMATIC", "cool"]), vec![ids::CINEMATIC_BLUE]);
        assert_eq!(engine.filter_by_tags::<&str>(&[]).len(), catalog.len());
    }

    #[test]
    fn test_resolve_skips_missing() {
        let catalog = PresetCatalog::with_builtins();
        let engine = SearchEngine::new(&catalog);
        let presets = engine.resolve(&[ids::SLIDE, PresetId(404)]);
        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0].name, "Slide");
    }

    proptest! {
        #[test]
        fn prop_category_filter_agrees(
            which in 0usize..5,
            text in "[a-z]{0,3}",
            favorites in proptest::collection::vec(1u32..=12, 0..6),
        ) {
            let mut catalog = PresetCatalog::with_builtins();
            for raw in favorites {
                catalog.toggle_favorite(PresetId(raw)).unwrap();
            }
            let category = [TRANSITIONS, EFFECTS, COLOR_GRADING, CUSTOM, "Unknown"][which];
            let engine = SearchEngine::new(&catalog);

            let results = engine.search(&SearchFilter::new().with_category(category));
            for id in &results {
                prop_assert_eq!(&catalog.get_by_id(*id).unwrap().category, category);
            }
            prop_assert_eq!(&results, &engine.filter_by_category(category));

            // Adding predicates only narrows the result.
            let narrowed = engine.search(&SearchFilter::new().with_category(category).with_text(text));
            prop_assert!(narrowed.iter().all(|id| results.contains(id)));
        }

        #[test]
        fn prop_type_filter_agrees(which in 0usize..4) {
            let catalog = PresetCatalog::with_builtins();
            let preset_type = PresetType::all()[which];
            let engine = SearchEngine::new(&catalog);
            let filter = SearchFilter::new().with_type(preset_type);
            prop_assert_eq!(engine.search(&filter), engine.filter_by_type(preset_type));
        }
    }
}
