//! The preset catalog: presets, categories and favorites.

use crate::core::error::{CatalogError, CatalogResult};
use crate::core::types::{Category, Preset, PresetDraft, PresetId};
use indexmap::map::Entry;
use indexmap::IndexMap;
use log::{debug, info};
use std::collections::{BTreeSet, HashSet};

/// Summary counters for a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    /// Number of presets.
    pub presets: usize,
    /// Number of categories.
    pub categories: usize,
    /// Number of favorited presets.
    pub favorites: usize,
    /// Number of categories created at runtime.
    pub custom_categories: usize,
}

/// Authoritative in-memory store of presets, categories and favorites.
///
/// Presets are kept in insertion order and indexed by id. Category preset
/// counts are derived from the preset collection and are recomputed by every
/// structural mutation before it returns.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    /// Presets indexed by id, in insertion order.
    presets: IndexMap<PresetId, Preset>,
    /// Categories indexed by name, in insertion order.
    categories: IndexMap<String, Category>,
    /// Ids of favorited presets.
    favorites: BTreeSet<PresetId>,
    /// Ids of presets that ship with the catalog.
    builtin_presets: HashSet<PresetId>,
    /// Next id handed out by `add_preset`. Wider than `PresetId` so the
    /// counter can sit one past `u32::MAX` once the id space is used up.
    next_id: u64,
}

impl PresetCatalog {
    /// Create an empty catalog without built-ins.
    pub fn new() -> Self {
        Self {
            presets: IndexMap::new(),
            categories: IndexMap::new(),
            favorites: BTreeSet::new(),
            builtin_presets: HashSet::new(),
            next_id: 1,
        }
    }

    /// Create a catalog pre-populated with the built-in presets and categories.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        crate::catalog::builtin::register_all(&mut catalog);
        catalog
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// Get the preset at ordinal position `index`.
    pub fn get_by_index(&self, index: usize) -> CatalogResult<&Preset> {
        self.presets
            .get_index(index)
            .map(|(_, preset)| preset)
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                len: self.presets.len(),
            })
    }

    /// Get a preset by id.
    pub fn get_by_id(&self, id: PresetId) -> CatalogResult<&Preset> {
        self.presets.get(&id).ok_or(CatalogError::PresetNotFound(id))
    }

    /// Get the first preset whose name matches exactly (case-sensitive).
    pub fn get_by_name(&self, name: &str) -> CatalogResult<&Preset> {
        self.presets
            .values()
            .find(|p| p.name == name)
            .ok_or_else(|| CatalogError::PresetNameNotFound(name.to_string()))
    }

    /// Check if a preset id is present.
    pub fn contains(&self, id: PresetId) -> bool {
        self.presets.contains_key(&id)
    }

    /// Ordinal position of a preset.
    pub fn position_of(&self, id: PresetId) -> Option<usize> {
        self.presets.get_index_of(&id)
    }

    /// All presets in storage order.
    pub fn presets(&self) -> impl Iterator<Item = &Preset> {
        self.presets.values()
    }

    /// All preset ids in storage order.
    pub fn ids(&self) -> impl Iterator<Item = PresetId> + '_ {
        self.presets.keys().copied()
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Check if the catalog holds no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Preset names in storage order.
    pub fn preset_names(&self) -> Vec<&str> {
        self.presets.values().map(|p| p.name.as_str()).collect()
    }

    /// Names of the presets filed under `category`.
    pub fn preset_names_in_category(&self, category: &str) -> Vec<&str> {
        self.presets
            .values()
            .filter(|p| p.category == category)
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Check whether a preset ships with the catalog.
    pub fn is_builtin_preset(&self, id: PresetId) -> bool {
        self.builtin_presets.contains(&id)
    }

    // ------------------------------------------------------------------
    // Preset mutation
    // ------------------------------------------------------------------

    /// Add a new preset, assigning it a fresh id.
    pub fn add_preset(&mut self, draft: PresetDraft) -> CatalogResult<PresetId> {
        self.require_category(draft.category())?;

        let raw = u32::try_from(self.next_id).map_err(|_| CatalogError::IdsExhausted)?;
        let id = PresetId(raw);
        let preset = draft.with_id(id);

        match self.presets.entry(id) {
            Entry::Occupied(_) => return Err(CatalogError::PresetExists(id)),
            Entry::Vacant(slot) => {
                info!("Adding preset {} '{}' to '{}'", id, preset.name, preset.category);
                slot.insert(preset);
            }
        }
        self.next_id += 1;
        self.reindex();
        Ok(id)
    }

    /// Insert a pre-parsed preset that already carries an id.
    ///
    /// A preset arriving with `is_favorite` set is added to the favorites set.
    pub fn insert_preset(&mut self, preset: Preset) -> CatalogResult<PresetId> {
        preset.validate()?;
        if self.presets.contains_key(&preset.id) {
            return Err(CatalogError::PresetExists(preset.id));
        }
        self.require_category(&preset.category)?;

        let id = preset.id;
        debug!("Inserting preset {} '{}'", id, preset.name);
        if preset.is_favorite {
            self.favorites.insert(id);
        }
        self.presets.insert(id, preset);
        self.next_id = self.next_id.max(u64::from(id.0) + 1);
        self.reindex();
        Ok(id)
    }

    /// Delete a runtime preset.
    pub fn delete_preset(&mut self, id: PresetId) -> CatalogResult<Preset> {
        if !self.presets.contains_key(&id) {
            return Err(CatalogError::PresetNotFound(id));
        }
        if self.builtin_presets.contains(&id) {
            return Err(CatalogError::ProtectedPreset(id));
        }

        let removed = self
            .presets
            .shift_remove(&id)
            .ok_or(CatalogError::PresetNotFound(id))?;
        self.favorites.remove(&id);
        self.reindex();
        info!("Deleted preset {} '{}'", id, removed.name);
        Ok(removed)
    }

    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    /// Create a runtime category.
    pub fn create_category(&mut self, name: &str, description: &str) -> CatalogResult<()> {
        if self.categories.contains_key(name) {
            return Err(CatalogError::CategoryExists(name.to_string()));
        }
        self.categories
            .insert(name.to_string(), Category::custom(name, description));
        info!("Created category '{}'", name);
        Ok(())
    }

    /// Delete a runtime category together with every preset filed under it.
    ///
    /// Returns the ids of the removed presets in their former storage order.
    pub fn delete_category(&mut self, name: &str) -> CatalogResult<Vec<PresetId>> {
        let category = self
            .categories
            .get(name)
            .ok_or_else(|| CatalogError::CategoryNotFound(name.to_string()))?;
        if !category.is_custom {
            return Err(CatalogError::ProtectedCategory(name.to_string()));
        }

        let removed: Vec<PresetId> = self
            .presets
            .values()
            .filter(|p| p.category == name)
            .map(|p| p.id)
            .collect();

        self.presets.retain(|_, p| p.category != name);
        for id in &removed {
            self.favorites.remove(id);
        }
        self.categories.shift_remove(name);
        self.reindex();

        info!(
            "Deleted category '{}' and {} preset(s)",
            name,
            removed.len()
        );
        Ok(removed)
    }

    /// Rename a runtime category, moving its presets along.
    pub fn rename_category(&mut self, old_name: &str, new_name: &str) -> CatalogResult<()> {
        let position = self
            .categories
            .get_index_of(old_name)
            .ok_or_else(|| CatalogError::CategoryNotFound(old_name.to_string()))?;
        if !self.categories[position].is_custom {
            return Err(CatalogError::ProtectedCategory(old_name.to_string()));
        }
        if old_name == new_name {
            return Ok(());
        }
        if self.categories.contains_key(new_name) {
            return Err(CatalogError::CategoryExists(new_name.to_string()));
        }

        let mut category = self
            .categories
            .shift_remove(old_name)
            .ok_or_else(|| CatalogError::CategoryNotFound(old_name.to_string()))?;
        category.name = new_name.to_string();
        self.categories
            .shift_insert(position, new_name.to_string(), category);

        for preset in self.presets.values_mut() {
            if preset.category == old_name {
                preset.category = new_name.to_string();
            }
        }
        self.reindex();
        info!("Renamed category '{}' to '{}'", old_name, new_name);
        Ok(())
    }

    /// Get a category by name.
    pub fn category(&self, name: &str) -> CatalogResult<&Category> {
        self.categories
            .get(name)
            .ok_or_else(|| CatalogError::CategoryNotFound(name.to_string()))
    }

    /// All categories in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Live count of presets filed under `name` (0 for unknown categories).
    pub fn category_preset_count(&self, name: &str) -> usize {
        self.categories.get(name).map(|c| c.preset_count).unwrap_or(0)
    }

    /// Check whether a category ships with the catalog.
    pub fn is_builtin_category(&self, name: &str) -> bool {
        self.categories
            .get(name)
            .map(|c| !c.is_custom)
            .unwrap_or(false)
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    /// Flip a preset's favorite flag. Returns the new flag.
    pub fn toggle_favorite(&mut self, id: PresetId) -> CatalogResult<bool> {
        let preset = self
            .presets
            .get_mut(&id)
            .ok_or(CatalogError::PresetNotFound(id))?;

        preset.is_favorite = !preset.is_favorite;
        if preset.is_favorite {
            self.favorites.insert(id);
        } else {
            self.favorites.remove(&id);
        }
        debug!("Preset {} favorite = {}", id, preset.is_favorite);
        Ok(preset.is_favorite)
    }

    /// Favorited ids in ascending order.
    pub fn favorites(&self) -> Vec<PresetId> {
        self.favorites.iter().copied().collect()
    }

    /// Number of favorited presets.
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Check whether a preset is in the favorites set.
    pub fn is_favorite(&self, id: PresetId) -> bool {
        self.favorites.contains(&id)
    }

    /// Summary counters.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            presets: self.presets.len(),
            categories: self.categories.len(),
            favorites: self.favorites.len(),
            custom_categories: self.categories.values().filter(|c| c.is_custom).count(),
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    pub(crate) fn insert_builtin_category(&mut self, category: Category) {
        self.categories.insert(category.name.clone(), category);
        self.reindex();
    }

    pub(crate) fn insert_builtin_preset(&mut self, preset: Preset) {
        let id = preset.id;
        self.presets.insert(id, preset);
        self.builtin_presets.insert(id);
        self.next_id = self.next_id.max(u64::from(id.0) + 1);
        self.reindex();
    }

    fn require_category(&self, name: &str) -> CatalogResult<()> {
        if self.categories.contains_key(name) {
            Ok(())
        } else {
            Err(CatalogError::CategoryNotFound(name.to_string()))
        }
    }

    /// Recompute every derived field from the preset collection.
    fn reindex(&mut self) {
        for category in self.categories.values_mut() {
            category.preset_count = 0;
        }
        for preset in self.presets.values() {
            if let Some(category) = self.categories.get_mut(&preset.category) {
                category.preset_count += 1;
            }
        }
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::{ids, COLOR_GRADING, CUSTOM, EFFECTS};
    use crate::core::error::ErrorKind;
    use crate::core::types::PresetType;
    use proptest::prelude::*;

    fn custom_preset(name: &str, category: &str) -> PresetDraft {
        Preset::builder(name, PresetType::Effect)
            .category(category)
            .description("user look")
            .tags(["custom"])
            .build()
            .unwrap()
    }

    fn assert_favorites_consistent(catalog: &PresetCatalog) {
        for preset in catalog.presets() {
            assert_eq!(preset.is_favorite, catalog.is_favorite(preset.id));
        }
        for id in catalog.favorites() {
            assert!(catalog.get_by_id(id).unwrap().is_favorite);
        }
    }

    #[test]
    fn test_get_by_index_bounds() {
        let catalog = PresetCatalog::with_builtins();
        assert_eq!(catalog.get_by_index(0).unwrap().id, ids::FADE);
        assert_eq!(catalog.get_by_index(11).unwrap().id, ids::VINTAGE_FILM);

        let err = catalog.get_by_index(12).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_get_by_name_is_case_sensitive() {
        let catalog = PresetCatalog::with_builtins();
        assert_eq!(catalog.get_by_name("Vignette").unwrap().id, ids::VIGNETTE);
        assert!(catalog.get_by_name("vignette").is_err());
    }

    #[test]
    fn test_get_by_name_returns_first_match() {
        let mut catalog = PresetCatalog::with_builtins();
        let id = catalog.add_preset(custom_preset("Sharpen", CUSTOM)).unwrap();
        assert_ne!(id, ids::SHARPEN);
        assert_eq!(catalog.get_by_name("Sharpen").unwrap().id, ids::SHARPEN);
    }

    #[test]
    fn test_create_category() {
        let mut catalog = PresetCatalog::with_builtins();
        catalog.create_category("Looks", "My looks").unwrap();

        let category = catalog.category("Looks").unwrap();
        assert!(category.is_custom);
        assert_eq!(category.preset_count, 0);

        let err = catalog.create_category("Looks", "again").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        let err = catalog.create_category(EFFECTS, "dup").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_add_preset_updates_counts_and_ids() {
        let mut catalog = PresetCatalog::with_builtins();
        catalog.create_category("Looks", "").unwrap();

        let a = catalog.add_preset(custom_preset("A", "Looks")).unwrap();
        let b = catalog.add_preset(custom_preset("B", "Looks")).unwrap();

        assert_eq!(a, PresetId(13));
        assert_eq!(b, PresetId(14));
        assert_eq!(catalog.category_preset_count("Looks"), 2);
        assert_eq!(catalog.get_by_index(12).unwrap().id, a);
    }

    #[test]
    fn test_add_preset_requires_category() {
        let mut catalog = PresetCatalog::with_builtins();
        let err = catalog.add_preset(custom_preset("A", "Nope")).unwrap_err();
        assert_eq!(err, CatalogError::CategoryNotFound("Nope".to_string()));
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut catalog = PresetCatalog::with_builtins();
        let a = catalog.add_preset(custom_preset("A", CUSTOM)).unwrap();
        catalog.delete_preset(a).unwrap();
        let b = catalog.add_preset(custom_preset("B", CUSTOM)).unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_insert_preset() {
        let mut catalog = PresetCatalog::with_builtins();
        let mut preset = custom_preset("Imported", CUSTOM).with_id(PresetId(100));
        preset.is_favorite = true;

        catalog.insert_preset(preset.clone()).unwrap();
        assert!(catalog.is_favorite(PresetId(100)));
        assert_favorites_consistent(&catalog);

        let err = catalog.insert_preset(preset).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);

        let next = catalog.add_preset(custom_preset("After", CUSTOM)).unwrap();
        assert_eq!(next, PresetId(101));
    }

    #[test]
    fn test_insert_preset_revalidates() {
        let mut catalog = PresetCatalog::with_builtins();
        let mut preset = custom_preset("Loud", CUSTOM).with_id(PresetId(50));
        preset.tags = (0..11).map(|i| i.to_string()).collect();

        let err = catalog.insert_preset(preset).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(!catalog.contains(PresetId(50)));
    }

    #[test]
    fn test_add_after_max_id_is_exhausted() {
        let mut catalog = PresetCatalog::with_builtins();
        let max = PresetId(u32::MAX);
        catalog
            .insert_preset(custom_preset("Max", CUSTOM).with_id(max))
            .unwrap();

        let err = catalog.add_preset(custom_preset("Next", CUSTOM)).unwrap_err();
        assert_eq!(err, CatalogError::IdsExhausted);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.get_by_id(max).unwrap().name, "Max");
        assert_eq!(catalog.get_by_id(ids::FADE).unwrap().name, "Fade In/Out");

        // Deleting the top id does not free it for reuse.
        catalog.delete_preset(max).unwrap();
        assert!(catalog.add_preset(custom_preset("Again", CUSTOM)).is_err());
    }

    #[test]
    fn test_delete_preset() {
        let mut catalog = PresetCatalog::with_builtins();
        let id = catalog.add_preset(custom_preset("Temp", CUSTOM)).unwrap();
        catalog.toggle_favorite(id).unwrap();

        catalog.delete_preset(id).unwrap();
        assert!(catalog.get_by_id(id).is_err());
        assert!(!catalog.is_favorite(id));
        assert_eq!(catalog.category_preset_count(CUSTOM), 0);

        let err = catalog.delete_preset(ids::FADE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protected);
        let err = catalog.delete_preset(id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_delete_builtin_category_is_protected() {
        let mut catalog = PresetCatalog::with_builtins();
        let before = catalog.clone();

        for name in [EFFECTS, COLOR_GRADING, CUSTOM] {
            let err = catalog.delete_category(name).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Protected);
        }

        assert_eq!(catalog.category_count(), before.category_count());
        assert_eq!(catalog.len(), before.len());
        assert!(catalog.ids().eq(before.ids()));
        for id in before.ids() {
            assert!(catalog.get_by_id(id).is_ok());
        }
    }

    #[test]
    fn test_delete_category_cascades() {
        let mut catalog = PresetCatalog::with_builtins();
        catalog.create_category("Looks", "").unwrap();
        let a = catalog.add_preset(custom_preset("A", "Looks")).unwrap();
        let keep = catalog.add_preset(custom_preset("Keep", CUSTOM)).unwrap();
        let b = catalog.add_preset(custom_preset("B", "Looks")).unwrap();
        catalog.toggle_favorite(b).unwrap();

        let removed = catalog.delete_category("Looks").unwrap();

        assert_eq!(removed, vec![a, b]);
        assert_eq!(catalog.len(), 13);
        assert!(catalog.category("Looks").is_err());
        assert_eq!(catalog.get_by_id(a).unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(catalog.get_by_id(b).unwrap_err().kind(), ErrorKind::NotFound);
        assert!(catalog.get_by_id(keep).is_ok());
        assert_eq!(catalog.get_by_index(12).unwrap().id, keep);
        assert_eq!(catalog.favorite_count(), 0);
    }

    #[test]
    fn test_delete_unknown_category() {
        let mut catalog = PresetCatalog::with_builtins();
        let err = catalog.delete_category("Ghost").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_rename_category() {
        let mut catalog = PresetCatalog::with_builtins();
        catalog.create_category("Looks", "").unwrap();
        catalog.create_category("Later", "").unwrap();
        let id = catalog.add_preset(custom_preset("A", "Looks")).unwrap();

        catalog.rename_category("Looks", "Grades").unwrap();

        assert_eq!(catalog.get_by_id(id).unwrap().category, "Grades");
        assert_eq!(catalog.category_preset_count("Grades"), 1);
        assert!(catalog.category("Looks").is_err());
        let names: Vec<&str> = catalog.categories().map(|c| c.name.as_str()).collect();
        assert_eq!(names[4], "Grades");
        assert_eq!(names[5], "Later");

        let err = catalog.rename_category(EFFECTS, "FX").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protected);
        let err = catalog.rename_category("Grades", "Later").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_toggle_favorite() {
        let mut catalog = PresetCatalog::with_builtins();
        assert!(catalog.toggle_favorite(ids::VIGNETTE).unwrap());
        assert!(catalog.is_favorite(ids::VIGNETTE));
        assert_eq!(catalog.favorites(), vec![ids::VIGNETTE]);
        assert_favorites_consistent(&catalog);

        assert!(!catalog.toggle_favorite(ids::VIGNETTE).unwrap());
        assert_eq!(catalog.favorite_count(), 0);

        let err = catalog.toggle_favorite(PresetId(999)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_stats() {
        let mut catalog = PresetCatalog::with_builtins();
        catalog.create_category("Looks", "").unwrap();
        catalog.toggle_favorite(ids::FADE).unwrap();

        let stats = catalog.stats();
        assert_eq!(stats.presets, 12);
        assert_eq!(stats.categories, 5);
        assert_eq!(stats.favorites, 1);
        assert_eq!(stats.custom_categories, 1);
    }

    #[test]
    fn test_names_in_category() {
        let catalog = PresetCatalog::with_builtins();
        assert_eq!(
            catalog.preset_names_in_category("Transitions"),
            vec!["Fade In/Out", "Zoom Blur", "Slide"]
        );
        assert_eq!(catalog.preset_names().len(), 12);
    }

    proptest! {
        #[test]
        fn prop_toggle_is_involution(raw in 1u32..=12) {
            let mut catalog = PresetCatalog::with_builtins();
            let id = PresetId(raw);
            let before = catalog.get_by_id(id).unwrap().is_favorite;

            catalog.toggle_favorite(id).unwrap();
            assert_favorites_consistent(&catalog);
            catalog.toggle_favorite(id).unwrap();
            assert_favorites_consistent(&catalog);

            prop_assert_eq!(catalog.get_by_id(id).unwrap().is_favorite, before);
        }

        #[test]
        fn prop_favorites_consistent_after_any_toggles(toggles in proptest::collection::vec(1u32..=12, 0..40)) {
            let mut catalog = PresetCatalog::with_builtins();
            for raw in toggles {
                catalog.toggle_favorite(PresetId(raw)).unwrap();
                assert_favorites_consistent(&catalog);
            }
        }

        #[test]
        fn prop_category_counts_match_live_counts(assignments in proptest::collection::vec(0usize..3, 0..20)) {
            let mut catalog = PresetCatalog::with_builtins();
            catalog.create_category("A", "").unwrap();
            catalog.create_category("B", "").unwrap();
            let names = ["A", "B", CUSTOM];
            for (i, slot) in assignments.iter().enumerate() {
                catalog.add_preset(custom_preset(&format!("p{}", i), names[*slot])).unwrap();
            }
            catalog.delete_category("A").unwrap();

            for category in catalog.categories() {
                let live = catalog.presets().filter(|p| p.category == category.name).count();
                prop_assert_eq!(category.preset_count, live);
            }
        }
    }
}
