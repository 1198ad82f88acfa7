//! Thread-safe catalog handle.

use crate::catalog::store::PresetCatalog;
use crate::core::error::{CatalogResult, EffectResult};
use crate::core::frame::FrameBuffer;
use crate::core::types::PresetId;
use crate::effects::pipeline::EffectPipeline;
use crate::search::{SearchEngine, SearchFilter};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// A catalog shared between threads.
///
/// Mutations take the write lock. Searches and renders take the read lock, so
/// any number of them run concurrently and none observes a half-applied
/// mutation.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<PresetCatalog>>,
}

impl SharedCatalog {
    /// Wrap a catalog.
    pub fn new(catalog: PresetCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Acquire the read lock.
    pub fn read(&self) -> RwLockReadGuard<'_, PresetCatalog> {
        self.inner.read()
    }

    /// Acquire the write lock.
    pub fn write(&self) -> RwLockWriteGuard<'_, PresetCatalog> {
        self.inner.write()
    }

    /// Clone the current catalog state.
    pub fn snapshot(&self) -> PresetCatalog {
        self.inner.read().clone()
    }

    /// Flip a preset's favorite flag. Returns the new flag.
    pub fn toggle_favorite(&self, id: PresetId) -> CatalogResult<bool> {
        self.inner.write().toggle_favorite(id)
    }

    /// Ids matching `filter`, in catalog order.
    pub fn search(&self, filter: &SearchFilter) -> Vec<PresetId> {
        let catalog = self.inner.read();
        SearchEngine::new(&catalog).search(filter)
    }

    /// Render preset `id` while holding the read lock.
    pub fn render(
        &self,
        pipeline: &EffectPipeline,
        id: PresetId,
        input: &FrameBuffer,
        output: &mut FrameBuffer,
        intensity: f64,
    ) -> EffectResult<()> {
        let catalog = self.inner.read();
        pipeline.preview(&catalog, id, input, output, intensity)
    }
}

impl From<PresetCatalog> for SharedCatalog {
    fn from(catalog: PresetCatalog) -> Self {
        Self::new(catalog)
    }
}
