//! Preset catalog.
//!
//! Holds the authoritative preset and category store, the built-in presets
//! registered into every new catalog, and a lock-guarded handle for sharing a
//! catalog between threads.

pub mod builtin;
pub mod shared;
pub mod store;

pub use shared::SharedCatalog;
pub use store::{CatalogStats, PresetCatalog};
