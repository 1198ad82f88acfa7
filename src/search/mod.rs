//! Search module.
//!
//! Contains the search filter value and the engine that evaluates it against
//! a catalog.

pub mod engine;
pub mod filter;

pub use engine::SearchEngine;
pub use filter::SearchFilter;
