//! Engine configuration loaded from TOML.
//!
//! ```toml
//! [pipeline]
//! grain_seed = 42
//! grain_amplitude = 25
//!
//! [session]
//! preview_on_select = true
//! default_slider = 50.0 # optional
//! ```
//!
//! Every section and key is optional.

use crate::core::error::PresetFxResult;
use crate::effects::pipeline::PipelineOptions;
use crate::session::SessionOptions;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Effect pipeline options.
    pub pipeline: PipelineOptions,
    /// Session options.
    pub session: SessionOptions,
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> PresetFxResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> PresetFxResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Replace the pipeline options.
    pub fn with_pipeline(mut self, pipeline: PipelineOptions) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Replace the session options.
    pub fn with_session(mut self, session: SessionOptions) -> Self {
        self.session = session;
        self
    }
}
