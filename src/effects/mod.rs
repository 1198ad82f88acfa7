//! Effect module.
//!
//! Contains kernel dispatch, the per-family kernels, and the pipeline that
//! validates buffers and runs them.

pub mod color;
pub mod effect;
pub mod kernel;
pub mod pipeline;
pub mod transition;

pub use kernel::{ColorGradeKernel, EffectKernel, Kernel, TransitionKernel};
pub use pipeline::{intensity_from_slider, EffectPipeline, PipelineOptions};
