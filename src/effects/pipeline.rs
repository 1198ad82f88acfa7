//! Effect pipeline: validates buffers, resolves the kernel, renders.

use crate::catalog::PresetCatalog;
use crate::core::error::{EffectError, EffectResult};
use crate::core::frame::FrameBuffer;
use crate::core::types::{Preset, PresetId};
use crate::effects::kernel::{identity, Kernel};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Default film grain amplitude, in 8-bit levels.
pub const DEFAULT_GRAIN_AMPLITUDE: i32 = 25;

/// Pipeline options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Seed for film grain noise. Each render reseeds from it, so output is
    /// reproducible. `None` draws a fresh seed per render.
    pub grain_seed: Option<u64>,
    /// Largest noise offset film grain may add or subtract.
    pub grain_amplitude: i32,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            grain_seed: None,
            grain_amplitude: DEFAULT_GRAIN_AMPLITUDE,
        }
    }
}

impl PipelineOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed film grain seed.
    pub fn with_grain_seed(mut self, seed: u64) -> Self {
        self.grain_seed = Some(seed);
        self
    }

    /// Set the film grain amplitude.
    pub fn with_grain_amplitude(mut self, amplitude: i32) -> Self {
        self.grain_amplitude = amplitude;
        self
    }
}

/// Applies presets to frame buffers.
///
/// The pipeline holds no per-render state, so one instance can serve
/// concurrent renders of different frames.
#[derive(Debug, Clone, Default)]
pub struct EffectPipeline {
    options: PipelineOptions,
}

impl EffectPipeline {
    /// Create a pipeline with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with the given options.
    pub fn with_options(options: PipelineOptions) -> Self {
        Self { options }
    }

    /// Get the pipeline options.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Apply `preset` to `input`, writing into `output`.
    ///
    /// `intensity` is expected in `[0, 1]` and is not clamped; per-pixel
    /// results are. On error nothing is written to `output`.
    pub fn apply(
        &self,
        preset: &Preset,
        input: &FrameBuffer,
        output: &mut FrameBuffer,
        intensity: f64,
    ) -> EffectResult<()> {
        let kernel = Kernel::resolve(preset);
        debug!(
            "Applying preset {} '{}' with kernel {} at {:.3}",
            preset.id, preset.name, kernel, intensity
        );
        self.apply_kernel(kernel, input, output, intensity)
    }

    /// Host-facing entry point where any argument may be absent.
    ///
    /// A missing preset, input or output fails with an invalid-argument error
    /// and leaves a provided output untouched.
    pub fn apply_host(
        &self,
        preset: Option<&Preset>,
        input: Option<&FrameBuffer>,
        output: Option<&mut FrameBuffer>,
        intensity: f64,
    ) -> EffectResult<()> {
        let preset = preset.ok_or_else(|| EffectError::Missing("preset".to_string()))?;
        let input = input.ok_or_else(|| EffectError::Missing("input buffer".to_string()))?;
        let output = output.ok_or_else(|| EffectError::Missing("output buffer".to_string()))?;
        self.apply(preset, input, output, intensity)
    }

    /// Render a resolved kernel.
    pub fn apply_kernel(
        &self,
        kernel: Kernel,
        input: &FrameBuffer,
        output: &mut FrameBuffer,
        intensity: f64,
    ) -> EffectResult<()> {
        validate_buffers(input, output)?;

        match kernel {
            Kernel::Transition(k) => k.render(input, output, intensity),
            Kernel::Effect(k) => {
                let mut rng = self.grain_rng();
                k.render(input, output, intensity, self.options.grain_amplitude, &mut rng)
            }
            Kernel::ColorGrade(k) => k.render(input, output, intensity),
            Kernel::Identity => identity(input, output),
        }

        trace!("Rendered {}x{} frame", input.width(), input.height());
        Ok(())
    }

    /// Apply a preset into a freshly allocated, tightly packed buffer.
    pub fn render(&self, preset: &Preset, input: &FrameBuffer, intensity: f64) -> EffectResult<FrameBuffer> {
        let mut output = FrameBuffer::new(input.width(), input.height());
        self.apply(preset, input, &mut output, intensity)?;
        Ok(output)
    }

    /// Look a preset up by id and apply it.
    pub fn preview(
        &self,
        catalog: &PresetCatalog,
        id: PresetId,
        input: &FrameBuffer,
        output: &mut FrameBuffer,
        intensity: f64,
    ) -> EffectResult<()> {
        let preset = catalog.get_by_id(id)?;
        self.apply(preset, input, output, intensity)
    }

    fn grain_rng(&self) -> StdRng {
        match self.options.grain_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

/// Map a host slider value in `[0, 100]` to an intensity in `[0, 1]`.
pub fn intensity_from_slider(value: f64) -> f64 {
    (value / 100.0).clamp(0.0, 1.0)
}

fn validate_buffers(input: &FrameBuffer, output: &FrameBuffer) -> EffectResult<()> {
    input.check_storage()?;
    output.check_storage()?;
    if input.dimensions() != output.dimensions() {
        return Err(EffectError::DimensionMismatch {
            input_width: input.width(),
            input_height: input.height(),
            output_width: output.width(),
            output_height: output.height(),
        });
    }
    Ok(())
}
