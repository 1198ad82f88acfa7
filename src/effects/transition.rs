//! Transition kernels.

use crate::core::frame::FrameBuffer;
use crate::effects::kernel::{identity, map_pixels, TransitionKernel};

impl TransitionKernel {
    /// Render this kernel. Buffers are already validated.
    pub(crate) fn render(&self, input: &FrameBuffer, output: &mut FrameBuffer, intensity: f64) {
        match self {
            TransitionKernel::Fade => fade(input, output, intensity),
            TransitionKernel::ZoomBlur | TransitionKernel::Slide => identity(input, output),
        }
    }
}

/// `alpha' = trunc(alpha * intensity)`; RGB passes through.
fn fade(input: &FrameBuffer, output: &mut FrameBuffer, intensity: f64) {
    map_pixels(input, output, |_, _, [r, g, b, a]| {
        let alpha = (a as f64 * intensity).clamp(0.0, 255.0) as u8;
        [r, g, b, alpha]
    });
}
