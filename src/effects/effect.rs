//! Effect kernels: sharpen, film grain, vignette (and the blur placeholder).

use crate::core::frame::FrameBuffer;
use crate::effects::kernel::{identity, map_pixels, EffectKernel};
use log::trace;
use rand::Rng;

impl EffectKernel {
    /// Render this kernel. Buffers are already validated.
    pub(crate) fn render<R: Rng>(
        &self,
        input: &FrameBuffer,
        output: &mut FrameBuffer,
        intensity: f64,
        grain_amplitude: i32,
        rng: &mut R,
    ) {
        match self {
            EffectKernel::Blur => {
                let radius = ((intensity * 10.0) as i32).max(1);
                trace!("Blur radius {} requested, rendering as copy", radius);
                identity(input, output);
            }
            EffectKernel::Sharpen => sharpen(input, output, intensity),
            EffectKernel::FilmGrain => film_grain(input, output, intensity, grain_amplitude, rng),
            EffectKernel::Vignette => vignette(input, output, intensity),
        }
    }
}

/// `c' = min(255, c * (1 + 2i))` on RGB; alpha passes through.
fn sharpen(input: &FrameBuffer, output: &mut FrameBuffer, intensity: f64) {
    let factor = 1.0 + intensity * 2.0;
    let scale = |c: u8| (c as f64 * factor).clamp(0.0, 255.0) as u8;
    map_pixels(input, output, |_, _, [r, g, b, a]| [scale(r), scale(g), scale(b), a]);
}

/// Adds `trunc(n * i)` to each channel, `n` drawn uniformly from
/// `[-amplitude, amplitude]` independently per channel and pixel.
fn film_grain<R: Rng>(
    input: &FrameBuffer,
    output: &mut FrameBuffer,
    intensity: f64,
    amplitude: i32,
    rng: &mut R,
) {
    let amplitude = amplitude.saturating_abs();
    let mut grain = |c: u8| {
        let noise = (rng.random_range(-amplitude..=amplitude) as f64 * intensity) as i32;
        (c as i32).saturating_add(noise).clamp(0, 255) as u8
    };
    map_pixels(input, output, |_, _, [r, g, b, a]| [grain(r), grain(g), grain(b), a]);
}

/// Darkens each pixel by its distance from `(w/2, h/2)` relative to the
/// center-to-corner distance.
fn vignette(input: &FrameBuffer, output: &mut FrameBuffer, intensity: f64) {
    let center_x = input.width() as f64 / 2.0;
    let center_y = input.height() as f64 / 2.0;
    let max_dist = (center_x * center_x + center_y * center_y).sqrt();

    map_pixels(input, output, |x, y, [r, g, b, a]| {
        let dx = x as f64 - center_x;
        let dy = y as f64 - center_y;
        let dist = (dx * dx + dy * dy).sqrt();
        let factor = if max_dist > 0.0 {
            (1.0 - (dist / max_dist) * intensity).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let shade = |c: u8| (c as f64 * factor) as u8;
        [shade(r), shade(g), shade(b), a]
    });
}
