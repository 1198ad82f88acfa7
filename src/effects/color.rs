//! Color grading kernels.
//!
//! Channels are normalized to `[0, 1]` floats, transformed, clamped, and
//! scaled back to 8 bits with rounding. Alpha always passes through.

use crate::core::frame::FrameBuffer;
use crate::effects::kernel::{map_pixels, ColorGradeKernel};

/// Rec. 601 luma of normalized RGB.
#[inline]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    0.299 * r + 0.587 * g + 0.114 * b
}

impl ColorGradeKernel {
    /// Render this kernel. Buffers are already validated.
    pub(crate) fn render(&self, input: &FrameBuffer, output: &mut FrameBuffer, intensity: f64) {
        let i = intensity as f32;
        let kernel = *self;
        map_pixels(input, output, |_, _, [r, g, b, a]| {
            let (r, g, b) = kernel.grade(to_unit(r), to_unit(g), to_unit(b), i);
            [from_unit(r), from_unit(g), from_unit(b), a]
        });
    }

    /// Apply the grade to one normalized pixel.
    pub fn grade(&self, mut r: f32, mut g: f32, mut b: f32, i: f32) -> (f32, f32, f32) {
        match self {
            ColorGradeKernel::CinematicBlue => {
                r *= 1.0 - i * 0.2;
                b *= 1.0 + i * 0.3;
            }
            ColorGradeKernel::WarmSunset => {
                r *= 1.0 + i * 0.3;
                g *= 1.0 + i * 0.1;
                b *= 1.0 - i * 0.2;
            }
            ColorGradeKernel::TealOrange => {
                // Orange highlights, teal shadows.
                if luminance(r, g, b) > 0.5 {
                    r *= 1.0 + i * 0.2;
                    g *= 1.0 + i * 0.1;
                } else {
                    g *= 1.0 + i * 0.2;
                    b *= 1.0 + i * 0.2;
                }
            }
            ColorGradeKernel::BlackWhite => {
                let gray = luminance(r, g, b);
                r = r * (1.0 - i) + gray * i;
                g = g * (1.0 - i) + gray * i;
                b = b * (1.0 - i) + gray * i;
            }
            ColorGradeKernel::VintageFilm => {
                let gray = luminance(r, g, b);
                r = gray * (1.0 + i * 0.3);
                g = gray * (1.0 + i * 0.15);
                b = gray * (1.0 - i * 0.1);
            }
        }
        (r, g, b)
    }
}

#[inline]
fn to_unit(c: u8) -> f32 {
    c as f32 / 255.0
}

#[inline]
fn from_unit(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade_pixel(kernel: ColorGradeKernel, pixel: [u8; 4], intensity: f64) -> [u8; 4] {
        let input = FrameBuffer::filled(1, 1, pixel);
        let mut output = FrameBuffer::new(1, 1);
        kernel.render(&input, &mut output, intensity);
        output.pixel(0, 0)
    }

    const ALL: [ColorGradeKernel; 5] = [
        ColorGradeKernel::CinematicBlue,
        ColorGradeKernel::WarmSunset,
        ColorGradeKernel::TealOrange,
        ColorGradeKernel::BlackWhite,
        ColorGradeKernel::VintageFilm,
    ];

    #[test]
    fn test_black_white_full() {
        let [r, g, b, a] = grade_pixel(ColorGradeKernel::BlackWhite, [200, 100, 50, 255], 1.0);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert!((123..=124).contains(&r), "gray was {}", r);
        assert_eq!(a, 255);
    }

    #[test]
    fn test_zero_intensity_is_exact_identity() {
        let kernels = [
            ColorGradeKernel::CinematicBlue,
            ColorGradeKernel::WarmSunset,
            ColorGradeKernel::TealOrange,
            ColorGradeKernel::BlackWhite,
        ];
        for kernel in kernels {
            for v in 0..=255u8 {
                let pixel = [v, 255 - v, v / 2, 9];
                assert_eq!(grade_pixel(kernel, pixel, 0.0), pixel, "{:?} at {}", kernel, v);
            }
        }
    }

    #[test]
    fn test_cinematic_blue() {
        let [r, g, b, _] = grade_pixel(ColorGradeKernel::CinematicBlue, [100, 100, 100, 255], 1.0);
        assert_eq!(r, 80);
        assert_eq!(g, 100);
        assert_eq!(b, 130);
    }

    #[test]
    fn test_warm_sunset_clamps() {
        let [r, g, b, _] = grade_pixel(ColorGradeKernel::WarmSunset, [250, 250, 250, 255], 1.0);
        assert_eq!(r, 255);
        assert_eq!(g, 255);
        assert_eq!(b, 200);
    }

    #[test]
    fn test_teal_orange_branches() {
        // Bright pixel: red and green boosted.
        let [r, g, b, _] = grade_pixel(ColorGradeKernel::TealOrange, [200, 200, 200, 255], 0.5);
        assert_eq!((r, g, b), (220, 210, 200));

        // Dark pixel: green and blue boosted.
        let [r, g, b, _] = grade_pixel(ColorGradeKernel::TealOrange, [50, 50, 50, 255], 0.5);
        assert_eq!((r, g, b), (50, 55, 55));
    }

    #[test]
    fn test_teal_orange_threshold_is_strict() {
        let (r, g, b) = ColorGradeKernel::TealOrange.grade(0.5, 0.5, 0.5, 1.0);
        // Exactly 0.5 luminance takes the shadow branch.
        assert_eq!(r, 0.5);
        assert!(g > 0.5 && b > 0.5);
    }

    #[test]
    fn test_vintage_film_uses_luminance() {
        let [r, g, b, a] = grade_pixel(ColorGradeKernel::VintageFilm, [200, 100, 50, 40], 0.0);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(a, 40);

        let [r, g, b, _] = grade_pixel(ColorGradeKernel::VintageFilm, [200, 100, 50, 40], 1.0);
        assert!(r > g && g > b);
    }

    #[test]
    fn test_alpha_always_passes_through() {
        for kernel in ALL {
            assert_eq!(grade_pixel(kernel, [12, 34, 56, 78], 0.7)[3], 78);
        }
    }
}
