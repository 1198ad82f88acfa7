//! Kernel dispatch.
//!
//! A preset resolves to exactly one [`Kernel`]: first by family (the preset
//! type), then by id within the family. Anything that does not resolve to a
//! named kernel renders as an identity copy so unfinished presets stay
//! visually inert.

use crate::catalog::builtin::ids;
use crate::core::frame::{FrameBuffer, BYTES_PER_PIXEL};
use crate::core::types::{Preset, PresetId, PresetType};
use log::debug;
use std::fmt;

/// Transition kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKernel {
    /// Scales alpha by intensity.
    Fade,
    /// Not implemented; renders as identity.
    ZoomBlur,
    /// Not implemented; renders as identity.
    Slide,
}

/// Effect kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKernel {
    /// Not implemented; renders as identity.
    Blur,
    /// Scales RGB up by `1 + 2 * intensity`.
    Sharpen,
    /// Adds per-channel uniform noise.
    FilmGrain,
    /// Darkens with distance from the center.
    Vignette,
}

/// Color grading kernels. All work on normalized floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorGradeKernel {
    /// Cools red, lifts blue.
    CinematicBlue,
    /// Lifts red and green, cools blue.
    WarmSunset,
    /// Orange highlights, teal shadows.
    TealOrange,
    /// Blends toward luminance.
    BlackWhite,
    /// Tinted luminance.
    VintageFilm,
}

/// A resolved per-pixel transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel {
    /// A transition kernel.
    Transition(TransitionKernel),
    /// An effect kernel.
    Effect(EffectKernel),
    /// A color grading kernel.
    ColorGrade(ColorGradeKernel),
    /// Output is a copy of the input.
    Identity,
}

impl TransitionKernel {
    /// Look up the transition kernel for a preset id.
    pub fn from_id(id: PresetId) -> Option<Self> {
        match id {
            ids::FADE => Some(TransitionKernel::Fade),
            ids::ZOOM_BLUR => Some(TransitionKernel::ZoomBlur),
            ids::SLIDE => Some(TransitionKernel::Slide),
            _ => None,
        }
    }
}

impl EffectKernel {
    /// Look up the effect kernel for a preset id.
    pub fn from_id(id: PresetId) -> Option<Self> {
        match id {
            ids::BLUR => Some(EffectKernel::Blur),
            ids::SHARPEN => Some(EffectKernel::Sharpen),
            ids::FILM_GRAIN => Some(EffectKernel::FilmGrain),
            ids::VIGNETTE => Some(EffectKernel::Vignette),
            _ => None,
        }
    }
}

impl ColorGradeKernel {
    /// Look up the color grading kernel for a preset id.
    pub fn from_id(id: PresetId) -> Option<Self> {
        match id {
            ids::CINEMATIC_BLUE => Some(ColorGradeKernel::CinematicBlue),
            ids::WARM_SUNSET => Some(ColorGradeKernel::WarmSunset),
            ids::TEAL_ORANGE => Some(ColorGradeKernel::TealOrange),
            ids::BLACK_WHITE => Some(ColorGradeKernel::BlackWhite),
            ids::VINTAGE_FILM => Some(ColorGradeKernel::VintageFilm),
            _ => None,
        }
    }
}

impl Kernel {
    /// Resolve the kernel for a preset.
    pub fn resolve(preset: &Preset) -> Self {
        Self::resolve_parts(preset.preset_type, preset.id)
    }

    /// Resolve the kernel for a `(type, id)` pair.
    pub fn resolve_parts(preset_type: PresetType, id: PresetId) -> Self {
        let kernel = match preset_type {
            PresetType::Transition => TransitionKernel::from_id(id).map(Kernel::Transition),
            PresetType::Effect => EffectKernel::from_id(id).map(Kernel::Effect),
            PresetType::ColorGrade => ColorGradeKernel::from_id(id).map(Kernel::ColorGrade),
            PresetType::Custom => None,
        };

        kernel.unwrap_or_else(|| {
            debug!("No {} kernel for preset {}, using identity", preset_type, id);
            Kernel::Identity
        })
    }

    /// Whether this kernel leaves pixels untouched.
    pub fn is_identity(&self) -> bool {
        matches!(
            self,
            Kernel::Identity
                | Kernel::Transition(TransitionKernel::ZoomBlur)
                | Kernel::Transition(TransitionKernel::Slide)
                | Kernel::Effect(EffectKernel::Blur)
        )
    }

    /// Short name for logs and the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Kernel::Transition(TransitionKernel::Fade) => "fade",
            Kernel::Transition(TransitionKernel::ZoomBlur) => "zoom_blur",
            Kernel::Transition(TransitionKernel::Slide) => "slide",
            Kernel::Effect(EffectKernel::Blur) => "blur",
            Kernel::Effect(EffectKernel::Sharpen) => "sharpen",
            Kernel::Effect(EffectKernel::FilmGrain) => "film_grain",
            Kernel::Effect(EffectKernel::Vignette) => "vignette",
            Kernel::ColorGrade(ColorGradeKernel::CinematicBlue) => "cinematic_blue",
            Kernel::ColorGrade(ColorGradeKernel::WarmSunset) => "warm_sunset",
            Kernel::ColorGrade(ColorGradeKernel::TealOrange) => "teal_orange",
            Kernel::ColorGrade(ColorGradeKernel::BlackWhite) => "black_white",
            Kernel::ColorGrade(ColorGradeKernel::VintageFilm) => "vintage_film",
            Kernel::Identity => "identity",
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Pixel iteration
// ============================================================================

/// Map every pixel of `input` into `output`. Both must have equal dimensions.
///
/// The closure receives `(x, y, [r, g, b, a])`. Rows are located through each
/// buffer's own stride.
pub(crate) fn map_pixels<F>(input: &FrameBuffer, output: &mut FrameBuffer, mut f: F)
where
    F: FnMut(u32, u32, [u8; 4]) -> [u8; 4],
{
    for y in 0..input.height() {
        let src = input.row(y);
        let dst = output.row_mut(y);
        for (x, (s, d)) in src
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
            .enumerate()
        {
            d.copy_from_slice(&f(x as u32, y, [s[0], s[1], s[2], s[3]]));
        }
    }
}

/// Copy `input` into `output` unchanged.
pub(crate) fn identity(input: &FrameBuffer, output: &mut FrameBuffer) {
    output.copy_pixels_from(input);
}
