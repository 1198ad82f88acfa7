//! Built-in categories and presets.
//!
//! These ship with every catalog. Ids 1-12 are fixed because the effect
//! pipeline resolves kernels by id.

use crate::catalog::store::PresetCatalog;
use crate::core::types::{Category, Preset, PresetId, PresetType};

/// Name of the built-in transitions category.
pub const TRANSITIONS: &str = "Transitions";
/// Name of the built-in effects category.
pub const EFFECTS: &str = "Effects";
/// Name of the built-in color grading category.
pub const COLOR_GRADING: &str = "Color Grading";
/// Name of the built-in catch-all category for user presets.
pub const CUSTOM: &str = "Custom";

const AUTHOR: &str = "PresetFX";
const VERSION: &str = "1.0";

/// Built-in preset ids, in catalog order.
pub mod ids {
    use crate::core::types::PresetId;

    /// Fade In/Out.
    pub const FADE: PresetId = PresetId(1);
    /// Zoom Blur.
    pub const ZOOM_BLUR: PresetId = PresetId(2);
    /// Slide.
    pub const SLIDE: PresetId = PresetId(3);
    /// Blur Effect.
    pub const BLUR: PresetId = PresetId(4);
    /// Sharpen.
    pub const SHARPEN: PresetId = PresetId(5);
    /// Film Grain.
    pub const FILM_GRAIN: PresetId = PresetId(6);
    /// Vignette.
    pub const VIGNETTE: PresetId = PresetId(7);
    /// Cinematic Blue.
    pub const CINEMATIC_BLUE: PresetId = PresetId(8);
    /// Warm Sunset.
    pub const WARM_SUNSET: PresetId = PresetId(9);
    /// Teal & Orange.
    pub const TEAL_ORANGE: PresetId = PresetId(10);
    /// Black & White.
    pub const BLACK_WHITE: PresetId = PresetId(11);
    /// Vintage Film.
    pub const VINTAGE_FILM: PresetId = PresetId(12);
}

/// Register all built-in categories and presets.
pub fn register_all(catalog: &mut PresetCatalog) {
    register_categories(catalog);
    register_transitions(catalog);
    register_effects(catalog);
    register_color_grades(catalog);
}

fn register_categories(catalog: &mut PresetCatalog) {
    catalog.insert_builtin_category(Category::builtin(
        TRANSITIONS,
        "Transition effects between scenes",
    ));
    catalog.insert_builtin_category(Category::builtin(EFFECTS, "Visual effects and filters"));
    catalog.insert_builtin_category(Category::builtin(
        COLOR_GRADING,
        "Color correction and grading presets",
    ));
    catalog.insert_builtin_category(Category::builtin(CUSTOM, "User-created presets"));
}

fn register_transitions(catalog: &mut PresetCatalog) {
    catalog.insert_builtin_preset(builtin(
        ids::FADE,
        "Fade In/Out",
        TRANSITIONS,
        "Smooth fade transition effect",
        &["fade", "transition", "smooth"],
        PresetType::Transition,
        0.5,
    ));
    catalog.insert_builtin_preset(builtin(
        ids::ZOOM_BLUR,
        "Zoom Blur",
        TRANSITIONS,
        "Radial zoom blur transition",
        &["zoom", "blur", "dynamic"],
        PresetType::Transition,
        0.7,
    ));
    catalog.insert_builtin_preset(builtin(
        ids::SLIDE,
        "Slide",
        TRANSITIONS,
        "Sliding transition effect",
        &["slide", "move"],
        PresetType::Transition,
        0.5,
    ));
}

fn register_effects(catalog: &mut PresetCatalog) {
    catalog.insert_builtin_preset(builtin(
        ids::BLUR,
        "Blur Effect",
        EFFECTS,
        "Gaussian blur effect",
        &["blur", "soft"],
        PresetType::Effect,
        0.5,
    ));
    catalog.insert_builtin_preset(builtin(
        ids::SHARPEN,
        "Sharpen",
        EFFECTS,
        "Sharpening filter",
        &["sharpen", "enhance"],
        PresetType::Effect,
        0.3,
    ));
    catalog.insert_builtin_preset(builtin(
        ids::FILM_GRAIN,
        "Film Grain",
        EFFECTS,
        "Adds realistic film grain texture",
        &["grain", "noise", "vintage"],
        PresetType::Effect,
        0.2,
    ));
    catalog.insert_builtin_preset(builtin(
        ids::VIGNETTE,
        "Vignette",
        EFFECTS,
        "Darkens edges for cinematic look",
        &["vignette", "cinematic", "edges"],
        PresetType::Effect,
        0.5,
    ));
}

fn register_color_grades(catalog: &mut PresetCatalog) {
    catalog.insert_builtin_preset(builtin(
        ids::CINEMATIC_BLUE,
        "Cinematic Blue",
        COLOR_GRADING,
        "Cool blue cinematic color grade",
        &["blue", "cinematic", "cool"],
        PresetType::ColorGrade,
        0.6,
    ));
    catalog.insert_builtin_preset(builtin(
        ids::WARM_SUNSET,
        "Warm Sunset",
        COLOR_GRADING,
        "Warm orange and red sunset tones",
        &["warm", "sunset", "orange"],
        PresetType::ColorGrade,
        0.5,
    ));
    catalog.insert_builtin_preset(builtin(
        ids::TEAL_ORANGE,
        "Teal & Orange",
        COLOR_GRADING,
        "Popular Hollywood teal and orange look",
        &["teal", "orange", "hollywood"],
        PresetType::ColorGrade,
        0.7,
    ));
    catalog.insert_builtin_preset(builtin(
        ids::BLACK_WHITE,
        "Black & White",
        COLOR_GRADING,
        "Classic black and white conversion",
        &["bw", "monochrome", "classic"],
        PresetType::ColorGrade,
        1.0,
    ));
    catalog.insert_builtin_preset(builtin(
        ids::VINTAGE_FILM,
        "Vintage Film",
        COLOR_GRADING,
        "Vintage film look with warm tones",
        &["vintage", "retro", "film"],
        PresetType::ColorGrade,
        0.8,
    ));
}

fn builtin(
    id: PresetId,
    name: &str,
    category: &str,
    description: &str,
    tags: &[&str],
    preset_type: PresetType,
    default_intensity: f64,
) -> Preset {
    Preset {
        id,
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        preset_type,
        default_intensity,
        is_favorite: false,
        author: AUTHOR.to_string(),
        version: VERSION.to_string(),
    }
}
