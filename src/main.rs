//! PresetFX CLI - Preset-driven Image Effects
//!
//! Lists, inspects and searches the built-in presets and applies one to an
//! image file.

use anyhow::{bail, Context, Result};
use presetfx::prelude::*;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "list" => list_presets(),
        "info" => {
            let Some(query) = args.get(2) else {
                bail!("Please specify a preset id or name");
            };
            let json = args[3..].iter().any(|a| a == "--json");
            preset_info(query, json)
        }
        "search" => {
            if args.len() < 3 {
                bail!("Usage: {} search <text> [--type <type>] [--category <name>]", args[0]);
            }
            search_presets(&args[2..])
        }
        "apply" => {
            if args.len() < 5 {
                bail!(
                    "Usage: {} apply <preset> <input> <output> [--intensity <0-100>] [--config <file>]",
                    args[0]
                );
            }
            apply_preset(&args[2..])
        }
        "help" | "--help" | "-h" => {
            print_usage(&args[0]);
            Ok(())
        }
        other => {
            print_usage(&args[0]);
            bail!("Unknown command: {}", other)
        }
    }
}

fn print_usage(program: &str) {
    println!("PresetFX v{}", presetfx::VERSION);
    println!();
    println!("Usage: {} <command> [options]", program);
    println!();
    println!("Commands:");
    println!("  list                          List all presets by category");
    println!("  info <preset> [--json]        Show details for a preset (id or name)");
    println!("  search <text> [options]       Search presets");
    println!("  apply <preset> <in> <out>     Apply a preset to an image");
    println!("  help                          Show this help message");
    println!();
    println!("Search options:");
    println!("  --type <type>       transition, effect, colorgrade or custom");
    println!("  --category <name>   Exact category name");
    println!();
    println!("Apply options:");
    println!("  --intensity <0-100> Effect strength (default: config default_slider, else preset default)");
    println!("  --config <file>     TOML engine configuration");
}

fn list_presets() -> Result<()> {
    let catalog = PresetCatalog::with_builtins();

    println!("Available presets ({} total):", catalog.len());
    println!();

    for category in catalog.categories() {
        println!("  {} ({})", category.name, category.preset_count);
        for preset in catalog.presets().filter(|p| p.category == category.name) {
            println!("      {:>4}  {} - {}", preset.id, preset.name, preset.description);
        }
        println!();
    }
    Ok(())
}

fn preset_info(query: &str, json: bool) -> Result<()> {
    let catalog = PresetCatalog::with_builtins();
    let preset = find_preset(&catalog, query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(preset)?);
        return Ok(());
    }

    println!("Preset: {}", preset.name);
    println!("ID: {}", preset.id);
    println!("Type: {}", preset.preset_type.display_name());
    println!("Category: {}", preset.category);
    println!("Version: {}", preset.version);
    println!("Author: {}", preset.author);
    println!("Default intensity: {:.0}%", preset.default_intensity * 100.0);
    println!("Kernel: {}", Kernel::resolve(preset));
    println!();
    println!("Description:");
    println!("  {}", preset.description);
    if !preset.tags.is_empty() {
        println!();
        println!("Tags: {}", preset.tags.join(", "));
    }
    Ok(())
}

fn search_presets(args: &[String]) -> Result<()> {
    let mut filter = SearchFilter::new().with_text(args[0].clone());

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--type" if i + 1 < args.len() => {
                let preset_type = PresetType::parse(&args[i + 1])
                    .with_context(|| format!("Unknown preset type '{}'", args[i + 1]))?;
                filter = filter.with_type(preset_type);
                i += 2;
            }
            "--category" if i + 1 < args.len() => {
                filter = filter.with_category(args[i + 1].clone());
                i += 2;
            }
            other => bail!("Unknown option: {}", other),
        }
    }

    let catalog = PresetCatalog::with_builtins();
    let engine = SearchEngine::new(&catalog);
    let results = engine.resolve(&engine.search(&filter));

    if results.is_empty() {
        println!("No presets match.");
        return Ok(());
    }
    println!("{} preset(s):", results.len());
    for preset in results {
        println!("  {:>4}  {} [{}]", preset.id, preset.name, preset.category);
    }
    Ok(())
}

fn apply_preset(args: &[String]) -> Result<()> {
    let query = &args[0];
    let input_path = &args[1];
    let output_path = &args[2];

    let mut intensity: Option<f64> = None;
    let mut config = EngineConfig::default();

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--intensity" if i + 1 < args.len() => {
                let slider: f64 = args[i + 1]
                    .parse()
                    .with_context(|| format!("Invalid intensity '{}'", args[i + 1]))?;
                intensity = Some(intensity_from_slider(slider));
                i += 2;
            }
            "--config" if i + 1 < args.len() => {
                config = EngineConfig::load(&args[i + 1])
                    .with_context(|| format!("Failed to load config {}", args[i + 1]))?;
                i += 2;
            }
            other => bail!("Unknown option: {}", other),
        }
    }

    let catalog = PresetCatalog::with_builtins();
    let preset = find_preset(&catalog, query)?;
    let fallback = config.session.default_slider.map(intensity_from_slider);
    let intensity = preset.resolve_intensity(intensity.or(fallback));

    let image = image::open(input_path)
        .with_context(|| format!("Failed to open {}", input_path))?
        .to_rgba8();
    let input = FrameBuffer::from(&image);

    println!("Applying '{}' at {:.0}%: {} -> {}", preset.name, intensity * 100.0, input_path, output_path);
    let pipeline = EffectPipeline::with_options(config.pipeline);
    let output = pipeline.render(preset, &input, intensity)?;

    output
        .to_rgba_image()
        .save(output_path)
        .with_context(|| format!("Failed to save {}", output_path))?;
    println!("Image saved to: {}", output_path);
    Ok(())
}

/// Look a preset up by numeric id, `#id`, or exact name.
fn find_preset<'a>(catalog: &'a PresetCatalog, query: &str) -> Result<&'a Preset> {
    if let Ok(n) = query.trim_start_matches('#').parse::<u32>() {
        return Ok(catalog.get_by_id(PresetId(n))?);
    }
    catalog
        .get_by_name(query)
        .with_context(|| "Use 'list' to see available presets.")
}
