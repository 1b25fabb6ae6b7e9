//! Generate command implementation.
//!
//! Builds one composition from a config file and/or flags and writes the
//! resulting SVG.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::compose::{generate_composition, SvgDocument};
use crate::config::GenerationConfig;
use crate::error::{BlotError, Result};
use crate::output::{display_path, plural, Printer};
use crate::synth::ColourMode;

/// Generate a blob composition and write it as SVG
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Config file (YAML or JSON); flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of shapes to generate
    #[arg(long, short)]
    pub count: Option<u32>,

    /// Density multiplier applied to the shape count
    #[arg(long)]
    pub density: Option<f32>,

    /// Palette preset (aurora, neon, pastel, dark)
    #[arg(long)]
    pub preset: Option<String>,

    /// Manual hex colour, repeatable; implies manual mode
    #[arg(long = "colour", value_name = "HEX")]
    pub colours: Vec<String>,

    /// Colour mode
    #[arg(long, value_parser = ["manual", "preset"])]
    pub mode: Option<String>,

    /// Base blur radius
    #[arg(long)]
    pub blur: Option<f32>,

    /// Canvas side length
    #[arg(long)]
    pub canvas: Option<f32>,

    /// RNG seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output SVG file
    #[arg(long, short, default_value = "blot.svg")]
    pub output: PathBuf,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let config = resolve_config(&args)?;

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let source = match config.mode {
        ColourMode::Preset => config.preset.clone(),
        ColourMode::Manual => plural(config.colours.len(), "manual colour", "manual colours"),
    };
    printer.status(
        "Generating",
        &format!(
            "{} ({})",
            plural(config.shape_total(), "shape", "shapes"),
            source
        ),
    );

    let mut doc = SvgDocument::new();
    generate_composition(&config, &mut rng, &mut doc)?;

    let svg = doc.to_svg();
    write_output(&args.output, &svg)?;

    printer.status(
        "Writing",
        &format!("{} ({} bytes)", display_path(&args.output), svg.len()),
    );

    Ok(())
}

/// Merge the config file (if any) with flag overrides.
fn resolve_config(args: &GenerateArgs) -> Result<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::load(path)?,
        None => GenerationConfig::default(),
    };

    if let Some(count) = args.count {
        config.count = count;
    }
    if let Some(density) = args.density {
        config.density = density;
    }
    if let Some(preset) = &args.preset {
        config.preset = preset.clone();
    }
    if let Some(blur) = args.blur {
        config.blur = blur;
    }
    if let Some(canvas) = args.canvas {
        config.canvas = canvas;
    }

    if !args.colours.is_empty() {
        config.colours = args.colours.clone();
        config.mode = ColourMode::Manual;
    }

    // An explicit --mode wins over the manual-mode inference above.
    match args.mode.as_deref() {
        Some("manual") => config.mode = ColourMode::Manual,
        Some("preset") => config.mode = ColourMode::Preset,
        _ => {}
    }

    Ok(config)
}

fn write_output(path: &PathBuf, svg: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| BlotError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    fs::write(path, svg).map_err(|e| BlotError::Io {
        path: path.clone(),
        message: format!("Failed to write SVG: {}", e),
    })
}
