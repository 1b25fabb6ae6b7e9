pub mod completions;
pub mod generate;
pub mod presets;

use clap::{Parser, Subcommand};

/// blot - Organic blob composition generator
#[derive(Parser, Debug)]
#[command(name = "blot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a blob composition and write it as SVG
    Generate(generate::GenerateArgs),

    /// List the palette preset catalog
    Presets(presets::PresetsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
