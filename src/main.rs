use blot::cli::{Cli, Commands};
use blot::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => blot::cli::generate::run(args, &printer)?,
        Commands::Presets(args) => blot::cli::presets::run(args, &printer)?,
        Commands::Completions(args) => blot::cli::completions::run(args)?,
    }

    Ok(())
}
