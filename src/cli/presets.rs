//! Presets command implementation.
//!
//! Prints the preset catalog with its generation ranges.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::synth::Preset;

/// List the palette preset catalog
#[derive(Args, Debug)]
pub struct PresetsArgs {}

pub fn run(_args: PresetsArgs, printer: &Printer) -> Result<()> {
    for preset in Preset::ALL {
        let spec = preset.spec();
        printer.info(
            preset.name(),
            &format!(
                "sat {:.2}..{:.2}  light {:.2}..{:.2}  {}",
                spec.sat.0,
                spec.sat.1,
                spec.light.0,
                spec.light.1,
                printer.dim(&format!("hue drift up to {:.0} deg", spec.hue_drift)),
            ),
        );
    }

    Ok(())
}
