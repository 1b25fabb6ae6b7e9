//! Palette synthesis.
//!
//! A palette is an ordered run of colours that reads as one family: every
//! entry shares a base hue and drifts away from it a bounded amount, with
//! a small per-index progression so neighbouring blobs blend into each
//! other instead of clashing.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Colour;

use super::preset::Preset;

/// How palette colours are sourced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColourMode {
    /// Explicit hex colour list from the request.
    Manual,

    /// Generated from a named preset.
    #[default]
    Preset,
}

/// Normalize a hue angle into `[0, 360)`.
fn normalize_hue(h: f32) -> f32 {
    (h + 360.0) % 360.0
}

/// Generate an ordered sequence of colours for a composition.
///
/// In manual mode the output is the hex list mapped to colours, one per
/// entry; `count` and `preset` are ignored. In preset mode the output has
/// exactly `count` entries drawn around a shared random base hue using the
/// preset's saturation, lightness and hue-drift ranges. An unknown preset
/// name fails with [`BlotError::UnknownPreset`].
///
/// [`BlotError::UnknownPreset`]: crate::error::BlotError::UnknownPreset
pub fn generate_palette<R: Rng + ?Sized>(
    rng: &mut R,
    preset: &str,
    count: usize,
    manual_colours: &[String],
    mode: ColourMode,
) -> Result<Vec<Colour>> {
    if mode == ColourMode::Manual {
        return Ok(manual_colours
            .iter()
            .map(|hex| Colour::from_hex(hex))
            .collect());
    }

    // One base hue anchors the whole palette.
    let base_hue: f32 = rng.random_range(0.0..360.0);
    let spec = preset.parse::<Preset>()?.spec();

    let palette = (0..count)
        .map(|i| {
            // Per-index progression: the index scales a fresh draw, it is
            // not a running sum of earlier draws.
            let hue = base_hue
                + rng.random_range(-spec.hue_drift..spec.hue_drift)
                + i as f32 * rng.random_range(6.0..14.0);

            let sat = rng.random_range(spec.sat.0..spec.sat.1);
            let light = rng.random_range(spec.light.0..spec.light.1);

            Colour::from_hsl(normalize_hue(hue), sat, light)
        })
        .collect();

    Ok(palette)
}
