//! Procedural generators.
//!
//! Pure functions over an explicit random source: palette synthesis from
//! presets or manual colour lists, and organic blob outline synthesis.

mod blob;
mod palette;
mod preset;

pub use blob::organic_blob;
pub use palette::{generate_palette, ColourMode};
pub use preset::{Preset, PresetSpec};
