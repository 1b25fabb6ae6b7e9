//! blot - Organic blob composition generator
//!
//! A library for procedurally generating compositions of blurred organic
//! blob shapes with cohesive colour palettes, written out as SVG.
//!
//! The generators (palette, blob path) are pure functions over an explicit
//! random source; the composition step talks to an abstract [`Document`]
//! so it can target any node-tree backend.

pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod output;
pub mod synth;
pub mod types;

pub use compose::{generate_composition, Document, NodeId, SvgDocument};
pub use config::GenerationConfig;
pub use error::{BlotError, Result};
pub use synth::{generate_palette, organic_blob, ColourMode, Preset, PresetSpec};
pub use types::{BlobPath, Colour, PathCommand, Point, WindingRule};
