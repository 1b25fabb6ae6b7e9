//! The fixed palette preset catalog.

use std::fmt;
use std::str::FromStr;

use crate::error::{BlotError, Result};

/// A named palette preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Aurora,
    Neon,
    Pastel,
    Dark,
}

/// Generation ranges for one preset: saturation, lightness and the maximum
/// hue drift (degrees) applied per palette entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetSpec {
    pub sat: (f32, f32),
    pub light: (f32, f32),
    pub hue_drift: f32,
}

impl Preset {
    /// Every preset in the catalog.
    pub const ALL: [Preset; 4] = [Preset::Aurora, Preset::Neon, Preset::Pastel, Preset::Dark];

    /// The preset's generation ranges.
    pub fn spec(self) -> PresetSpec {
        match self {
            Preset::Aurora => PresetSpec {
                sat: (0.55, 0.75),
                light: (0.55, 0.7),
                hue_drift: 40.0,
            },
            Preset::Neon => PresetSpec {
                sat: (0.85, 1.0),
                light: (0.5, 0.6),
                hue_drift: 25.0,
            },
            Preset::Pastel => PresetSpec {
                sat: (0.3, 0.45),
                light: (0.7, 0.82),
                hue_drift: 30.0,
            },
            Preset::Dark => PresetSpec {
                sat: (0.45, 0.7),
                light: (0.25, 0.38),
                hue_drift: 35.0,
            },
        }
    }

    /// The preset's catalog name.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Aurora => "aurora",
            Preset::Neon => "neon",
            Preset::Pastel => "pastel",
            Preset::Dark => "dark",
        }
    }
}

impl FromStr for Preset {
    type Err = BlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "aurora" => Ok(Preset::Aurora),
            "neon" => Ok(Preset::Neon),
            "pastel" => Ok(Preset::Pastel),
            "dark" => Ok(Preset::Dark),
            _ => Err(BlotError::UnknownPreset {
                name: s.to_string(),
                help: Some("Available presets: aurora, neon, pastel, dark".to_string()),
            }),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
