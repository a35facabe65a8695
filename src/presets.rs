//! Stock placeholder presets.
//!
//! One-keystroke sizes for the layouts placeholders stand in for most
//! often. Hosts typically bind each preset to its own command and serve
//! it through the [`crate::cache::UriCache`].

use crate::dimensions::DimensionPair;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Full-width banner, 1440×720.
    Hero,
    /// Content card, 400×300.
    Card,
    /// Square avatar, 128×128.
    Avatar,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Hero, Preset::Card, Preset::Avatar];

    pub fn dimensions(self) -> DimensionPair {
        match self {
            Preset::Hero => DimensionPair {
                width: 1440,
                height: 720,
            },
            Preset::Card => DimensionPair {
                width: 400,
                height: 300,
            },
            Preset::Avatar => DimensionPair {
                width: 128,
                height: 128,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Hero => "hero",
            Preset::Card => "card",
            Preset::Avatar => "avatar",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown preset {0:?}, expected hero, card, or avatar")]
pub struct PresetParseError(String);

impl FromStr for Preset {
    type Err = PresetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hero" => Ok(Preset::Hero),
            "card" => Ok(Preset::Card),
            "avatar" => Ok(Preset::Avatar),
            _ => Err(PresetParseError(s.to_string())),
        }
    }
}
