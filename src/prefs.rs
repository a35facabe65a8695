//! Last-used value state, persisted by the host.
//!
//! The resolver and renderer never touch stored state; preferences exist
//! so a host can pre-fill its next prompt with whatever the user chose
//! last ([`crate::commands::Session`] updates them after each successful
//! insertion). Everything is optional — a fresh install has no history.
//!
//! Two stock stores ship with the crate: [`MemoryStore`] for hosts
//! without persistence, and [`JsonFileStore`] for a small JSON state
//! file. Loading is infallible by design: a missing or corrupt state
//! file degrades to defaults rather than blocking the prompt.

use crate::dimensions::DimensionPair;
use crate::ratio::{Orientation, RatioSpec, ResolveMode};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Pre-fill pair used before anything has been stored.
pub const STOCK_DIMS: DimensionPair = DimensionPair {
    width: 1200,
    height: 600,
};

/// Pre-fill base size used before anything has been stored.
pub const STOCK_BASE: u32 = 1200;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_dims: Option<DimensionPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_ratio: Option<RatioSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_orientation: Option<Orientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_mode: Option<ResolveMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_base: Option<u32>,
}

impl Preferences {
    /// Literal-prompt pre-fill: the last pair, else the stock 1200×600.
    pub fn dims_or_stock(&self) -> DimensionPair {
        self.last_dims.unwrap_or(STOCK_DIMS)
    }

    /// Base-size-prompt pre-fill: the last base, else the stock 1200.
    pub fn base_or_stock(&self) -> u32 {
        self.last_base.unwrap_or(STOCK_BASE)
    }
}

/// Host-side persistence for [`Preferences`].
pub trait PreferenceStore {
    /// Current stored state. Missing or unreadable state loads as
    /// `Preferences::default()`.
    fn load(&self) -> Preferences;

    fn save(&mut self, prefs: &Preferences) -> io::Result<()>;
}

/// In-process store for hosts without persistence, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    prefs: Preferences,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Preferences {
        self.prefs.clone()
    }

    fn save(&mut self, prefs: &Preferences) -> io::Result<()> {
        self.prefs = prefs.clone();
        Ok(())
    }
}

/// Pretty-printed JSON state file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> Preferences {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Preferences::default(),
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    fn save(&mut self, prefs: &Preferences) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(prefs)?;
        std::fs::write(&self.path, json)
    }
}
