//! Editor commands: resolve → render → insert → remember.
//!
//! [`Session`] is what a host binds its commands to. It owns the
//! configured [`Limits`] and the URI cache, borrows the host's
//! [`InsertionTarget`] and [`PreferenceStore`], and runs each command as
//! one pass through the pipeline. Preferences are written only after the
//! insertion succeeded — a rejected edit leaves stored state exactly as
//! it was, so the next prompt pre-fills with the last value that
//! actually landed in a document.

use crate::cache::UriCache;
use crate::dimensions::{self, DimensionPair, Limits, ParseError, RangeError};
use crate::host::{HostError, InsertionTarget};
use crate::prefs::{PreferenceStore, Preferences};
use crate::presets::Preset;
use crate::ratio::{Orientation, RatioError, RatioSpec, ResolveMode, resolve_dimensions};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Ratio(#[from] RatioError),
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error(transparent)]
    Host(#[from] HostError),
    #[error("failed to persist preferences: {0}")]
    Prefs(#[source] io::Error),
}

/// One editing session against a host.
pub struct Session<'a, T: InsertionTarget, S: PreferenceStore> {
    target: &'a mut T,
    store: &'a mut S,
    limits: Limits,
    cache: UriCache,
}

impl<'a, T: InsertionTarget, S: PreferenceStore> Session<'a, T, S> {
    pub fn new(target: &'a mut T, store: &'a mut S, limits: Limits) -> Self {
        Self {
            target,
            store,
            limits,
            cache: UriCache::default(),
        }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Pre-fill value for a literal-dimensions prompt.
    pub fn suggested_literal(&self) -> DimensionPair {
        self.store.load().dims_or_stock()
    }

    /// Pre-fill value for a base-size prompt.
    pub fn suggested_base(&self) -> u32 {
        self.store.load().base_or_stock()
    }

    /// Insert a placeholder from literal `WxH` text.
    pub fn insert_literal(&mut self, input: &str) -> Result<DimensionPair, CommandError> {
        let pair = dimensions::parse_literal(input, &self.limits)?;
        self.insert_pair(pair)?;
        self.remember(|prefs| prefs.last_dims = Some(pair))?;
        Ok(pair)
    }

    /// Insert a placeholder computed from an aspect ratio.
    ///
    /// A square ratio leaves the stored orientation and mode untouched —
    /// the square flow never asks for them, so remembering them would
    /// pre-fill the next non-square prompt with values the user never
    /// chose.
    pub fn insert_from_ratio(
        &mut self,
        ratio: RatioSpec,
        orientation: Orientation,
        mode: ResolveMode,
        base: u32,
    ) -> Result<DimensionPair, CommandError> {
        let pair = resolve_dimensions(ratio, orientation, mode, base, &self.limits)?;
        self.insert_pair(pair)?;
        self.remember(|prefs| {
            prefs.last_ratio = Some(ratio);
            if !ratio.is_square() {
                prefs.last_orientation = Some(orientation);
                prefs.last_mode = Some(mode);
            }
            prefs.last_base = Some(base);
            prefs.last_dims = Some(pair);
        })?;
        Ok(pair)
    }

    /// Insert one of the stock presets.
    ///
    /// Preset sizes are constants, but they are still checked against
    /// the session's limits: a deployment bound below 1440 rules the
    /// hero preset out.
    pub fn insert_preset(&mut self, preset: Preset) -> Result<DimensionPair, CommandError> {
        let dims = preset.dimensions();
        let pair =
            dimensions::check_pair(f64::from(dims.width), f64::from(dims.height), &self.limits)?;
        self.insert_pair(pair)?;
        self.remember(|prefs| prefs.last_dims = Some(pair))?;
        Ok(pair)
    }

    fn insert_pair(&mut self, pair: DimensionPair) -> Result<(), CommandError> {
        let uri = self.cache.get_or_render(pair);
        self.target.insert_at_selections(&uri)?;
        Ok(())
    }

    fn remember(&mut self, update: impl FnOnce(&mut Preferences)) -> Result<(), CommandError> {
        let mut prefs = self.store.load();
        update(&mut prefs);
        self.store.save(&prefs).map_err(CommandError::Prefs)
    }
}
