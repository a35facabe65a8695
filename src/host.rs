//! Host editor boundary.
//!
//! The crate never talks to an editor directly. A host implements
//! [`InsertionTarget`] over whatever its runtime offers (an editor edit
//! builder, a terminal, a test buffer) and [`crate::commands::Session`]
//! pushes finished URIs through it. Multi-cursor behavior, undo, and
//! user-facing messages all live on the host side of this trait.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no active editor target")]
    NoActiveTarget,
    #[error("host rejected the edit: {0}")]
    EditRejected(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Write side of the host editor.
pub trait InsertionTarget {
    /// Insert `text` at every cursor, replacing any non-empty selection.
    ///
    /// One user action maps to one call; the host sequences calls, the
    /// crate never retries a failed edit.
    fn insert_at_selections(&mut self, text: &str) -> Result<(), HostError>;
}
