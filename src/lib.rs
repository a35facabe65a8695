//! # SVG Placeholder
//!
//! Deterministic SVG placeholder images as `data:` URIs, sized by literal
//! dimensions (`1200x600`) or by aspect ratio (`4:3`, portrait, from a base
//! width). Built for editor integrations: the host collects user input and
//! owns the document, this crate owns everything between raw input and the
//! finished URI string.
//!
//! # Architecture: Resolve → Render → Insert
//!
//! ```text
//! 1. Resolve   "1200x600" / 4:3 + base  →  DimensionPair  (validated)
//! 2. Render    DimensionPair            →  SVG markup     →  data URI
//! 3. Insert    data URI                 →  host document  (via trait)
//! ```
//!
//! The first two stages are pure functions of their inputs. Stage 3 is a
//! trait boundary ([`host::InsertionTarget`]) because cursor handling,
//! prompting, and undo belong to the host editor, not to this crate.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`dimensions`] | `DimensionPair`, configurable `Limits`, bounds checking, literal `WxH` parsing |
//! | [`ratio`] | Aspect-ratio specs, orientation, resolve mode, and the ratio → pair computation |
//! | [`svg`] | Markup rendering (maud) and the minimal-escape data-URI encoding |
//! | [`cache`] | Bounded FIFO memo of rendered URIs for the preset commands |
//! | [`presets`] | Stock sizes: hero 1440×720, card 400×300, avatar 128×128 |
//! | [`prefs`] | Last-used values the host persists to pre-fill its prompts |
//! | [`host`] | `InsertionTarget` trait — the seam to the editor |
//! | [`commands`] | `Session` — drives resolve → render → insert → remember |
//!
//! # Design Decisions
//!
//! ## Maud Over String Templates
//!
//! The SVG payload is rendered with [Maud](https://maud.lambda.xyz/), a
//! compile-time markup macro, rather than `format!` templates. Malformed
//! markup is a build error, interpolation is type-checked, and the output
//! carries no incidental whitespace — which keeps the encoded URI stable
//! byte for byte across releases.
//!
//! ## Minimal Escaping, Exact Bytes
//!
//! [`svg::inline_uri`] escapes exactly four characters (`#`, `<`, `>`,
//! `"`) and collapses whitespace runs. Full percent-encoding is deliberately
//! not used: the four-character set is what the embedding context requires,
//! and the output bytes are part of the crate's contract — two calls with
//! the same dimensions always produce identical strings.
//!
//! ## Validation Takes Floats
//!
//! Ratio resolution multiplies through `f64`, so the bounds check accepts
//! `f64` and classifies non-finite and fractional values before the usual
//! positivity and maximum checks. Literal parsing feeds the same check, so
//! both input shapes share one validation path. The maximum bound lives in
//! [`dimensions::Limits`] and is injected by the host, not hard-coded.
//!
//! ## The Host Owns Prompts and State
//!
//! Interactive prompting, multi-cursor insertion, and persisted last-used
//! values are host facilities. This crate only defines the traits
//! ([`host::InsertionTarget`], [`prefs::PreferenceStore`]) plus two stock
//! stores, and [`commands::Session`] updates preferences strictly after a
//! successful insertion — a rejected edit leaves stored state untouched.

pub mod cache;
pub mod commands;
pub mod dimensions;
pub mod host;
pub mod prefs;
pub mod presets;
pub mod ratio;
pub mod svg;
