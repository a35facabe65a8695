//! Dimension validation and literal `WxH` parsing.
//!
//! Everything that turns raw user text or raw numbers into a validated
//! [`DimensionPair`] lives here. The bounds check accepts `f64` because
//! ratio resolution ([`crate::ratio`]) produces its derived axis as a
//! float; literal parsing routes its integer captures through the same
//! check so both input shapes share one validation path.
//!
//! ## Accepted literal grammar
//!
//! `<1-4 digits> <separator> <1-4 digits>`, where the separator is a
//! single `x` (or `×`, or `X`) or a whitespace run, with optional
//! whitespace on either side:
//!
//! - `1200x600`, `1200 × 600`, `1200 600`, `  800X600  ` — accepted
//! - `1200xx600`, `12345x600`, `12.5x40`, `1200` — rejected
//!
//! The 4-digit cap keeps every captured value below 10000 before any
//! numeric comparison, so the maximum-bound check never sees an
//! overflowed parse.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stock upper bound for either axis, in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 8192;

/// Which axis a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

/// Host-injected validation bounds.
///
/// The maximum is configuration, not a constant baked into the checks —
/// a deployment that wants tighter placeholders passes a smaller value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub max_dimension: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

/// A validated width × height pair.
///
/// Invariant: both axes are in `1..=max_dimension` for the [`Limits`]
/// they were checked against. Construct via [`parse_literal`],
/// [`check_pair`], or [`crate::ratio::resolve_dimensions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionPair {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for DimensionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

/// A numeric value failed the positivity/integrality/maximum check.
///
/// Variants are ordered by check precedence: a value must be finite
/// before "whole number" means anything, and whole before the positive
/// and maximum comparisons.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RangeError {
    #[error("{0} is not a finite number")]
    NotFinite(Axis),
    #[error("{axis} {value} is not a whole number")]
    NotInteger { axis: Axis, value: f64 },
    #[error("{0} must be greater than zero")]
    NotPositive(Axis),
    #[error("{axis} {value} exceeds the maximum of {max}")]
    ExceedsMax { axis: Axis, value: f64, max: u32 },
}

/// Literal text did not resolve to a valid pair.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected dimensions like 1200x600, got {0:?}")]
    Grammar(String),
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Validate a single dimension value against `limits`.
///
/// Check order: finite → whole number → strictly positive → maximum.
/// The returned `u32` is the exact input value; nothing is clamped or
/// rounded here.
pub fn check_dimension(axis: Axis, value: f64, limits: &Limits) -> Result<u32, RangeError> {
    if !value.is_finite() {
        return Err(RangeError::NotFinite(axis));
    }
    if value.fract() != 0.0 {
        return Err(RangeError::NotInteger { axis, value });
    }
    if value <= 0.0 {
        return Err(RangeError::NotPositive(axis));
    }
    if value > f64::from(limits.max_dimension) {
        return Err(RangeError::ExceedsMax {
            axis,
            value,
            max: limits.max_dimension,
        });
    }
    Ok(value as u32)
}

/// Validate a width/height pair. Width is checked first, so when both
/// axes are out of range the reported failure names the width.
pub fn check_pair(width: f64, height: f64, limits: &Limits) -> Result<DimensionPair, RangeError> {
    let width = check_dimension(Axis::Width, width, limits)?;
    let height = check_dimension(Axis::Height, height, limits)?;
    Ok(DimensionPair { width, height })
}

/// Parse literal `WxH` text into a validated pair.
///
/// Normalizes by trimming, ASCII-lowercasing, and mapping `×` to `x`,
/// then applies the module-level grammar. Grammar failures report
/// [`ParseError::Grammar`]; text that parses but fails validation (for
/// example `0x600` or `9000x600`) reports the underlying [`RangeError`]
/// through [`ParseError::Range`].
///
/// ```
/// use svg_placeholder::dimensions::{parse_literal, DimensionPair, Limits};
///
/// let limits = Limits::default();
/// let pair = parse_literal("1200 × 600", &limits).unwrap();
/// assert_eq!(pair, DimensionPair { width: 1200, height: 600 });
/// ```
pub fn parse_literal(input: &str, limits: &Limits) -> Result<DimensionPair, ParseError> {
    let cleaned = input.trim().to_ascii_lowercase().replace('×', "x");
    let (w, h) =
        split_literal(&cleaned).ok_or_else(|| ParseError::Grammar(input.trim().to_string()))?;
    Ok(check_pair(f64::from(w), f64::from(h), limits)?)
}

/// Split normalized literal text into its two digit groups.
///
/// Exactly one separator is allowed: if the text contains an `x`, the
/// pieces around the first one must both be digit groups (so `1200xx600`
/// fails on its second group); otherwise the text must be exactly two
/// whitespace-separated digit groups.
fn split_literal(cleaned: &str) -> Option<(u32, u32)> {
    let (left, right) = match cleaned.split_once('x') {
        Some((left, right)) => (left, right),
        None => {
            let mut tokens = cleaned.split_whitespace();
            let left = tokens.next()?;
            let right = tokens.next()?;
            if tokens.next().is_some() {
                return None;
            }
            (left, right)
        }
    };
    Some((digit_group(left.trim())?, digit_group(right.trim())?))
}

/// Parse a 1–4 character ASCII digit group.
fn digit_group(token: &str) -> Option<u32> {
    if token.is_empty() || token.len() > 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
