//! Aspect-ratio resolution: ratio + orientation + mode + base → pair.
//!
//! The stock prompt offers the ratios in [`RatioSpec::STANDARD`], but
//! [`RatioSpec`] also implements `FromStr` so hosts can inject arbitrary
//! `A:B` values — which is why [`resolve_dimensions`] guards against a
//! zero component even though the standard set can never produce one.
//!
//! ## Rounding
//!
//! The derived axis is computed in `f64` and rounded with [`f64::round`]
//! — half away from zero. Every product here is strictly positive, so
//! `.5` always rounds up.

use crate::dimensions::{Axis, DimensionPair, Limits, RangeError, check_dimension};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A width:height proportion, e.g. `4:3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RatioSpec {
    pub a: u32,
    pub b: u32,
}

impl RatioSpec {
    pub const SQUARE: RatioSpec = RatioSpec { a: 1, b: 1 };

    /// The ratio choices offered by the stock host prompt.
    pub const STANDARD: [RatioSpec; 4] = [
        RatioSpec { a: 1, b: 1 },
        RatioSpec { a: 4, b: 3 },
        RatioSpec { a: 4, b: 5 },
        RatioSpec { a: 16, b: 9 },
    ];

    pub fn is_square(self) -> bool {
        self.a == self.b
    }

    /// `(a, b)` with Portrait swapped.
    fn oriented(self, orientation: Orientation) -> (u32, u32) {
        match orientation {
            Orientation::Landscape => (self.a, self.b),
            Orientation::Portrait => (self.b, self.a),
        }
    }
}

impl fmt::Display for RatioSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.a, self.b)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected a ratio like 4:3, got {0:?}")]
pub struct RatioParseError(String);

impl FromStr for RatioSpec {
    type Err = RatioParseError;

    /// Parses `A:B` with optional whitespace around the colon. Zero
    /// components pass the grammar; [`resolve_dimensions`] rejects them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.trim().split_once(':').and_then(|(a, b)| {
            Some(RatioSpec {
                a: a.trim().parse().ok()?,
                b: b.trim().parse().ok()?,
            })
        });
        parts.ok_or_else(|| RatioParseError(s.to_string()))
    }
}

/// Whether the ratio is applied as given or swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Landscape => write!(f, "landscape"),
            Orientation::Portrait => write!(f, "portrait"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected landscape or portrait, got {0:?}")]
pub struct OrientationParseError(String);

impl FromStr for Orientation {
    type Err = OrientationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landscape" => Ok(Orientation::Landscape),
            "portrait" => Ok(Orientation::Portrait),
            _ => Err(OrientationParseError(s.to_string())),
        }
    }
}

/// Which axis the base value fixes; the other axis is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolveMode {
    /// Base value is the width, height is computed.
    FromWidth,
    /// Base value is the height, width is computed.
    FromHeight,
}

impl ResolveMode {
    /// The axis the base value lands on.
    pub fn base_axis(self) -> Axis {
        match self {
            ResolveMode::FromWidth => Axis::Width,
            ResolveMode::FromHeight => Axis::Height,
        }
    }
}

impl fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveMode::FromWidth => write!(f, "from-width"),
            ResolveMode::FromHeight => write!(f, "from-height"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected from-width or from-height, got {0:?}")]
pub struct ModeParseError(String);

impl FromStr for ResolveMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "from-width" | "width" | "w" => Ok(ResolveMode::FromWidth),
            "from-height" | "height" | "h" => Ok(ResolveMode::FromHeight),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

/// A ratio request failed to resolve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RatioError {
    #[error("ratio {0} has a zero component")]
    InvalidRatio(RatioSpec),
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Compute a validated pair from a ratio, orientation, mode, and base
/// value.
///
/// The base value is validated against `limits` on its own axis. A
/// square ratio short-circuits to `(base, base)` with no float math, so
/// width and height are guaranteed integer-equal; orientation and mode
/// are irrelevant for it. Otherwise the derived axis is rounded (see the
/// module docs) and bounds-checked — a wide ratio with a large base can
/// push the derived axis past the maximum even though the base itself is
/// valid, and an extreme injected ratio can round it down to zero.
///
/// ```
/// use svg_placeholder::dimensions::Limits;
/// use svg_placeholder::ratio::{Orientation, RatioSpec, ResolveMode, resolve_dimensions};
///
/// let limits = Limits::default();
/// let pair = resolve_dimensions(
///     RatioSpec { a: 4, b: 3 },
///     Orientation::Landscape,
///     ResolveMode::FromWidth,
///     1200,
///     &limits,
/// )
/// .unwrap();
/// assert_eq!((pair.width, pair.height), (1200, 900));
/// ```
pub fn resolve_dimensions(
    ratio: RatioSpec,
    orientation: Orientation,
    mode: ResolveMode,
    base: u32,
    limits: &Limits,
) -> Result<DimensionPair, RatioError> {
    if ratio.a == 0 || ratio.b == 0 {
        return Err(RatioError::InvalidRatio(ratio));
    }

    let base = check_dimension(mode.base_axis(), f64::from(base), limits)?;

    if ratio.is_square() {
        return Ok(DimensionPair {
            width: base,
            height: base,
        });
    }

    let (a, b) = ratio.oriented(orientation);
    let pair = match mode {
        ResolveMode::FromWidth => {
            let derived = (f64::from(base) * f64::from(b) / f64::from(a)).round();
            DimensionPair {
                width: base,
                height: check_dimension(Axis::Height, derived, limits)?,
            }
        }
        ResolveMode::FromHeight => {
            let derived = (f64::from(base) * f64::from(a) / f64::from(b)).round();
            DimensionPair {
                width: check_dimension(Axis::Width, derived, limits)?,
                height: base,
            }
        }
    };
    Ok(pair)
}
