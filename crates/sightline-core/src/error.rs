//! Error types for the Sightline geometry kernel.
//!
//! Two families: [`ParseError`] for recoverable text-to-coordinate failures,
//! and [`GeometryError`] for invalid arguments handed to geometric queries.

use crate::coord::Coordinate;
use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

/// Errors from parsing a textual point literal.
///
/// Returned by [`codec::parse`](crate::codec::parse). All variants are
/// recoverable: callers decide whether to fall back to a default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or whitespace only.
    Empty,
    /// The literal does not match any accepted grammar.
    Malformed {
        /// The offending input, trimmed.
        input: String,
        /// What went wrong.
        reason: &'static str,
    },
    /// A component is not a valid `i32`.
    InvalidNumber {
        /// The component text.
        input: String,
        /// The underlying integer parse failure.
        source: ParseIntError,
    },
    /// A relative shift was requested without a base coordinate.
    MissingBase,
    /// A relative shift was requested but shifts are disabled for this call.
    ShiftNotAllowed,
    /// Two shift signs in a row (`+-`, `-+`, `--`, `++`).
    DoubleShift,
    /// Applying the shift to the base overflows `i32`.
    ShiftOverflow {
        /// The base coordinate.
        base: Coordinate,
        /// The parsed offset.
        offset: Coordinate,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty point literal"),
            Self::Malformed { input, reason } => {
                write!(f, "malformed point literal '{input}': {reason}")
            }
            Self::InvalidNumber { input, source } => {
                write!(f, "invalid coordinate component '{input}': {source}")
            }
            Self::MissingBase => write!(f, "relative point literal requires a base coordinate"),
            Self::ShiftNotAllowed => write!(f, "relative point literals are not allowed here"),
            Self::DoubleShift => write!(f, "point literal has more than one shift sign"),
            Self::ShiftOverflow { base, offset } => {
                write!(f, "shifting {base} by {offset} overflows")
            }
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidNumber { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Invalid arguments to a geometric query.
///
/// These indicate a programming error at the call site; the query is not
/// attempted and nothing is clamped.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// A disc was requested with a negative radius.
    NegativeRadius {
        /// The rejected radius.
        radius: i32,
    },
    /// A tolerance is NaN or infinite.
    InvalidTolerance {
        /// The rejected tolerance.
        value: f64,
    },
    /// The query's scan window leaves the `i32` coordinate range.
    CoordinateOverflow {
        /// Center of the query.
        center: Coordinate,
        /// Radius of the query.
        radius: i32,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeRadius { radius } => {
                write!(f, "radius must be non-negative, got {radius}")
            }
            Self::InvalidTolerance { value } => {
                write!(f, "tolerance must be finite, got {value}")
            }
            Self::CoordinateOverflow { center, radius } => {
                write!(
                    f,
                    "radius {radius} around {center} exceeds the coordinate range"
                )
            }
        }
    }
}

impl Error for GeometryError {}
