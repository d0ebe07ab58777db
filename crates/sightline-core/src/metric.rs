//! Pluggable distance metrics.

use crate::coord::Coordinate;
use std::fmt;

/// A distance function between two grid points.
///
/// The built-in variants are all monotone non-decreasing as a point moves
/// away from the center column along a fixed row. Disc enumeration relies
/// on that property to skip rows early; [`Metric::Custom`] functions are
/// given the same treatment without any check, so they must satisfy it too
/// for disc results to be exact.
///
/// # Examples
///
/// ```
/// use sightline_core::{Coordinate, Metric};
///
/// let a = Coordinate::new(0, 0);
/// let b = Coordinate::new(3, 4);
/// assert_eq!(Metric::Euclidean.distance(a, b), 5.0);
/// assert_eq!(Metric::Chebyshev.distance(a, b), 4.0);
/// assert_eq!(Metric::Manhattan.distance(a, b), 7.0);
/// ```
#[derive(Clone, Copy, Default)]
pub enum Metric {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// King-move distance, `max(|dx|, |dy|)`.
    Chebyshev,
    /// Taxicab distance, `|dx| + |dy|`.
    Manhattan,
    /// Caller-supplied function.
    Custom(fn(Coordinate, Coordinate) -> f64),
}

impl Metric {
    /// Distance between `a` and `b` under this metric.
    pub fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            Self::Euclidean => a.distance_euclidean(b),
            Self::Chebyshev => f64::from(a.distance_chebyshev(b)),
            Self::Manhattan => f64::from(a.distance_manhattan(b)),
            Self::Custom(f) => f(a, b),
        }
    }

    /// Whether this metric is known to be monotone along a row away from
    /// the center column.
    ///
    /// `false` only means "unknown": custom functions are never inspected.
    pub fn is_row_monotone(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Short lowercase name, `"custom"` for caller-supplied functions.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Chebyshev => "chebyshev",
            Self::Manhattan => "manhattan",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Euclidean => f.write_str("Euclidean"),
            Self::Chebyshev => f.write_str("Chebyshev"),
            Self::Manhattan => f.write_str("Manhattan"),
            Self::Custom(func) => f.debug_tuple("Custom").field(&(*func as *const ())).finish(),
        }
    }
}

impl PartialEq for Metric {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => std::ptr::fn_addr_eq(*a, *b),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
