//! The [`Coordinate`] value type and its geometric predicates.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Absolute tolerance for the continuous [`is_in_between`] test.
pub const BETWEEN_EPSILON: f64 = 1e-5;

/// All 8 neighbour offsets, `dx` outer and `dy` inner.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The 4 orthogonal offsets: W, N, S, E (same relative order as `OFFSETS_8`).
const OFFSETS_4: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// A point on an integer grid.
///
/// When addressing a grid, `x` is the column index and `y` the row index.
/// Equality, ordering and hashing all derive from `(x, y)`.
///
/// # Examples
///
/// ```
/// use sightline_core::Coordinate;
///
/// let a = Coordinate::new(1, 2);
/// let b = Coordinate::new(3, -1);
/// assert_eq!(a + b, Coordinate::new(4, 1));
/// assert_eq!(a.to_string(), "(1,2)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coordinate {
    /// `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Componentwise addition, `None` on `i32` overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(rhs.x)?,
            y: self.y.checked_add(rhs.y)?,
        })
    }

    /// Componentwise subtraction, `None` on `i32` overflow.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_sub(rhs.x)?,
            y: self.y.checked_sub(rhs.y)?,
        })
    }

    /// The eight surrounding points in a fixed order.
    ///
    /// Offsets run `dx` outer, `dy` inner over `-1..=1`, skipping `(0, 0)`:
    /// `(-1,-1), (-1,0), (-1,1), (0,-1), (0,1), (1,-1), (1,0), (1,1)`.
    pub fn neighbors(self) -> [Coordinate; 8] {
        OFFSETS_8.map(|(dx, dy)| self.offset(dx, dy))
    }

    /// The four orthogonally adjacent points.
    pub fn orthogonal_neighbors(self) -> [Coordinate; 4] {
        OFFSETS_4.map(|(dx, dy)| self.offset(dx, dy))
    }

    /// `true` iff both axis differences are at most 1.
    ///
    /// A point counts as its own neighbour.
    pub fn is_neighbor(self, other: Coordinate) -> bool {
        self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }

    /// Straight-line distance.
    pub fn distance_euclidean(self, other: Coordinate) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// King-move distance: `max(|dx|, |dy|)`.
    pub fn distance_chebyshev(self, other: Coordinate) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Taxicab distance: `|dx| + |dy|`. Saturates at `u32::MAX`.
    pub fn distance_manhattan(self, other: Coordinate) -> u32 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }

    /// Angle of the vector from `other` to `self`, in degrees within `[0, 360)`.
    ///
    /// Computed as `atan2(self.y - other.y, self.x - other.x)`.
    pub fn angle_degrees(self, other: Coordinate) -> f64 {
        let dy = f64::from(self.y) - f64::from(other.y);
        let dx = f64::from(self.x) - f64::from(other.x);
        let mut deg = dy.atan2(dx).to_degrees();
        if deg < 0.0 {
            deg += 360.0;
        }
        // A tiny negative angle rounds up to exactly 360 after the shift.
        if deg >= 360.0 {
            deg -= 360.0;
        }
        deg
    }

    /// Inclusive rectangle containment, see [`is_in_bounds`].
    pub fn is_in_bounds(self, lower_left: Coordinate, upper_right: Coordinate) -> bool {
        is_in_bounds(self, lower_left, upper_right)
    }
}

/// Inclusive containment of `p` in the rectangle spanned by two corners.
///
/// Each axis is checked independently as `lower <= p <= upper`. The corners
/// are not reordered, so a "lower" corner that is numerically larger than
/// the "upper" one on some axis contains nothing.
pub fn is_in_bounds(p: Coordinate, lower_left: Coordinate, upper_right: Coordinate) -> bool {
    p.x >= lower_left.x && p.x <= upper_right.x && p.y >= lower_left.y && p.y <= upper_right.y
}

/// Continuous betweenness: does `c` lie on the segment from `a` to `b`?
///
/// True iff `dist(a, b)` equals `dist(a, c) + dist(c, b)` within
/// [`BETWEEN_EPSILON`].
pub fn is_in_between(a: Coordinate, b: Coordinate, c: Coordinate) -> bool {
    let p = |q: Coordinate| (f64::from(q.x), f64::from(q.y));
    lies_on_segment(p(a), p(b), p(c), BETWEEN_EPSILON)
}

/// Sum-of-distances segment test on real-valued points.
///
/// Shared by [`is_in_between`] and the rasterizer's corner-cut check, which
/// differ only in `epsilon`.
pub fn lies_on_segment(a: (f64, f64), b: (f64, f64), c: (f64, f64), epsilon: f64) -> bool {
    let dist = |p: (f64, f64), q: (f64, f64)| ((p.0 - q.0).powi(2) + (p.1 - q.1).powi(2)).sqrt();
    (dist(a, b) - (dist(a, c) + dist(c, b))).abs() < epsilon
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;
    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;
    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;
    fn neg(self) -> Coordinate {
        Coordinate::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Coordinate {
    type Output = Coordinate;
    fn mul(self, rhs: i32) -> Coordinate {
        Coordinate::new(self.x * rhs, self.y * rhs)
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, rhs: Coordinate) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Coordinate {
    fn sub_assign(&mut self, rhs: Coordinate) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
