//! Line rasterization and line-of-sight evaluation.
//!
//! [`rasterize`] walks a 4-connected error-accumulation line between two
//! cells. Where the ideal segment passes through a cell corner (within
//! [`CORNER_EPSILON`]) and the walk turns there, the "strut" cell beside
//! that corner is dropped and the path cuts diagonally through it instead.
//! This keeps a sight line from hugging both jambs of a diagonal doorway.
//! Consecutive waypoints are always 8-neighbours.
//!
//! The walk always runs from the smaller endpoint (by [`Coordinate`]'s
//! ordering), so `rasterize(b, a)` is exactly `rasterize(a, b)` reversed.

use sightline_core::{lies_on_segment, Coordinate, TileAccess};
use std::ops::Index;

/// Absolute tolerance of the corner-on-segment test.
pub const CORNER_EPSILON: f64 = 1e-4;

/// An ordered, non-empty sequence of cells.
///
/// Produced by [`rasterize`]; always starts at the start and ends at the
/// end of the traversal (a single cell when both coincide).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    waypoints: Vec<Coordinate>,
}

impl Path {
    /// Wrap a list of waypoints. Returns `None` if `waypoints` is empty.
    pub fn from_waypoints(waypoints: Vec<Coordinate>) -> Option<Self> {
        if waypoints.is_empty() {
            None
        } else {
            Some(Self { waypoints })
        }
    }

    /// A one-cell path.
    pub fn single(at: Coordinate) -> Self {
        Self {
            waypoints: vec![at],
        }
    }

    /// First waypoint.
    pub fn start(&self) -> Coordinate {
        self.waypoints[0]
    }

    /// Last waypoint.
    pub fn end(&self) -> Coordinate {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Number of waypoints, at least 1.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always returns `false`: a path has at least one waypoint.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The waypoints in traversal order.
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.waypoints
    }

    /// Iterate over waypoints in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.waypoints.iter()
    }

    /// Waypoints strictly between start and end.
    pub fn interior(&self) -> &[Coordinate] {
        match self.waypoints.len() {
            0..=2 => &[],
            n => &self.waypoints[1..n - 1],
        }
    }

    /// Whether `at` is one of the waypoints.
    pub fn contains(&self, at: Coordinate) -> bool {
        self.waypoints.contains(&at)
    }

    /// Reverse the traversal order in place.
    pub fn reverse(&mut self) {
        self.waypoints.reverse();
    }

    /// The same path traversed from end to start.
    pub fn reversed(mut self) -> Self {
        self.reverse();
        self
    }

    /// Unwrap into the waypoint list.
    pub fn into_vec(self) -> Vec<Coordinate> {
        self.waypoints
    }

    /// First waypoint that blocks line of sight on `grid`.
    ///
    /// Start and end are only checked when `include_endpoints` is set.
    /// Cells missing from the grid block.
    pub fn first_blocking<G>(&self, grid: &G, include_endpoints: bool) -> Option<Coordinate>
    where
        G: TileAccess + ?Sized,
    {
        let checked = if include_endpoints {
            self.as_slice()
        } else {
            self.interior()
        };
        checked.iter().copied().find(|&at| grid.blocks_los(at))
    }

    /// `true` iff no checked waypoint blocks line of sight on `grid`.
    ///
    /// See [`first_blocking`](Self::first_blocking) for which cells are checked.
    pub fn is_line_of_sight<G>(&self, grid: &G, include_endpoints: bool) -> bool
    where
        G: TileAccess + ?Sized,
    {
        self.first_blocking(grid, include_endpoints).is_none()
    }
}

impl Index<usize> for Path {
    type Output = Coordinate;

    fn index(&self, index: usize) -> &Coordinate {
        &self.waypoints[index]
    }
}

impl AsRef<[Coordinate]> for Path {
    fn as_ref(&self) -> &[Coordinate] {
        &self.waypoints
    }
}

impl IntoIterator for Path {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}

/// Rasterize the segment from `start` to `end`.
///
/// The result always begins with `start` and ends with `end`, in that
/// order. Axis-aligned segments step one cell at a time. Any other segment
/// takes exactly `|dx| + |dy|` unit steps, each in whichever axis leaves
/// the smaller cross-product error. When a cell's forward corner lies on
/// the segment (within [`CORNER_EPSILON`]) and the walk turns at the next
/// cell, that strut cell is left out, so the path steps diagonally.
///
/// `rasterize(b, a)` is `rasterize(a, b)` reversed: both walk from the
/// smaller endpoint.
///
/// # Examples
///
/// ```
/// use sightline_core::Coordinate;
/// use sightline_grid::rasterize;
///
/// let c = Coordinate::new;
/// let path = rasterize(c(0, 0), c(3, 3));
/// assert_eq!(path.as_slice(), &[c(0, 0), c(1, 1), c(2, 2), c(3, 3)]);
/// ```
pub fn rasterize(start: Coordinate, end: Coordinate) -> Path {
    // Always walk from the smaller endpoint so both directions agree.
    if end < start {
        return rasterize(end, start).reversed();
    }
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);

    let waypoints = if dx == 0 || dy == 0 {
        axis_line(start, end, dx, dy)
    } else {
        diagonal_line(start, end, dx, dy)
    };
    Path { waypoints }
}

fn axis_line(start: Coordinate, end: Coordinate, dx: i64, dy: i64) -> Vec<Coordinate> {
    let (sx, sy) = (dx.signum() as i32, dy.signum() as i32);
    let steps = dx.unsigned_abs().max(dy.unsigned_abs()) as usize;
    let mut cells = Vec::with_capacity(steps + 1);
    let mut cur = start;
    for _ in 0..steps {
        cells.push(cur);
        cur = cur.offset(sx, sy);
    }
    cells.push(end);
    cells
}

fn diagonal_line(start: Coordinate, end: Coordinate, dx: i64, dy: i64) -> Vec<Coordinate> {
    let (sx, sy) = (dx.signum(), dy.signum());
    // Change in cross-product error for a unit step along each axis.
    let x_step_error = dy * sx;
    let y_step_error = -dx * sy;

    let from = (f64::from(start.x), f64::from(start.y));
    let to = (f64::from(end.x), f64::from(end.y));
    let half = (0.5 * sx as f64, 0.5 * sy as f64);

    let steps = (dx.unsigned_abs() + dy.unsigned_abs()) as usize;
    let mut cells = Vec::with_capacity(steps + 1);
    let mut cur = start;
    let mut error = 0i64;
    // Axis of the step into `cur` (true for x), and whether the previous
    // cell's corner lies on the segment.
    let mut entered_x: Option<bool> = None;
    let mut corner_hit = false;

    for _ in 0..steps {
        let ex = error + x_step_error;
        let ey = error + y_step_error;
        let leaves_x = ex.abs() <= ey.abs();

        // A strut is only skipped when the walk turns the corner around it;
        // otherwise it is a real cell of the line.
        let is_strut = corner_hit && entered_x.is_some_and(|x| x != leaves_x);
        if is_strut {
            tracing::trace!(cell = %cur, "skipping strut cell");
            corner_hit = false;
        } else {
            cells.push(cur);
            let corner = (f64::from(cur.x) + half.0, f64::from(cur.y) + half.1);
            corner_hit = lies_on_segment(from, to, corner, CORNER_EPSILON);
        }

        if leaves_x {
            cur.x += sx as i32;
            error = ex;
        } else {
            cur.y += sy as i32;
            error = ey;
        }
        entered_x = Some(leaves_x);
    }

    cells.push(end);
    cells
}

/// Discrete betweenness: does `c` lie on the rasterized line from `a` to `b`?
pub fn is_on_line(a: Coordinate, b: Coordinate, c: Coordinate) -> bool {
    rasterize(a, b).contains(c)
}

/// Line of sight between two cells on `grid`.
///
/// Shorthand for `rasterize(from, to).is_line_of_sight(grid, include_endpoints)`.
pub fn line_of_sight<G>(grid: &G, from: Coordinate, to: Coordinate, include_endpoints: bool) -> bool
where
    G: TileAccess + ?Sized,
{
    rasterize(from, to).is_line_of_sight(grid, include_endpoints)
}
