//! Disc enumeration for range queries.

use indexmap::IndexSet;
use sightline_core::{Coordinate, GeometryError, Metric};

/// A validated-on-use description of a disc query.
///
/// Builder-input for [`enumerate`]: the center and radius are required,
/// tolerance defaults to `0.0` and the metric to [`Metric::Euclidean`].
///
/// # Examples
///
/// ```
/// use sightline_core::{Coordinate, Metric};
/// use sightline_grid::DiscQuery;
///
/// let cells = DiscQuery::new(Coordinate::new(0, 0), 1)
///     .with_metric(Metric::Chebyshev)
///     .enumerate()
///     .unwrap();
/// assert_eq!(cells.len(), 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscQuery {
    /// Center of the disc.
    pub center: Coordinate,
    /// Inclusive radius; must be non-negative.
    pub radius: i32,
    /// Slack added to the radius test; widens the disc toward a square.
    pub tolerance: f64,
    /// Distance function.
    pub metric: Metric,
}

impl DiscQuery {
    /// A query with zero tolerance under the Euclidean metric.
    pub fn new(center: Coordinate, radius: i32) -> Self {
        Self {
            center,
            radius,
            tolerance: 0.0,
            metric: Metric::default(),
        }
    }

    /// Replace the tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replace the metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Check the query's arguments without enumerating anything.
    ///
    /// # Errors
    ///
    /// [`GeometryError::NegativeRadius`] for `radius < 0`,
    /// [`GeometryError::InvalidTolerance`] for a NaN or infinite tolerance,
    /// and [`GeometryError::CoordinateOverflow`] when the scan window
    /// `center ± radius` does not fit in `i32`.
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.scan_window().map(|_| ())
    }

    /// Enumerate the cells of this disc. See [`enumerate`].
    pub fn enumerate(&self) -> Result<IndexSet<Coordinate>, GeometryError> {
        let (lo, hi) = self.scan_window()?;
        if !self.metric.is_row_monotone() {
            tracing::debug!(
                center = %self.center,
                radius = self.radius,
                "enumerating disc with a custom metric; rows are skipped assuming row monotonicity"
            );
        }

        let admits = |p: Coordinate| {
            self.metric.distance(self.center, p) - self.tolerance <= f64::from(self.radius)
        };

        let mut cells = IndexSet::new();
        for y in lo.y..=hi.y {
            // The center column is the nearest point of the row under a
            // row-monotone metric; if it misses, so does the whole row.
            if !admits(Coordinate::new(self.center.x, y)) {
                continue;
            }
            let mut left = lo.x;
            while !admits(Coordinate::new(left, y)) {
                left += 1;
            }
            let mut right = hi.x;
            while !admits(Coordinate::new(right, y)) {
                right -= 1;
            }
            cells.extend((left..=right).map(|x| Coordinate::new(x, y)));
        }
        Ok(cells)
    }

    /// Inclusive corners of the square scanned by [`enumerate`](Self::enumerate).
    fn scan_window(&self) -> Result<(Coordinate, Coordinate), GeometryError> {
        if self.radius < 0 {
            return Err(GeometryError::NegativeRadius {
                radius: self.radius,
            });
        }
        if !self.tolerance.is_finite() {
            return Err(GeometryError::InvalidTolerance {
                value: self.tolerance,
            });
        }
        let reach = Coordinate::new(self.radius, self.radius);
        let overflow = || GeometryError::CoordinateOverflow {
            center: self.center,
            radius: self.radius,
        };
        let lo = self.center.checked_sub(reach).ok_or_else(overflow)?;
        let hi = self.center.checked_add(reach).ok_or_else(overflow)?;
        Ok((lo, hi))
    }
}

/// All cells within `radius` of `center` under `metric`.
///
/// A cell `p` belongs to the disc iff
/// `metric(center, p) - tolerance <= radius`. Rows are scanned from the
/// outside in: a row is skipped when its center-column cell fails the test,
/// otherwise the first admitted cell from each side bounds a filled span.
/// This is exact only for metrics that grow monotonically along a row away
/// from the center column, which holds for every built-in [`Metric`]; a
/// [`Metric::Custom`] is scanned the same way without verification.
///
/// A positive `tolerance` fattens the disc toward its bounding square.
/// Radius 0 with zero tolerance yields exactly `{center}`.
///
/// # Errors
///
/// See [`DiscQuery::validate`].
pub fn enumerate(
    center: Coordinate,
    radius: i32,
    tolerance: f64,
    metric: Metric,
) -> Result<IndexSet<Coordinate>, GeometryError> {
    DiscQuery {
        center,
        radius,
        tolerance,
        metric,
    }
    .enumerate()
}
