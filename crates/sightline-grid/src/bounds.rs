//! Bounds inference over jagged grids.

/// Effective extent of a jagged grid.
///
/// Widths are row lengths. Heights are lengths of contiguous vertical runs
/// of present cells in a single column, so a ragged grid can report a
/// `min_height` well below its row count.
///
/// Produced by [`infer_bounds`]; `min_* <= max_*` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridBounds {
    /// Shortest effective row length.
    pub min_width: usize,
    /// Longest effective row length.
    pub max_width: usize,
    /// Shortest contiguous column run.
    pub min_height: usize,
    /// Longest contiguous column run.
    pub max_height: usize,
}

impl GridBounds {
    /// Bounds of a grid without any cells.
    pub const EMPTY: Self = Self {
        min_width: 0,
        max_width: 0,
        min_height: 0,
        max_height: 0,
    };

    /// `true` if every row has the same width and every column the same run.
    pub fn is_rectangular(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// `true` if the grid holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.max_width == 0 || self.max_height == 0
    }
}

/// Running min/max over folded column runs.
#[derive(Default)]
struct RunRange(Option<(usize, usize)>);

impl RunRange {
    fn fold(&mut self, run: usize) {
        self.0 = Some(match self.0 {
            Some((lo, hi)) => (lo.min(run), hi.max(run)),
            None => (run, run),
        });
    }

    fn into_pair(self) -> (usize, usize) {
        self.0.unwrap_or((0, 0))
    }
}

/// Row length minus one trailing sentinel cell, if present.
fn effective_width<T>(cells: &[Option<T>]) -> usize {
    match cells.last() {
        Some(None) => cells.len() - 1,
        _ => cells.len(),
    }
}

/// Infer the [`GridBounds`] of a jagged grid.
///
/// `rows[y]` is `None` for a missing row; within a row, a `None` last cell
/// is a sentinel marking the row one shorter than its raw length. Missing
/// rows neither extend nor interrupt a column's run. A row shorter than the
/// widest seen so far interrupts the runs of every column it lacks; each
/// interrupted (and each final) run is folded into the height bounds,
/// which start at the number of present rows. A grid whose rows are all
/// zero-width has height 0.
///
/// Runs in `O(rows × cols)`.
///
/// # Examples
///
/// ```
/// use sightline_grid::infer_bounds;
///
/// let rows = vec![
///     Some(vec![Some('.'), Some('.'), Some('.')]),
///     Some(vec![Some('.')]),
///     Some(vec![Some('.'), Some('.'), Some('.')]),
/// ];
/// let b = infer_bounds(&rows);
/// assert_eq!((b.min_width, b.max_width), (1, 3));
/// assert_eq!((b.min_height, b.max_height), (1, 3));
/// ```
pub fn infer_bounds<T, R>(rows: &[Option<R>]) -> GridBounds
where
    R: AsRef<[Option<T>]>,
{
    let mut min_width = usize::MAX;
    let mut max_width = 0usize;
    let mut heights = RunRange::default();
    let mut runs: Vec<usize> = Vec::new();
    let mut missing_rows = 0usize;

    for row in rows {
        let Some(row) = row else {
            missing_rows += 1;
            continue;
        };
        let width = effective_width(row.as_ref());
        min_width = min_width.min(width);
        max_width = max_width.max(width);

        if width > runs.len() {
            runs.resize(width, 0);
        }
        for run in &mut runs[..width] {
            *run += 1;
        }
        for run in &mut runs[width..] {
            if *run > 0 {
                heights.fold(*run);
                *run = 0;
            }
        }
    }

    if min_width == usize::MAX {
        min_width = 0;
    }
    for &run in &runs {
        if run > 0 {
            heights.fold(run);
        }
    }
    // Heights start from the present row count; no run can exceed it.
    if max_width > 0 {
        heights.fold(rows.len() - missing_rows);
    }
    let (min_height, max_height) = heights.into_pair();
    let bounds = GridBounds {
        min_width,
        max_width,
        min_height,
        max_height,
    };
    tracing::debug!(
        rows = rows.len(),
        missing_rows,
        ?bounds,
        "inferred grid bounds"
    );
    bounds
}
