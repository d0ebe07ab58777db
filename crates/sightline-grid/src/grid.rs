//! Owned jagged tile grid with eagerly inferred bounds.

use crate::bounds::{infer_bounds, GridBounds};
use crate::disc::DiscQuery;
use indexmap::IndexSet;
use sightline_core::{Coordinate, GeometryError, Tile, TileAccess};
use smallvec::SmallVec;

/// One row of a [`TileGrid`]: present cells are `Some`, holes are `None`.
pub type Row<T> = Vec<Option<T>>;

/// An immutable snapshot of a jagged grid of tiles.
///
/// `rows[y][x]` holds the tile at `Coordinate { x, y }`. Whole rows and
/// individual cells may be missing; lookups of missing cells return `None`
/// and such cells block line of sight. Bounds are computed once by
/// [`infer_bounds`] when the grid is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid<T> {
    rows: Vec<Option<Row<T>>>,
    bounds: GridBounds,
}

impl<T> TileGrid<T> {
    /// Take ownership of `rows` and infer their bounds.
    pub fn new(rows: Vec<Option<Row<T>>>) -> Self {
        let bounds = infer_bounds(&rows);
        Self { rows, bounds }
    }

    /// The tile at `at`, or `None` if the row or cell is missing.
    pub fn get(&self, at: Coordinate) -> Option<&T> {
        let x = usize::try_from(at.x).ok()?;
        let y = usize::try_from(at.y).ok()?;
        self.rows.get(y)?.as_ref()?.get(x)?.as_ref()
    }

    /// Whether a tile is present at `at`.
    pub fn contains(&self, at: Coordinate) -> bool {
        self.get(at).is_some()
    }

    /// Bounds inferred at construction.
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Number of rows, missing ones included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The raw rows.
    pub fn rows(&self) -> &[Option<Row<T>>] {
        &self.rows
    }

    /// Give back the raw rows.
    pub fn into_rows(self) -> Vec<Option<Row<T>>> {
        self.rows
    }

    /// Every present tile with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &T)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter().flat_map(move |cells| {
                cells.iter().enumerate().filter_map(move |(x, cell)| {
                    let tile = cell.as_ref()?;
                    Some((Coordinate::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?), tile))
                })
            })
        })
    }

    /// Cells of the disc described by `query` that are present on this grid.
    ///
    /// Order follows [`DiscQuery::enumerate`].
    pub fn disc_cells(&self, query: &DiscQuery) -> Result<IndexSet<Coordinate>, GeometryError> {
        let mut cells = query.enumerate()?;
        cells.retain(|&at| self.contains(at));
        Ok(cells)
    }
}

impl<T: Tile> TileGrid<T> {
    /// The 8-neighbours of `at` that are present and walkable.
    ///
    /// Neighbours come in [`Coordinate::neighbors`] order.
    pub fn walkable_neighbors(&self, at: Coordinate) -> SmallVec<[Coordinate; 8]> {
        Coordinate::ORIGIN
            .neighbors()
            .into_iter()
            .filter_map(|offset| at.checked_add(offset))
            .filter(|&n| TileAccess::is_walkable(self, n))
            .collect()
    }
}

impl<T: Tile> TileAccess for TileGrid<T> {
    type Tile = T;

    fn tile(&self, at: Coordinate) -> Option<&T> {
        self.get(at)
    }
}

/// Basic terrain for maps that need nothing richer.
///
/// | Terrain | Glyph | Walkable | Blocks sight |
/// |---------|-------|----------|--------------|
/// | `Floor` | `.`   | yes      | no           |
/// | `Wall`  | `#`   | no       | yes          |
/// | `Window`| `=`   | no       | no           |
/// | `Pit`   | `~`   | no       | no           |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// Open ground.
    #[default]
    Floor,
    /// Solid wall.
    Wall,
    /// Transparent but impassable.
    Window,
    /// A drop that can be seen across but not walked.
    Pit,
}

impl Terrain {
    /// Map an ASCII glyph to terrain.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Floor),
            '#' => Some(Self::Wall),
            '=' => Some(Self::Window),
            '~' => Some(Self::Pit),
            _ => None,
        }
    }

    /// The ASCII glyph of this terrain.
    pub fn glyph(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Wall => '#',
            Self::Window => '=',
            Self::Pit => '~',
        }
    }
}

impl Tile for Terrain {
    fn is_walkable(&self) -> bool {
        matches!(self, Self::Floor)
    }

    fn blocks_los(&self) -> bool {
        matches!(self, Self::Wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::line_of_sight;
    use sightline_core::Metric;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    /// Build a grid from glyph lines; spaces are missing cells, and an
    /// empty line is a missing row.
    fn grid(lines: &[&str]) -> TileGrid<Terrain> {
        TileGrid::new(
            lines
                .iter()
                .map(|line| {
                    (!line.is_empty()).then(|| line.chars().map(Terrain::from_glyph).collect())
                })
                .collect(),
        )
    }

    // ── Lookup ──────────────────────────────────────────────────

    #[test]
    fn get_addresses_x_then_y() {
        let g = grid(&["..#", "#.."]);
        assert_eq!(g.get(c(2, 0)), Some(&Terrain::Wall));
        assert_eq!(g.get(c(0, 1)), Some(&Terrain::Wall));
        assert_eq!(g.get(c(1, 1)), Some(&Terrain::Floor));
    }

    #[test]
    fn off_grid_and_holes_are_absent() {
        let g = grid(&[". .", "", "..."]);
        assert!(!g.contains(c(-1, 0)));
        assert!(!g.contains(c(0, -1)));
        assert!(!g.contains(c(3, 0)));
        assert!(!g.contains(c(1, 0)));
        assert!(!g.contains(c(0, 1)));
        assert!(g.contains(c(2, 2)));
        assert_eq!(g.row_count(), 3);
    }

    #[test]
    fn bounds_are_inferred_on_construction() {
        let g = grid(&["...", ".", "..."]);
        let b = g.bounds();
        assert_eq!((b.min_width, b.max_width), (1, 3));
        assert_eq!((b.min_height, b.max_height), (1, 3));
    }

    #[test]
    fn rows_round_trip() {
        let g = grid(&[".#", "#."]);
        let rows = g.rows().to_vec();
        assert_eq!(TileGrid::new(g.into_rows()).rows(), &rows[..]);
    }

    #[test]
    fn iter_skips_holes() {
        let g = grid(&[". #", "", "~"]);
        let cells: Vec<_> = g.iter().map(|(at, t)| (at, *t)).collect();
        assert_eq!(
            cells,
            vec![
                (c(0, 0), Terrain::Floor),
                (c(2, 0), Terrain::Wall),
                (c(0, 2), Terrain::Pit),
            ]
        );
    }

    // ── Terrain ─────────────────────────────────────────────────

    #[test]
    fn terrain_capabilities() {
        assert!(Terrain::Floor.is_walkable());
        assert!(!Terrain::Floor.blocks_los());
        assert!(Terrain::Wall.blocks_los());
        assert!(!Terrain::Window.is_walkable());
        assert!(!Terrain::Window.blocks_los());
        assert!(!Terrain::Pit.is_walkable());
        assert!(!Terrain::Pit.blocks_los());
    }

    #[test]
    fn terrain_glyphs_round_trip() {
        for t in [Terrain::Floor, Terrain::Wall, Terrain::Window, Terrain::Pit] {
            assert_eq!(Terrain::from_glyph(t.glyph()), Some(t));
        }
        assert_eq!(Terrain::from_glyph('?'), None);
    }

    // ── Neighbours ──────────────────────────────────────────────

    #[test]
    fn walkable_neighbors_skip_walls_and_holes() {
        let g = grid(&["#..", ". =", "..~"]);
        assert_eq!(
            g.walkable_neighbors(c(1, 1)).as_slice(),
            &[c(0, 1), c(0, 2), c(1, 0), c(1, 2), c(2, 0)]
        );
    }

    #[test]
    fn walkable_neighbors_at_extremes() {
        let g = grid(&["."]);
        assert!(g.walkable_neighbors(c(i32::MAX, i32::MIN)).is_empty());
        assert_eq!(g.walkable_neighbors(c(1, 1)).as_slice(), &[c(0, 0)]);
    }

    // ── Queries ─────────────────────────────────────────────────

    #[test]
    fn window_passes_sight() {
        let g = grid(&["..=..", ".....", "..#.."]);
        assert!(line_of_sight(&g, c(0, 0), c(4, 0), false));
        assert!(!line_of_sight(&g, c(0, 2), c(4, 2), false));
    }

    #[test]
    fn holes_block_sight() {
        let g = grid(&[".. .."]);
        assert!(!line_of_sight(&g, c(0, 0), c(4, 0), false));
    }

    #[test]
    fn disc_cells_clip_to_grid() {
        let g = grid(&["...", ". .", "..."]);
        let query = DiscQuery::new(c(0, 0), 1).with_metric(Metric::Chebyshev);
        let cells = g.disc_cells(&query).unwrap();
        let mut cells: Vec<_> = cells.into_iter().collect();
        cells.sort();
        assert_eq!(cells, vec![c(0, 0), c(0, 1), c(1, 0)]);
    }

    #[test]
    fn disc_cells_propagate_errors() {
        let g = grid(&["."]);
        assert_eq!(
            g.disc_cells(&DiscQuery::new(c(0, 0), -2)),
            Err(GeometryError::NegativeRadius { radius: -2 })
        );
    }

    #[test]
    fn grid_is_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<TileGrid<Terrain>>();
    }
}
