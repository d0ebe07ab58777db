//! Capability traits for grid cells and grid storage.

use crate::coord::Coordinate;

/// What the geometry kernel needs to know about a single grid cell.
///
/// Implemented by tile types owned by the caller's map storage. Pathfinding
/// consumes [`is_walkable`](Tile::is_walkable); line-of-sight checks consume
/// [`blocks_los`](Tile::blocks_los).
pub trait Tile {
    /// Whether an actor may stand on this cell.
    fn is_walkable(&self) -> bool;

    /// Whether this cell stops line of sight.
    ///
    /// Defaults to `!is_walkable()`. Override for cells such as windows
    /// (not walkable, transparent) or chasms.
    fn blocks_los(&self) -> bool {
        !self.is_walkable()
    }
}

/// Read-only lookup of cells by coordinate.
///
/// Returns `None` for coordinates that are off the grid or whose cell is
/// missing. The provided methods treat a missing cell as opaque and
/// impassable.
pub trait TileAccess {
    /// The cell type stored in the grid.
    type Tile: Tile;

    /// The cell at `at`, if present.
    fn tile(&self, at: Coordinate) -> Option<&Self::Tile>;

    /// Whether `at` blocks line of sight. Missing cells block.
    fn blocks_los(&self, at: Coordinate) -> bool {
        self.tile(at).map_or(true, Tile::blocks_los)
    }

    /// Whether `at` can be walked on. Missing cells cannot.
    fn is_walkable(&self, at: Coordinate) -> bool {
        self.tile(at).is_some_and(Tile::is_walkable)
    }
}

impl<A: TileAccess + ?Sized> TileAccess for &A {
    type Tile = A::Tile;

    fn tile(&self, at: Coordinate) -> Option<&Self::Tile> {
        (**self).tile(at)
    }
}
