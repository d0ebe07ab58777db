//! Test utilities and mock types for Sightline development.
//!
//! Provides a configurable [`MockTile`], a hash-backed [`MockTileMap`]
//! implementing [`TileAccess`], ASCII map [`fixtures`], and
//! [`init_tracing`] for seeing kernel log events in test output.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::Once;

use sightline_core::{Coordinate, Tile, TileAccess};
use tracing_subscriber::EnvFilter;

pub use fixtures::{ascii_rows, mock_glyph};

/// A tile whose two capabilities are set independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MockTile {
    pub walkable: bool,
    pub blocks_los: bool,
}

impl MockTile {
    /// Walkable and transparent.
    pub const OPEN: Self = Self {
        walkable: true,
        blocks_los: false,
    };
    /// Impassable and opaque.
    pub const WALL: Self = Self {
        walkable: false,
        blocks_los: true,
    };
    /// Impassable but transparent.
    pub const WINDOW: Self = Self {
        walkable: false,
        blocks_los: false,
    };
    /// Walkable but opaque, like tall grass.
    pub const BRUSH: Self = Self {
        walkable: true,
        blocks_los: true,
    };

    pub fn new(walkable: bool, blocks_los: bool) -> Self {
        Self {
            walkable,
            blocks_los,
        }
    }
}

impl Default for MockTile {
    fn default() -> Self {
        Self::OPEN
    }
}

impl Tile for MockTile {
    fn is_walkable(&self) -> bool {
        self.walkable
    }

    fn blocks_los(&self) -> bool {
        self.blocks_los
    }
}

/// Sparse mock implementation of [`TileAccess`].
///
/// Backed by a `HashMap<Coordinate, MockTile>`; any coordinate without an
/// entry is missing. Populate with [`set`](MockTileMap::set) or build from
/// an ASCII picture with [`from_ascii`](MockTileMap::from_ascii).
#[derive(Clone, Debug, Default)]
pub struct MockTileMap {
    tiles: HashMap<Coordinate, MockTile>,
}

impl MockTileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `width` × `height` rectangle of open tiles anchored at the origin.
    pub fn open(width: i32, height: i32) -> Self {
        let mut map = Self::new();
        for y in 0..height {
            for x in 0..width {
                map.set(Coordinate::new(x, y), MockTile::OPEN);
            }
        }
        map
    }

    /// Parse an ASCII picture using [`mock_glyph`]; row `y` is line `y`.
    pub fn from_ascii(picture: &str) -> Self {
        let mut map = Self::new();
        for (y, row) in ascii_rows(picture, mock_glyph).into_iter().enumerate() {
            for (x, tile) in row.into_iter().flatten().enumerate() {
                if let Some(tile) = tile {
                    map.set(Coordinate::new(x as i32, y as i32), tile);
                }
            }
        }
        map
    }

    /// Place or replace a tile.
    pub fn set(&mut self, at: Coordinate, tile: MockTile) {
        self.tiles.insert(at, tile);
    }

    /// Remove a tile, making the cell missing.
    pub fn remove(&mut self, at: Coordinate) -> Option<MockTile> {
        self.tiles.remove(&at)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl TileAccess for MockTileMap {
    type Tile = MockTile;

    fn tile(&self, at: Coordinate) -> Option<&MockTile> {
        self.tiles.get(&at)
    }
}

static TRACING: Once = Once::new();

/// Install a `fmt` subscriber that writes through the test harness.
///
/// Filtered by `RUST_LOG`, defaulting to `warn`. Safe to call from every
/// test; only the first call installs anything.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(tracing::Level::WARN.into())
            .from_env_lossy();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_tile_defaults_to_open() {
        assert_eq!(MockTile::default(), MockTile::OPEN);
        assert!(MockTile::OPEN.is_walkable());
        assert!(!MockTile::OPEN.blocks_los());
    }

    #[test]
    fn brush_is_walkable_but_opaque() {
        let t = MockTile::BRUSH;
        assert!(Tile::is_walkable(&t));
        assert!(Tile::blocks_los(&t));
    }

    #[test]
    fn missing_cells_block_and_are_not_walkable() {
        let map = MockTileMap::open(2, 2);
        assert_eq!(map.len(), 4);
        let outside = Coordinate::new(2, 0);
        assert!(map.blocks_los(outside));
        assert!(!map.is_walkable(outside));
        assert!(!map.blocks_los(Coordinate::new(1, 1)));
    }

    #[test]
    fn from_ascii_places_tiles() {
        let map = MockTileMap::from_ascii(".#\n= ");
        assert_eq!(map.tile(Coordinate::new(0, 0)), Some(&MockTile::OPEN));
        assert_eq!(map.tile(Coordinate::new(1, 0)), Some(&MockTile::WALL));
        assert_eq!(map.tile(Coordinate::new(0, 1)), Some(&MockTile::WINDOW));
        assert_eq!(map.tile(Coordinate::new(1, 1)), None);
    }

    #[test]
    fn remove_makes_cell_missing() {
        let mut map = MockTileMap::open(1, 1);
        assert_eq!(map.remove(Coordinate::ORIGIN), Some(MockTile::OPEN));
        assert!(map.is_empty());
    }

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
