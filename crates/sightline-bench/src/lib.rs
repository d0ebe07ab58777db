//! Benchmark maps and inputs for the Sightline geometry kernel.
//!
//! Everything here is deterministic for a given seed:
//!
//! - [`reference_map`]: 100x100 room with ~10% scattered walls
//! - [`stress_map`]: 316x316 (~100K cells) with the same density
//! - [`ragged_rows`]: jagged rows with missing rows and trailing sentinels
//! - [`sample_pairs`]: coordinate pairs inside a square extent

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sightline_core::Coordinate;
use sightline_grid::{Row, Terrain, TileGrid};

const MUL_A: u64 = 6364136223846793005;
const MUL_B: u64 = 1442695040888963407;

/// Mix `seed` and `i` into a pseudo-random word.
fn mix(seed: u64, i: u64) -> u64 {
    let v = seed.wrapping_mul(MUL_A).wrapping_add(i.wrapping_mul(MUL_B));
    v ^ (v >> 29)
}

/// A `size` × `size` floor with about `density_percent`% of cells walled.
///
/// The border is always wall, so line-of-sight rays stay on the map.
pub fn scatter_map(size: usize, density_percent: u64, seed: u64) -> TileGrid<Terrain> {
    let rows = (0..size)
        .map(|y| {
            let row: Row<Terrain> = (0..size)
                .map(|x| {
                    let border = x == 0 || y == 0 || x + 1 == size || y + 1 == size;
                    let i = (y * size + x) as u64;
                    let wall = border || mix(seed, i) % 100 < density_percent;
                    Some(if wall { Terrain::Wall } else { Terrain::Floor })
                })
                .collect();
            Some(row)
        })
        .collect();
    TileGrid::new(rows)
}

/// Build the reference benchmark map: 100x100 (10K cells), 10% walls.
pub fn reference_map(seed: u64) -> TileGrid<Terrain> {
    scatter_map(100, 10, seed)
}

/// Build the stress benchmark map: 316x316 (~100K cells), 10% walls.
pub fn stress_map(seed: u64) -> TileGrid<Terrain> {
    scatter_map(316, 10, seed)
}

/// `height` jagged rows of width up to `max_width`.
///
/// About one row in sixteen is missing and one in four ends in a sentinel.
pub fn ragged_rows(height: usize, max_width: usize, seed: u64) -> Vec<Option<Row<Terrain>>> {
    (0..height)
        .map(|y| {
            let r = mix(seed, y as u64);
            if r % 16 == 0 {
                return None;
            }
            let width = 1 + (r >> 8) as usize % max_width.max(1);
            let mut row: Row<Terrain> = vec![Some(Terrain::Floor); width];
            if (r >> 4) % 4 == 0 {
                row.push(None);
            }
            Some(row)
        })
        .collect()
}

/// `n` coordinate pairs with both components in `0..extent`.
pub fn sample_pairs(n: usize, extent: i32, seed: u64) -> Vec<(Coordinate, Coordinate)> {
    let extent = u64::from(extent.max(1).unsigned_abs());
    let coord = |i: u64| {
        let r = mix(seed, i);
        Coordinate::new((r % extent) as i32, ((r >> 32) % extent) as i32)
    };
    (0..n as u64)
        .map(|i| (coord(2 * i), coord(2 * i + 1)))
        .collect()
}
