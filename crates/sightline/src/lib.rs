//! Sightline: a grid geometry and visibility kernel.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Sightline sub-crates. For most users, adding `sightline` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sightline::prelude::*;
//!
//! // Row 0 is the top line; a space is a missing cell.
//! let picture = ["#####", "#...#", "#.#.#", "#...#", "#####"];
//! let map = TileGrid::new(
//!     picture
//!         .iter()
//!         .map(|line| Some(line.chars().map(Terrain::from_glyph).collect()))
//!         .collect(),
//! );
//! assert!(map.bounds().is_rectangular());
//!
//! // The pillar at (2, 2) hides (3, 3) from (1, 1)...
//! let (eye, target) = (Coordinate::new(1, 1), Coordinate::new(3, 3));
//! assert!(!line_of_sight(&map, eye, target, false));
//! // ...but not (3, 1).
//! assert!(line_of_sight(&map, eye, Coordinate::new(3, 1), false));
//!
//! // Everything within two steps, clipped to the map.
//! let near = map
//!     .disc_cells(&DiscQuery::new(eye, 2).with_metric(Metric::Chebyshev))
//!     .unwrap();
//! assert_eq!(near.len(), 16);
//!
//! // Shift-parse a point relative to the eye.
//! let p = sightline::types::codec::parse("+(2,0)", Some(eye), true).unwrap();
//! assert_eq!(p, Coordinate::new(3, 1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sightline-core` | Coordinates, metrics, tile traits, errors, point codec |
//! | [`grid`] | `sightline-grid` | Bounds inference, rasterization, line of sight, discs, `TileGrid` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and the point codec (`sightline-core`).
///
/// Contains [`types::Coordinate`], [`types::Metric`], the capability traits
/// ([`types::Tile`], [`types::TileAccess`]) and the error types.
pub use sightline_core as types;

/// Grid algorithms (`sightline-grid`).
///
/// Provides [`grid::infer_bounds`], [`grid::rasterize`],
/// [`grid::line_of_sight`], [`grid::enumerate`] and the
/// [`grid::TileGrid`] snapshot.
pub use sightline_grid as grid;

/// Common imports for typical Sightline usage.
///
/// ```rust
/// use sightline::prelude::*;
/// ```
///
/// This imports the coordinate and metric types, the tile traits, the
/// errors, and the grid algorithms.
pub mod prelude {
    // Core types and traits
    pub use sightline_core::{Coordinate, Metric, Tile, TileAccess};

    // Errors
    pub use sightline_core::{GeometryError, ParseError};

    // Grid
    pub use sightline_grid::{
        enumerate, infer_bounds, is_on_line, line_of_sight, rasterize, DiscQuery, GridBounds, Path,
        Terrain, TileGrid,
    };
}
