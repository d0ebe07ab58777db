//! Grid algorithms for the Sightline geometry kernel.
//!
//! Everything here computes over caller-owned, possibly jagged grids:
//!
//! - [`infer_bounds`]: width and column-run extents of a jagged grid
//! - [`rasterize`]: corner-cutting line traversal producing a [`Path`],
//!   the basis of line-of-sight checks
//! - [`enumerate`] / [`DiscQuery`]: cells within a radius under a [`Metric`]
//! - [`TileGrid`]: an owned snapshot implementing [`TileAccess`], with
//!   [`Terrain`] as a ready-made tile type
//!
//! [`Metric`]: sightline_core::Metric
//! [`TileAccess`]: sightline_core::TileAccess

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod disc;
pub mod grid;
pub mod raster;

#[cfg(test)]
pub(crate) mod compliance;

pub use bounds::{infer_bounds, GridBounds};
pub use disc::{enumerate, DiscQuery};
pub use grid::{Row, Terrain, TileGrid};
pub use raster::{is_on_line, line_of_sight, rasterize, Path, CORNER_EPSILON};
