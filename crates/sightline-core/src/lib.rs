//! Core types for the Sightline grid geometry kernel.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`Coordinate`] value type, pluggable distance [`Metric`]s, the
//! [`Tile`]/[`TileAccess`] capability traits that grid storage implements,
//! error types, and the textual point [`codec`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod coord;
pub mod error;
pub mod metric;
pub mod traits;

pub use coord::{is_in_between, is_in_bounds, lies_on_segment, Coordinate, BETWEEN_EPSILON};
pub use error::{GeometryError, ParseError};
pub use metric::Metric;
pub use traits::{Tile, TileAccess};
