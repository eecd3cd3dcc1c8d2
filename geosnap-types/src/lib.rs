//! Geometry primitives used by the `geosnap` snapping engine.
//!
//! The crate provides:
//! * [`Coordinate`](geo::Coordinate) - a geographic position in degrees, and [`Point2d`](cartesian::Point2d) - a
//!   position on the screen in pixels;
//! * the [`Geom`] enum covering the six GeoJSON geometry kinds, built from [`Contour`](impls::Contour),
//!   [`Polygon`](impls::Polygon) and their multi-part variants;
//! * [`Segment`](segment::Segment) with the closest point projection used to find snap candidates;
//! * [`PathLocator`] - a typed address of a vertex inside of a geometry, which is also used to insert new vertices
//!   with [`Geom::insert_point`].
//!
//! With the `geojson` feature enabled, [`geojson::Geometry`](::geojson::Geometry) values can be converted into
//! [`Geom<Coordinate>`](Geom).

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod cartesian;
pub mod contour;
pub mod error;
pub mod geo;
mod geometry;
pub mod impls;
mod path;
pub mod polygon;
pub mod segment;

#[cfg(feature = "geojson")]
mod geojson;

pub use contour::{ClosedContour, Contour};
pub use geometry::{Geom, GeometryKind};
pub use path::PathLocator;
pub use polygon::Polygon;
