//! Geometries in geographic coordinates (longitude and latitude), see [`GeoPoint`], and the great-circle distance
//! between them.

mod coordinate;
mod datum;
mod point;

pub use coordinate::Coordinate;
pub use datum::Datum;
pub use point::GeoPoint;
