//! Geometries in 2d cartesian space: screen pixel positions and the planar embedding of geographic coordinates used
//! for segment projection.

mod point;
mod rect;

pub use point::{CartesianPoint2d, NewCartesianPoint2d, Point2d};
pub use rect::Rect;
