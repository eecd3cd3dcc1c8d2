//! Concrete geometry types that make up a [`Geom`](crate::Geom).

mod contour;
mod multi_contour;
mod multi_point;
mod polygon;

pub use contour::{ClosedContour, Contour};
pub use multi_contour::MultiContour;
pub use multi_point::MultiPoint;
pub use polygon::{MultiPolygon, Polygon};
