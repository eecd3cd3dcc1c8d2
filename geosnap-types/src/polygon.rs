//! Polygon trait.

use crate::contour::ClosedContour;

/// Polygon geometry: an outer ring and any number of holes.
pub trait Polygon {
    /// Type of the rings of the polygon.
    type Contour: ClosedContour;

    /// Outer ring.
    fn outer_contour(&self) -> &Self::Contour;

    /// Rings of the holes.
    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour>;

    /// Iterates over all rings of the polygon, starting with the outer one. Position of a ring in this iterator is
    /// its ring index in [`PathLocator`](crate::PathLocator).
    fn iter_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        std::iter::once(self.outer_contour()).chain(self.inner_contours())
    }
}
