use serde::{Deserialize, Serialize};

use crate::impls::contour::ClosedContour;

/// Polygon with an outer ring and optional holes.
///
/// Rings are addressed by a single index where `0` is the outer ring and `1..` are the holes, the same way GeoJSON
/// orders polygon rings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon<P> {
    /// Outer ring.
    pub outer_contour: ClosedContour<P>,
    /// Holes.
    pub inner_contours: Vec<ClosedContour<P>>,
}

impl<P> Polygon<P> {
    /// Creates a polygon from its outer ring and holes.
    pub fn new(outer_contour: ClosedContour<P>, inner_contours: Vec<ClosedContour<P>>) -> Self {
        Self {
            outer_contour,
            inner_contours,
        }
    }

    /// Mutable reference to the ring with the given index.
    pub fn ring_mut(&mut self, index: usize) -> Option<&mut ClosedContour<P>> {
        match index {
            0 => Some(&mut self.outer_contour),
            _ => self.inner_contours.get_mut(index - 1),
        }
    }
}

impl<P> crate::polygon::Polygon for Polygon<P> {
    type Contour = ClosedContour<P>;

    fn outer_contour(&self) -> &ClosedContour<P> {
        &self.outer_contour
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ ClosedContour<P>> {
        self.inner_contours.iter()
    }
}

impl<P> From<ClosedContour<P>> for Polygon<P> {
    fn from(outer_contour: ClosedContour<P>) -> Self {
        Self::new(outer_contour, vec![])
    }
}

impl<P> From<Vec<P>> for Polygon<P> {
    fn from(points: Vec<P>) -> Self {
        Self::new(ClosedContour::new(points), vec![])
    }
}

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPolygon<P>(Vec<Polygon<P>>);

impl<P> MultiPolygon<P> {
    /// Polygons of the set.
    pub fn parts(&self) -> &[Polygon<P>] {
        &self.0
    }

    /// Mutable reference to the polygon with the given index.
    pub fn part_mut(&mut self, index: usize) -> Option<&mut Polygon<P>> {
        self.0.get_mut(index)
    }
}

impl<P> From<Vec<Polygon<P>>> for MultiPolygon<P> {
    fn from(parts: Vec<Polygon<P>>) -> Self {
        Self(parts)
    }
}
