//! Contour is a sequence of points connected by segments.
//!
//! Contours can be:
//! * **open** - the first and the last points of the contour are not connected. A GeoJSON `LineString` is an open
//!   contour.
//! * **closed** - the first and the last points of the contour are connected. Rings of GeoJSON polygons are closed
//!   contours.
//!
//! A closed contour always has a segment from its last point back to the first one, whether or not the last point
//! repeats the first. If it does, the closing segment has zero length.

use crate::segment::Segment;

/// Sequence of points. See module level documentation for details.
pub trait Contour {
    /// Type of the points the contour consists of.
    type Point;

    /// Whether the contour is closed.
    fn is_closed(&self) -> bool;

    /// Iterates over the points of the contour.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Iterates over segments of the contour. For closed contours this includes the segment between the last and the
    /// first points of the contour.
    ///
    /// The `i`-th segment ends at the point with index `i + 1` (or at the first point for the closing segment).
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        Segments {
            points: self.iter_points(),
            first: None,
            prev: None,
            closing: self.is_closed(),
        }
    }
}

/// A closed contour. See module documentation for details.
pub trait ClosedContour {
    /// Type of the points the contour consists of.
    type Point;

    /// Iterates over the points of the contour.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;
}

impl<P, T: ClosedContour<Point = P>> Contour for T {
    type Point = P;

    fn is_closed(&self) -> bool {
        true
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        ClosedContour::iter_points(self)
    }
}

/// Iterator over the segments of a contour, created by [`Contour::iter_segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a, P, I> {
    points: I,
    first: Option<&'a P>,
    prev: Option<&'a P>,
    closing: bool,
}

impl<'a, P, I> Iterator for Segments<'a, P, I>
where
    I: Iterator<Item = &'a P>,
{
    type Item = Segment<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        for point in self.points.by_ref() {
            self.first.get_or_insert(point);
            if let Some(prev) = self.prev.replace(point) {
                return Some(Segment(prev, point));
            }
        }

        if std::mem::take(&mut self.closing) {
            return Some(Segment(self.prev?, self.first?));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::impls;

    fn p(x: f64, y: f64) -> Point2d {
        Point2d::new(x, y)
    }

    #[test]
    fn open_segments() {
        let line = impls::Contour::open(vec![p(0.0, 0.0)]);
        assert_eq!(line.iter_segments().count(), 0);

        let line = impls::Contour::<Point2d>::open(vec![]);
        assert_eq!(line.iter_segments().count(), 0);

        let line = impls::Contour::open(vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0)]);
        assert!(!line.is_closed());
        assert_eq!(
            line.iter_segments().collect::<Vec<_>>(),
            vec![
                Segment(&p(0.0, 0.0), &p(1.0, 1.0)),
                Segment(&p(1.0, 1.0), &p(2.0, 0.0))
            ]
        );
    }

    #[test]
    fn ring_closing_segment() {
        let ring = impls::ClosedContour::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
        assert!(ring.is_closed());

        let segments: Vec<_> = ring.iter_segments().collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2], Segment(&p(1.0, 1.0), &p(0.0, 0.0)));
    }

    #[test]
    fn explicitly_closed_ring() {
        let ring = impls::ClosedContour::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)]);

        let segments: Vec<_> = ring.iter_segments().collect();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[3], Segment(&p(0.0, 0.0), &p(0.0, 0.0)));
    }

    #[test]
    fn degenerate_rings() {
        let ring = impls::ClosedContour::<Point2d>::new(vec![]);
        assert_eq!(ring.iter_segments().count(), 0);

        let ring = impls::ClosedContour::new(vec![p(1.0, 1.0)]);
        assert_eq!(
            ring.iter_segments().collect::<Vec<_>>(),
            vec![Segment(&p(1.0, 1.0), &p(1.0, 1.0))]
        );
    }
}
