//! Straight line segments and the closest point projection.

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive, Num};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P> Clone for Segment<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Segment<'_, P> {}

/// Location of the point of a segment closest to some other point. See [`Segment::closest_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentPoint<P> {
    /// The start point of the segment is the closest.
    Start,
    /// The end point of the segment is the closest.
    End,
    /// The closest point lies strictly between the endpoints.
    Interpolated(P),
}

impl<P> Segment<'_, P> {
    /// Finds the point of the segment closest to `point` in the cartesian plane.
    ///
    /// The point is projected onto the line through the segment. If the projection falls on or before the start
    /// point, [`SegmentPoint::Start`] is returned; if it falls on or after the end point, [`SegmentPoint::End`];
    /// otherwise the projection itself.
    ///
    /// A zero-length segment always resolves to [`SegmentPoint::Start`], and no division by zero happens.
    pub fn closest_point<N, Point>(&self, point: &Point) -> SegmentPoint<P>
    where
        N: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive,
        P: NewCartesianPoint2d<N>,
        Point: CartesianPoint2d<Num = N>,
    {
        let v = self.1.sub(self.0);
        let w = point.sub(self.0);

        let c1 = w.x * v.x + w.y * v.y;
        if c1 <= N::zero() {
            return SegmentPoint::Start;
        }

        let c2 = v.x * v.x + v.y * v.y;
        if c2 <= c1 {
            return SegmentPoint::End;
        }

        let t = c1 / c2;
        SegmentPoint::Interpolated(P::new(self.0.x() + t * v.x, self.0.y() + t * v.y))
    }

    /// Resolves a [`SegmentPoint`] into the coordinates of the point.
    pub fn resolve(&self, segment_point: SegmentPoint<P>) -> P
    where
        P: Copy,
    {
        match segment_point {
            SegmentPoint::Start => *self.0,
            SegmentPoint::End => *self.1,
            SegmentPoint::Interpolated(p) => p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::geo::Coordinate;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn closest_point_before_start() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(2.0, 0.0);
        let segment = Segment(&a, &b);

        assert_eq!(segment.closest_point(&Point2d::new(-1.0, 0.0)), SegmentPoint::Start);
        assert_eq!(segment.closest_point(&Point2d::new(-1.0, 5.0)), SegmentPoint::Start);
        // perpendicular through the start point
        assert_eq!(segment.closest_point(&Point2d::new(0.0, 1.0)), SegmentPoint::Start);
    }

    #[test]
    fn closest_point_after_end() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(2.0, 0.0);
        let segment = Segment(&a, &b);

        assert_eq!(segment.closest_point(&Point2d::new(3.0, 1.0)), SegmentPoint::End);
        assert_eq!(segment.closest_point(&Point2d::new(2.0, -1.0)), SegmentPoint::End);
    }

    #[test]
    fn closest_point_interpolated() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(2.0, 2.0);
        let segment = Segment(&a, &b);

        let closest = segment.closest_point(&Point2d::new(0.0, 2.0));
        assert_eq!(closest, SegmentPoint::Interpolated(Point2d::new(1.0, 1.0)));
        assert_eq!(segment.resolve(closest), Point2d::new(1.0, 1.0));
    }

    #[test]
    fn zero_length_segment() {
        let a = Point2d::new(1.0, 1.0);
        let segment = Segment(&a, &a);

        assert_eq!(segment.closest_point(&Point2d::new(5.0, 3.0)), SegmentPoint::Start);
        assert_eq!(segment.closest_point(&Point2d::new(1.0, 1.0)), SegmentPoint::Start);
        assert_eq!(segment.resolve(SegmentPoint::End), a);
    }

    #[test]
    fn geographic_segment() {
        let a = Coordinate::new(10.0, 50.0);
        let b = Coordinate::new(10.1, 50.0);
        let segment = Segment(&a, &b);

        assert_matches!(
            segment.closest_point(&Coordinate::new(10.05, 50.001)),
            SegmentPoint::Interpolated(p) => {
                assert_abs_diff_eq!(p.to_array()[0], 10.05, epsilon = 1e-12);
                assert_abs_diff_eq!(p.to_array()[1], 50.0, epsilon = 1e-12);
            }
        );
    }
}
