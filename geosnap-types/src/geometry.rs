use crate::error::GeoSnapTypesError;
use crate::impls::{Contour, MultiContour, MultiPoint, MultiPolygon, Polygon};
use crate::path::PathLocator;
use serde::{Deserialize, Serialize};

/// Geometry of any of the six supported kinds.
///
/// The names follow the contour terminology of the crate: a GeoJSON `LineString` is a [`Geom::Contour`] and a
/// `MultiLineString` is a [`Geom::MultiContour`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geom<P> {
    /// Single point.
    Point(P),
    /// Set of points.
    MultiPoint(MultiPoint<P>),
    /// Line string.
    Contour(Contour<P>),
    /// Set of line strings.
    MultiContour(MultiContour<P>),
    /// Polygon with optional holes.
    Polygon(Polygon<P>),
    /// Set of polygons.
    MultiPolygon(MultiPolygon<P>),
}

/// Kind of a [`Geom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    /// [`Geom::Point`]
    Point,
    /// [`Geom::MultiPoint`]
    MultiPoint,
    /// [`Geom::Contour`]
    Contour,
    /// [`Geom::MultiContour`]
    MultiContour,
    /// [`Geom::Polygon`]
    Polygon,
    /// [`Geom::MultiPolygon`]
    MultiPolygon,
}

impl<P> Geom<P> {
    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geom::Point(_) => GeometryKind::Point,
            Geom::MultiPoint(_) => GeometryKind::MultiPoint,
            Geom::Contour(_) => GeometryKind::Contour,
            Geom::MultiContour(_) => GeometryKind::MultiContour,
            Geom::Polygon(_) => GeometryKind::Polygon,
            Geom::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    /// Iterates over all vertices of the geometry. Closing vertices of rings are not repeated.
    pub fn iter_points(&self) -> Box<dyn Iterator<Item = &P> + '_> {
        match self {
            Geom::Point(point) => Box::new(std::iter::once(point)),
            Geom::MultiPoint(points) => Box::new(points.iter_points()),
            Geom::Contour(contour) => Box::new(contour.iter()),
            Geom::MultiContour(lines) => Box::new(lines.contours().flat_map(|line| line.iter())),
            Geom::Polygon(polygon) => Box::new(polygon_points(polygon)),
            Geom::MultiPolygon(mp) => Box::new(mp.parts().iter().flat_map(polygon_points)),
        }
    }

    /// Inserts a new vertex into the geometry before the vertex addressed by `path`.
    ///
    /// The vertex index of the path may be equal to the length of the addressed sequence, in which case the point is
    /// appended. Points and multipoints do not have vertex slots, so insertion into them always fails.
    pub fn insert_point(&mut self, path: &PathLocator, point: P) -> Result<(), GeoSnapTypesError> {
        let kind = self.kind();
        let mismatch = || GeoSnapTypesError::PathMismatch { path: *path, kind };

        let (points, index) = match (self, *path) {
            (Geom::Contour(contour), PathLocator::Index(i)) => (&mut **contour, i),
            (Geom::MultiContour(lines), PathLocator::RingIndex(line, i)) => {
                (&mut **lines.contour_mut(line).ok_or_else(mismatch)?, i)
            }
            (Geom::Polygon(polygon), PathLocator::RingIndex(ring, i)) => {
                (&mut polygon.ring_mut(ring).ok_or_else(mismatch)?.points, i)
            }
            (Geom::MultiPolygon(mp), PathLocator::PolygonRingIndex(polygon, ring, i)) => (
                &mut mp
                    .part_mut(polygon)
                    .and_then(|p| p.ring_mut(ring))
                    .ok_or_else(mismatch)?
                    .points,
                i,
            ),
            _ => return Err(mismatch()),
        };

        if index > points.len() {
            return Err(mismatch());
        }

        points.insert(index, point);
        Ok(())
    }
}

fn polygon_points<P>(polygon: &Polygon<P>) -> impl Iterator<Item = &P> {
    std::iter::once(&polygon.outer_contour)
        .chain(polygon.inner_contours.iter())
        .flat_map(|ring| ring.points.iter())
}

impl<P> From<P> for Geom<P> {
    fn from(value: P) -> Self {
        Self::Point(value)
    }
}

impl<P> From<MultiPoint<P>> for Geom<P> {
    fn from(value: MultiPoint<P>) -> Self {
        Self::MultiPoint(value)
    }
}

impl<P> From<Contour<P>> for Geom<P> {
    fn from(value: Contour<P>) -> Self {
        Self::Contour(value)
    }
}

impl<P> From<MultiContour<P>> for Geom<P> {
    fn from(value: MultiContour<P>) -> Self {
        Self::MultiContour(value)
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

impl<P> From<MultiPolygon<P>> for Geom<P> {
    fn from(value: MultiPolygon<P>) -> Self {
        Self::MultiPolygon(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use crate::impls::ClosedContour;
    use assert_matches::assert_matches;

    fn c(lon: f64, lat: f64) -> Coordinate {
        Coordinate::new(lon, lat)
    }

    #[test]
    fn iter_points() {
        let geom: Geom<Coordinate> = Geom::from(Polygon::new(
            ClosedContour::new(vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0)]),
            vec![ClosedContour::new(vec![c(0.2, 0.2), c(0.4, 0.2), c(0.4, 0.4)])],
        ));
        let points: Vec<_> = geom.iter_points().copied().collect();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], c(0.0, 0.0));
        assert_eq!(points[3], c(0.2, 0.2));

        let geom: Geom<Coordinate> = Geom::from(c(3.0, 4.0));
        assert_eq!(geom.iter_points().collect::<Vec<_>>(), vec![&c(3.0, 4.0)]);
    }

    #[test]
    fn insert_into_contour() {
        let mut geom: Geom<Coordinate> = Geom::from(Contour::open(vec![c(0.0, 0.0), c(2.0, 0.0)]));
        geom.insert_point(&PathLocator::Index(1), c(1.0, 0.0))
            .expect("valid path");

        assert_eq!(
            geom,
            Geom::Contour(Contour::open(vec![c(0.0, 0.0), c(1.0, 0.0), c(2.0, 0.0)]))
        );
    }

    #[test]
    fn insert_into_polygon_ring() {
        let mut geom: Geom<Coordinate> = Geom::from(Polygon::new(
            ClosedContour::new(vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0)]),
            vec![ClosedContour::new(vec![
                c(0.2, 0.2),
                c(0.4, 0.2),
                c(0.4, 0.4),
            ])],
        ));

        // closing segment of the outer ring
        geom.insert_point(&PathLocator::RingIndex(0, 3), c(0.5, 0.5))
            .expect("valid path");
        geom.insert_point(&PathLocator::RingIndex(1, 1), c(0.3, 0.2))
            .expect("valid path");

        let Geom::Polygon(polygon) = geom else {
            panic!("unexpected geometry kind");
        };
        assert_eq!(
            polygon.outer_contour.points,
            vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.5, 0.5)]
        );
        assert_eq!(
            polygon.inner_contours[0].points,
            vec![c(0.2, 0.2), c(0.3, 0.2), c(0.4, 0.2), c(0.4, 0.4)]
        );
    }

    #[test]
    fn insert_into_multi_geometries() {
        let mut lines: Geom<Coordinate> = Geom::from(MultiContour::from(vec![
            Contour::open(vec![c(0.0, 0.0), c(1.0, 0.0)]),
            Contour::open(vec![c(5.0, 5.0), c(6.0, 6.0)]),
        ]));
        lines
            .insert_point(&PathLocator::RingIndex(1, 1), c(5.5, 5.5))
            .expect("valid path");
        let Geom::MultiContour(lines) = lines else {
            panic!("unexpected geometry kind");
        };
        assert_eq!(lines.contours().nth(1).map(|l| l.len()), Some(3));

        let mut polygons: Geom<Coordinate> = Geom::from(MultiPolygon::from(vec![
            Polygon::from(vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0)]),
            Polygon::from(vec![c(5.0, 5.0), c(6.0, 5.0), c(6.0, 6.0)]),
        ]));
        polygons
            .insert_point(&PathLocator::PolygonRingIndex(1, 0, 2), c(6.0, 5.5))
            .expect("valid path");
        let Geom::MultiPolygon(polygons) = polygons else {
            panic!("unexpected geometry kind");
        };
        assert_eq!(
            polygons.parts()[1].outer_contour.points,
            vec![c(5.0, 5.0), c(6.0, 5.0), c(6.0, 5.5), c(6.0, 6.0)]
        );
    }

    #[test]
    fn insert_with_mismatched_path() {
        let mut geom: Geom<Coordinate> = Geom::from(Contour::open(vec![c(0.0, 0.0), c(2.0, 0.0)]));
        assert_matches!(
            geom.insert_point(&PathLocator::RingIndex(0, 1), c(1.0, 0.0)),
            Err(GeoSnapTypesError::PathMismatch {
                kind: GeometryKind::Contour,
                ..
            })
        );
        assert_matches!(
            geom.insert_point(&PathLocator::Index(3), c(1.0, 0.0)),
            Err(GeoSnapTypesError::PathMismatch { .. })
        );

        let mut geom: Geom<Coordinate> = Geom::from(Polygon::from(vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0)]));
        assert_matches!(
            geom.insert_point(&PathLocator::RingIndex(1, 0), c(1.0, 0.0)),
            Err(GeoSnapTypesError::PathMismatch { .. })
        );

        let mut geom = Geom::Point(c(0.0, 0.0));
        assert_matches!(
            geom.insert_point(&PathLocator::Whole, c(1.0, 0.0)),
            Err(GeoSnapTypesError::PathMismatch {
                path: PathLocator::Whole,
                kind: GeometryKind::Point,
            })
        );
    }
}
