use crate::feature::FeatureId;
use crate::snap::candidate::ProjectedCandidate;
use geosnap_types::geo::Coordinate;
use geosnap_types::{Contour, Geom, PathLocator, Polygon};

/// Lazily enumerates the snap candidates of a geometry for the `query` point.
///
/// * points yield themselves without a path;
/// * every segment of a line string or a ring yields the point closest to `query`, with the path pointing to the
///   segment's end vertex. Rings always include the segment closing the ring.
pub fn walk<'a>(
    query: Coordinate,
    geometry: &'a Geom<Coordinate>,
    feature_id: Option<&'a FeatureId>,
) -> Box<dyn Iterator<Item = ProjectedCandidate<'a>> + 'a> {
    match geometry {
        Geom::Point(point) => Box::new(std::iter::once(ProjectedCandidate::vertex(*point, feature_id, None))),
        Geom::MultiPoint(points) => Box::new(
            points
                .iter_points()
                .map(move |p| ProjectedCandidate::vertex(*p, feature_id, None)),
        ),
        Geom::Contour(contour) => Box::new(project_segments(
            contour,
            query,
            feature_id,
            PathLocator::Index,
        )),
        Geom::MultiContour(lines) => {
            Box::new(lines.contours().enumerate().flat_map(move |(line, contour)| {
                project_segments(contour, query, feature_id, move |i| {
                    PathLocator::RingIndex(line, i)
                })
            }))
        }
        Geom::Polygon(polygon) => Box::new(polygon.iter_contours().enumerate().flat_map(
            move |(ring, contour)| {
                project_segments(contour, query, feature_id, move |i| {
                    PathLocator::RingIndex(ring, i)
                })
            },
        )),
        Geom::MultiPolygon(polygons) => Box::new(polygons.parts().iter().enumerate().flat_map(
            move |(index, polygon)| {
                polygon
                    .iter_contours()
                    .enumerate()
                    .flat_map(move |(ring, contour)| {
                        project_segments(contour, query, feature_id, move |i| {
                            PathLocator::PolygonRingIndex(index, ring, i)
                        })
                    })
            },
        )),
    }
}

fn project_segments<'a, C>(
    contour: &'a C,
    query: Coordinate,
    feature_id: Option<&'a FeatureId>,
    path: impl Fn(usize) -> PathLocator + 'a,
) -> impl Iterator<Item = ProjectedCandidate<'a>> + 'a
where
    C: Contour<Point = Coordinate>,
{
    contour
        .iter_segments()
        .enumerate()
        .map(move |(i, segment)| ProjectedCandidate::project(&query, segment, feature_id, path(i + 1)))
}
