use crate::feature::FeatureId;
use geosnap_types::geo::Coordinate;
use geosnap_types::segment::{Segment, SegmentPoint};
use geosnap_types::PathLocator;

/// A point of a feature that the pointer could be snapped to.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedCandidate<'a> {
    /// Position of the point.
    pub coords: Coordinate,
    /// Endpoints of the segment the point was interpolated on. `None` if the point is a vertex.
    pub segment: Option<(Coordinate, Coordinate)>,
    /// Feature the point belongs to.
    pub feature_id: Option<&'a FeatureId>,
    /// Location of the vertex slot inside of the feature geometry.
    pub path: Option<PathLocator>,
}

impl<'a> ProjectedCandidate<'a> {
    /// Candidate at an existing vertex.
    pub fn vertex(coords: Coordinate, feature_id: Option<&'a FeatureId>, path: Option<PathLocator>) -> Self {
        Self {
            coords,
            segment: None,
            feature_id,
            path,
        }
    }

    /// Candidate at the point of the `segment` closest to `query`.
    pub fn project(
        query: &Coordinate,
        segment: Segment<'_, Coordinate>,
        feature_id: Option<&'a FeatureId>,
        path: PathLocator,
    ) -> Self {
        match segment.closest_point(query) {
            SegmentPoint::Interpolated(coords) => Self {
                coords,
                segment: Some((*segment.0, *segment.1)),
                feature_id,
                path: Some(path),
            },
            endpoint => Self::vertex(segment.resolve(endpoint), feature_id, Some(path)),
        }
    }

    /// Returns true if the point lies inside of a segment rather than at a vertex.
    pub fn is_interpolated(&self) -> bool {
        self.segment.is_some()
    }
}
