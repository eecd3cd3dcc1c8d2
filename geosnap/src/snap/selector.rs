use crate::snap::candidate::ProjectedCandidate;
use crate::snap::metric::distance_km;
use crate::snap::SnapResult;
use geosnap_types::geo::Coordinate;

/// An interpolated point is replaced by the nearer endpoint of its segment if the endpoint is no farther from the
/// query than this many times the distance to the interpolated point.
pub const CORNER_TOLERANCE: f64 = 1.3;

/// Folds the next `candidate` into the `running` best result.
///
/// The candidate wins only if it is strictly closer to `query` than the running result, so of several equally close
/// candidates the first one is kept. Winning interpolated candidates are subject to corner preference (see
/// [`CORNER_TOLERANCE`]). A corner match is a vertex match, so it carries no feature id or path. The distance of the
/// returned result is never greater than the distance of `running`.
pub fn select(
    running: SnapResult,
    candidate: ProjectedCandidate<'_>,
    query: &Coordinate,
) -> SnapResult {
    let distance = distance_km(query, &candidate.coords);
    if distance >= running.distance {
        return running;
    }

    let Some((a, b)) = candidate.segment else {
        return SnapResult::vertex(distance, candidate.coords);
    };

    let distance_a = distance_km(query, &a);
    let distance_b = distance_km(query, &b);
    let (corner, corner_distance) = if distance_a < distance_b {
        (a, distance_a)
    } else {
        (b, distance_b)
    };

    if corner_distance < distance * CORNER_TOLERANCE {
        if corner_distance < running.distance {
            SnapResult::vertex(corner_distance, corner)
        } else {
            running
        }
    } else {
        SnapResult {
            distance,
            coords: candidate.coords,
            interpolated: true,
            feature_id: candidate.feature_id.cloned(),
            path: candidate.path,
        }
    }
}
