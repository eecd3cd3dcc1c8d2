//! Adding snapped points to features as new vertices.

use crate::error::GeoSnapError;
use crate::host::{InsertVertex, SnapHost};
use crate::pointer::PointerEvent;
use crate::snap::{SnapResult, Snapper};

/// Snaps the event and inserts the snapped point into the feature it lies on.
///
/// The event position is moved to the snapped point. The host is mutated only if the point lies inside of a segment
/// of a feature (see [`SnapResult::insertion_site`]): snapping to a vertex or not snapping at all leaves the features
/// as they are. Returns the snap result.
pub fn snapped_segment_update<H: SnapHost + InsertVertex>(
    snapper: &Snapper,
    event: &mut PointerEvent,
    host: &mut H,
) -> Result<SnapResult, GeoSnapError> {
    let result = snapper.snap_event(event, host);

    if let Some((id, path)) = result.insertion_site() {
        host.insert_coordinate_at(id, path, result.coords)?;
    }

    Ok(result)
}
