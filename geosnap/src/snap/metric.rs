use geosnap_types::geo::{Coordinate, Datum, GeoPoint};

/// Great-circle distance between two coordinates in kilometers on a sphere with the radius of 6371 km.
///
/// The value is only used to compare snap candidates that are all close to the pointer, so the spherical
/// approximation is good enough.
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    a.distance(b, &Datum::SPHERE) / 1000.0
}
