use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// WGS84 position in degrees. No altitude.
///
/// Snapping projects points onto segments in the planar embedding of the coordinates, where `x` is longitude and `y`
/// is latitude, so `Coordinate` implements both [`GeoPoint`] and [`CartesianPoint2d`].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

impl Coordinate {
    /// Creates a new coordinate from longitude and latitude in degrees.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Longitude and latitude as GeoJSON position order.
    pub fn to_array(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl GeoPoint for Coordinate {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl CartesianPoint2d for Coordinate {
    type Num = f64;

    fn x(&self) -> f64 {
        self.lon
    }

    fn y(&self) -> f64 {
        self.lat
    }
}

impl NewCartesianPoint2d<f64> for Coordinate {
    fn new(x: f64, y: f64) -> Self {
        Self { lon: x, lat: y }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

/// Creates a new [`Coordinate`] from longitude and latitude values (in degrees).
///
/// ```
/// use geosnap_types::geo::GeoPoint;
/// use geosnap_types::lonlat;
///
/// let point = lonlat!(10.0, 50.0);
/// assert_eq!(point.lat(), 50.0);
/// ```
#[macro_export]
macro_rules! lonlat {
    ($lon:expr, $lat:expr) => {
        $crate::geo::Coordinate::new($lon, $lat)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Datum;
    use approx::assert_abs_diff_eq;

    #[test]
    fn planar_embedding() {
        let point = Coordinate::new(10.0, 50.0);
        assert_eq!(point.x(), 10.0);
        assert_eq!(point.y(), 50.0);
        assert_eq!(<Coordinate as NewCartesianPoint2d>::new(10.0, 50.0), point);
        assert_eq!(Coordinate::from([10.0, 50.0]), point);
    }

    #[test]
    fn distance() {
        let a = lonlat!(10.0, 50.0);
        let b = lonlat!(10.1, 50.0);

        assert_eq!(a.distance(&a, &Datum::SPHERE), 0.0);
        assert_eq!(a.distance(&b, &Datum::SPHERE), b.distance(&a, &Datum::SPHERE));
        // 0.1 degree of longitude at 50N
        assert_abs_diff_eq!(a.distance(&b, &Datum::SPHERE), 7_147.5, epsilon = 1.0);

        // one degree of latitude anywhere on the sphere
        let c = lonlat!(10.0, 51.0);
        assert_abs_diff_eq!(a.distance(&c, &Datum::SPHERE), 111_194.9, epsilon = 1.0);
    }
}
