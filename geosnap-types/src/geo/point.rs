use crate::geo::Datum;
use num_traits::{Float, One};

/// A point on the surface of a celestial body.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }

    /// Great-circle distance to the `other` point in meters, computed with the haversine formula on a sphere with
    /// the mean radius of the `datum`.
    ///
    /// Ellipsoid flattening is ignored, so the value is an approximation that is good enough to compare distances
    /// between close points.
    fn distance(&self, other: &impl GeoPoint<Num = Self::Num>, datum: &Datum) -> Self::Num
    where
        Self::Num: From<f64>,
    {
        let two = <Self::Num as From<f64>>::from(2.0);
        let d_lat = (other.lat() - self.lat()).to_radians();
        let d_lon = (other.lon() - self.lon()).to_radians();

        let a = (d_lat / two).sin().powi(2)
            + self.lat_rad().cos() * other.lat_rad().cos() * (d_lon / two).sin().powi(2);
        let c = two * a.sqrt().atan2((Self::Num::one() - a).sqrt());

        <Self::Num as From<f64>>::from(datum.mean_radius()) * c
    }
}
