/// Reference ellipsoid of a celestial body. Distances are computed on a sphere with its mean radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// Sphere with the radius of 6371 km, the conventional mean Earth radius used for great-circle distances.
    pub const SPHERE: Self = Datum {
        semimajor: 6_371_000.0,
        inv_flattening: f64::INFINITY,
    };

    /// Arithmetic mean radius `(2a + b) / 3` in meters.
    pub fn mean_radius(&self) -> f64 {
        self.semimajor * (1.0 - 1.0 / (3.0 * self.inv_flattening))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_radius() {
        assert_eq!(Datum::SPHERE.mean_radius(), 6_371_000.0);
    }
}
