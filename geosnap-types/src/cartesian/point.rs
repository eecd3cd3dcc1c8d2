use nalgebra::{Scalar, Vector2};
use num_traits::{Bounded, FromPrimitive, Num};
use serde::{Deserialize, Serialize};

/// A point in 2d cartesian coordinate space.
pub trait CartesianPoint2d {
    /// Numeric type used to represent coordinates.
    type Num: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }
}

/// Cartesian point that can be constructed from its coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}

/// Simple 2d point, used for screen positions in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2d<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num: num_traits::Num + Copy> Point2d<Num> {
    /// Creates a new point.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }

    /// X coordinate.
    pub fn x(&self) -> Num {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> Num {
        self.y
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint2d
    for Point2d<Num>
{
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive>
    NewCartesianPoint2d<Num> for Point2d<Num>
{
    fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub() {
        let a = Point2d::new(1.0, 2.0);
        let b = Point2d::new(4.0, 6.0);

        assert_eq!(b.sub(&a), Vector2::new(3.0, 4.0));
        assert_eq!(a.sub(&a), Vector2::new(0.0, 0.0));
    }
}
