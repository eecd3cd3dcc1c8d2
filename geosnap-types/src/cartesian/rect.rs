use crate::cartesian::CartesianPoint2d;
use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive, Num};
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    /// Minimum x coordinate.
    pub x_min: N,
    /// Minimum y coordinate.
    pub y_min: N,
    /// Maximum x coordinate.
    pub x_max: N,
    /// Maximum y coordinate.
    pub y_max: N,
}

impl<N: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> Rect<N> {
    /// Creates a new rectangle. The caller is responsible for `min <= max` for both axes.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Square with the given half-width centered at `center`.
    pub fn around(center: &impl CartesianPoint2d<Num = N>, half_width: N) -> Self {
        Self {
            x_min: center.x() - half_width,
            y_min: center.y() - half_width,
            x_max: center.x() + half_width,
            y_max: center.y() + half_width,
        }
    }

    /// Bounding rectangle of the points. Returns `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let init = Self::new(first.x(), first.y(), first.x(), first.y());

        Some(points.fold(init, |rect, p| Self {
            x_min: if p.x() < rect.x_min { p.x() } else { rect.x_min },
            y_min: if p.y() < rect.y_min { p.y() } else { rect.y_min },
            x_max: if p.x() > rect.x_max { p.x() } else { rect.x_max },
            y_max: if p.y() > rect.y_max { p.y() } else { rect.y_max },
        }))
    }

    /// Returns true if the point is inside the rectangle or on its border.
    pub fn contains(&self, point: &impl CartesianPoint2d<Num = N>) -> bool {
        self.x_min <= point.x()
            && self.x_max >= point.x()
            && self.y_min <= point.y()
            && self.y_max >= point.y()
    }

    /// Returns true if the rectangles have at least one common point.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x_min <= other.x_max
            && self.x_max >= other.x_min
            && self.y_min <= other.y_max
            && self.y_max >= other.y_min
    }
}
