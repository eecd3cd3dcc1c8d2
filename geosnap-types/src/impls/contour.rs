use serde::{Deserialize, Serialize};

/// Line string: an open sequence of points.
///
/// Dereferences to the vector of its points, so vertices can be read and inserted directly.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Contour<P> {
    points: Vec<P>,
}

impl<P> Contour<P> {
    /// Creates a line string from its points.
    pub fn open(points: Vec<P>) -> Self {
        Self { points }
    }
}

impl<P> std::ops::Deref for Contour<P> {
    type Target = Vec<P>;

    fn deref(&self) -> &Vec<P> {
        &self.points
    }
}

impl<P> std::ops::DerefMut for Contour<P> {
    fn deref_mut(&mut self) -> &mut Vec<P> {
        &mut self.points
    }
}

impl<P> From<Vec<P>> for Contour<P> {
    fn from(points: Vec<P>) -> Self {
        Self::open(points)
    }
}

impl<P> crate::contour::Contour for Contour<P> {
    type Point = P;

    fn is_closed(&self) -> bool {
        false
    }

    fn iter_points(&self) -> impl Iterator<Item = &P> {
        self.points.iter()
    }
}

/// Polygon ring.
///
/// The points are kept as given: if the last point repeats the first one, it stays in the ring and the ring gets a
/// zero-length closing segment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClosedContour<P> {
    /// Vertices of the ring.
    pub points: Vec<P>,
}

impl<P> ClosedContour<P> {
    /// Creates a ring from its points.
    pub fn new(points: Vec<P>) -> Self {
        Self { points }
    }
}

impl<P> From<Vec<P>> for ClosedContour<P> {
    fn from(points: Vec<P>) -> Self {
        Self::new(points)
    }
}

impl<P> crate::contour::ClosedContour for ClosedContour<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &P> {
        self.points.iter()
    }
}
