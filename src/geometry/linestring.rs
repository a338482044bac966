use crate::datatypes::Dimension;
use crate::geometry::Coord;

/// An ordered sequence of positions. May be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    dim: Dimension,
    coords: Vec<Coord>,
}

impl LineString {
    /// Construct a new LineString.
    ///
    /// Every coordinate is expected to have dimension `dim`.
    pub fn new(dim: Dimension, coords: Vec<Coord>) -> Self {
        Self { dim, coords }
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn into_inner(self) -> Vec<Coord> {
        self.coords
    }
}

/// One closed contour of a polygon.
///
/// Closure (first coordinate equal to the last) is expected of well-formed data but is not
/// checked when decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing {
    coords: Vec<Coord>,
}

impl LinearRing {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self { coords }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) => first == last,
            _ => true,
        }
    }
}
