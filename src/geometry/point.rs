use crate::datatypes::Dimension;
use crate::geometry::Coord;

/// A single position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coord: Coord,
}

impl Point {
    pub fn new(coord: Coord) -> Self {
        Self { coord }
    }

    pub fn coord(&self) -> &Coord {
        &self.coord
    }

    pub fn x(&self) -> f64 {
        self.coord.x
    }

    pub fn y(&self) -> f64 {
        self.coord.y
    }

    pub fn dimension(&self) -> Dimension {
        self.coord.dimension()
    }

    pub fn is_empty(&self) -> bool {
        self.coord.is_empty()
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self::new(value)
    }
}
