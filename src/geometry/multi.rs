use crate::datatypes::Dimension;
use crate::geometry::{LineString, Point, Polygon};

/// A collection of points.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    dim: Dimension,
    points: Vec<Point>,
}

impl MultiPoint {
    pub fn new(dim: Dimension, points: Vec<Point>) -> Self {
        Self { dim, points }
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }
}

/// A collection of line strings.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    dim: Dimension,
    line_strings: Vec<LineString>,
}

impl MultiLineString {
    pub fn new(dim: Dimension, line_strings: Vec<LineString>) -> Self {
        Self { dim, line_strings }
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }
}

/// A collection of polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    dim: Dimension,
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(dim: Dimension, polygons: Vec<Polygon>) -> Self {
        Self { dim, polygons }
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }
}
