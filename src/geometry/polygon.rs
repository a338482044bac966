use crate::datatypes::Dimension;
use crate::geometry::LinearRing;

/// A polygon: the first ring is the exterior, the remaining rings are holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    dim: Dimension,
    rings: Vec<LinearRing>,
}

impl Polygon {
    pub fn new(dim: Dimension, rings: Vec<LinearRing>) -> Self {
        Self { dim, rings }
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    /// The exterior ring, or `None` for an empty polygon.
    pub fn exterior(&self) -> Option<&LinearRing> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LinearRing] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}
