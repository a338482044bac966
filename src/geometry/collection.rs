use crate::datatypes::Dimension;
use crate::geometry::Geometry;

/// A heterogeneous, possibly nested, collection of geometries.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    dim: Dimension,
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    pub fn new(dim: Dimension, geometries: Vec<Geometry>) -> Self {
        Self { dim, geometries }
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    /// How many collections deep this collection reaches, counting itself as one.
    pub fn depth(&self) -> usize {
        1 + self
            .geometries
            .iter()
            .filter_map(|geom| geom.as_geometry_collection())
            .map(|gc| gc.depth())
            .max()
            .unwrap_or(0)
    }
}
