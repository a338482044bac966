//! Coordinate dimension shared by every geometry type in this crate.

use std::fmt::Display;

/// The dimension of a geometry.
///
/// Every coordinate inside a decoded geometry has this dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dimension {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Construct from the presence of Z and M ordinates.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// The number of bytes one coordinate occupies in WKB.
    pub(crate) fn coord_size(&self) -> usize {
        self.size() * 8
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_flags() {
        assert_eq!(Dimension::from_flags(false, false), Dimension::XY);
        assert_eq!(Dimension::from_flags(true, false), Dimension::XYZ);
        assert_eq!(Dimension::from_flags(false, true), Dimension::XYM);
        assert_eq!(Dimension::from_flags(true, true), Dimension::XYZM);
    }

    #[test]
    fn sizes() {
        assert_eq!(Dimension::XY.coord_size(), 16);
        assert_eq!(Dimension::XYM.size(), 3);
        assert!(Dimension::XYM.has_m());
        assert!(!Dimension::XYM.has_z());
        assert_eq!(Dimension::XYZM.coord_size(), 32);
    }
}
