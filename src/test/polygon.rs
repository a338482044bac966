use crate::datatypes::Dimension;
use crate::geometry::{Coord, LinearRing, Polygon};

fn square(min: f64, max: f64) -> LinearRing {
    LinearRing::new(vec![
        Coord::xy(min, min),
        Coord::xy(max, min),
        Coord::xy(max, max),
        Coord::xy(min, max),
        Coord::xy(min, min),
    ])
}

pub(crate) fn p0() -> Polygon {
    Polygon::new(
        Dimension::XY,
        vec![LinearRing::new(vec![
            Coord::xy(-111., 45.),
            Coord::xy(-111., 41.),
            Coord::xy(-104., 41.),
            Coord::xy(-111., 45.),
        ])],
    )
}

/// A square with a square hole.
pub(crate) fn p1() -> Polygon {
    Polygon::new(Dimension::XY, vec![square(0., 10.), square(2., 4.)])
}

pub(crate) fn p_empty() -> Polygon {
    Polygon::new(Dimension::XY, vec![])
}

pub(crate) fn p_xym() -> Polygon {
    Polygon::new(
        Dimension::XYM,
        vec![LinearRing::new(vec![
            Coord::xym(0., 0., 1.),
            Coord::xym(1., 0., 2.),
            Coord::xym(0., 1., 3.),
            Coord::xym(0., 0., 1.),
        ])],
    )
}
