use crate::datatypes::Dimension;
use crate::geometry::{Coord, LineString};

pub(crate) fn ls0() -> LineString {
    LineString::new(Dimension::XY, vec![Coord::xy(0., 1.), Coord::xy(1., 2.)])
}

pub(crate) fn ls1() -> LineString {
    LineString::new(
        Dimension::XY,
        vec![Coord::xy(3., 4.), Coord::xy(5., 6.), Coord::xy(-7.5, 1e-9)],
    )
}

pub(crate) fn ls_xyz() -> LineString {
    LineString::new(
        Dimension::XYZ,
        vec![Coord::xyz(0., 1., 10.), Coord::xyz(1., 2., 20.)],
    )
}

pub(crate) fn ls_empty() -> LineString {
    LineString::new(Dimension::XY, vec![])
}
