use crate::datatypes::Dimension;
use crate::geometry::{Coord, GeometryCollection, LineString, Point};
use crate::test::{linestring, multipoint, point, polygon};

pub(crate) fn gc0() -> GeometryCollection {
    GeometryCollection::new(
        Dimension::XY,
        vec![point::p0().into(), linestring::ls1().into()],
    )
}

/// `[Point, LineString, [Polygon, MultiPoint]]`
pub(crate) fn nested_gc() -> GeometryCollection {
    let inner = GeometryCollection::new(
        Dimension::XY,
        vec![polygon::p1().into(), multipoint::mp0().into()],
    );
    GeometryCollection::new(
        Dimension::XY,
        vec![
            point::p2().into(),
            linestring::ls0().into(),
            inner.into(),
        ],
    )
}

pub(crate) fn gc_xyz() -> GeometryCollection {
    GeometryCollection::new(
        Dimension::XYZ,
        vec![
            Point::new(Coord::xyz(1., 2., 3.)).into(),
            linestring::ls_xyz().into(),
            LineString::new(Dimension::XYZ, vec![]).into(),
        ],
    )
}

/// Collections nested so that the innermost, empty, collection is `levels` levels down.
pub(crate) fn deep_gc(levels: usize) -> GeometryCollection {
    (0..levels).fold(GeometryCollection::new(Dimension::XY, vec![]), |inner, _| {
        GeometryCollection::new(Dimension::XY, vec![inner.into()])
    })
}
