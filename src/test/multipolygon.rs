use crate::datatypes::Dimension;
use crate::geometry::MultiPolygon;
use crate::test::polygon::{p0, p1, p_xym};

pub(crate) fn mp0() -> MultiPolygon {
    MultiPolygon::new(Dimension::XY, vec![p0(), p1()])
}

pub(crate) fn mp_xym() -> MultiPolygon {
    MultiPolygon::new(Dimension::XYM, vec![p_xym(), p_xym()])
}
