pub(crate) mod geometrycollection;
pub(crate) mod linestring;
pub(crate) mod multipolygon;
pub(crate) mod polygon;

use crate::geometry::Geometry;

/// At least one geometry of every variant and dimension.
pub(crate) fn all_geometries() -> Vec<Geometry> {
    vec![
        point::p0().into(),
        point::p1().into(),
        point::p_xyzm().into(),
        linestring::ls0().into(),
        linestring::ls_xyz().into(),
        linestring::ls_empty().into(),
        polygon::p0().into(),
        polygon::p1().into(),
        polygon::p_empty().into(),
        multipoint::mp0().into(),
        multipoint::mp_empty().into(),
        multilinestring::ml0().into(),
        multilinestring::ml_xyzm().into(),
        multipolygon::mp0().into(),
        multipolygon::mp_xym().into(),
        geometrycollection::gc0().into(),
        geometrycollection::nested_gc().into(),
        geometrycollection::gc_xyz().into(),
    ]
}
