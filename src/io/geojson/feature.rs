use geojson::{Feature, FeatureCollection, JsonObject};

use crate::geometry::Geometry;

/// Pair a decoded geometry with the attribute columns of its row.
///
/// A missing geometry serializes as `"geometry": null`.
pub fn to_feature(geometry: Option<&Geometry>, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: geometry.map(|geometry| geometry.into()),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

pub fn to_feature_collection(features: impl IntoIterator<Item = Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: features.into_iter().collect(),
        foreign_members: None,
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::io::wkb::from_wkb;
    use crate::test::encoder::WkbWriter;
    use crate::test::linestring::ls0;

    #[test]
    fn feature_shape() {
        let buf = WkbWriter::default().write(&ls0().into());
        let mut properties = JsonObject::new();
        properties.insert("id".to_string(), json!(1));
        properties.insert("ESTAT".to_string(), json!("definitiu"));
        let feature = to_feature(Some(&from_wkb(&buf).unwrap()), properties);

        assert_eq!(
            serde_json::to_value(&feature).unwrap(),
            json!({
                "type": "Feature",
                "properties": {"id": 1, "ESTAT": "definitiu"},
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[0.0, 1.0], [1.0, 2.0]]
                }
            })
        );
    }

    #[test]
    fn collection_shape() {
        let collection = to_feature_collection([to_feature(None, JsonObject::new())]);
        assert_eq!(
            serde_json::to_value(&collection).unwrap(),
            json!({
                "type": "FeatureCollection",
                "features": [{"type": "Feature", "properties": {}, "geometry": null}]
            })
        );
    }
}
