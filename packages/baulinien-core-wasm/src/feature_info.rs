use serde::{Deserialize, Serialize};

use crate::position::GlobalPosition;

// Shape of the GetFeatureInfo JSON response: a GeoJSON-flavored feature
// collection carrying the fixed Baulinien attribute schema. Only the first
// feature is ever consumed; an empty `features` list is the normal
// "nothing found here" outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureInfo {
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    // The service reports "unknown" as well as numeric counts here.
    #[serde(default, rename = "totalFeatures")]
    pub total_features: Option<serde_json::Value>,
    #[serde(default, rename = "numberReturned")]
    pub number_returned: Option<u32>,
    #[serde(default, rename = "timeStamp")]
    pub time_stamp: Option<String>,
    #[serde(default)]
    pub crs: Option<Crs>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub id: Option<String>,
    pub geometry: FeatureGeometry,
    #[serde(default)]
    pub geometry_name: Option<String>,
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureGeometry {
    pub r#type: String,
    /// GeoJSON order, [longitude, latitude] per entry.
    pub coordinates: Vec<Vec<f64>>,
}

impl FeatureGeometry {
    /// Translate the GeoJSON coordinate list into map positions.
    /// Entries with fewer than two components are skipped.
    pub fn positions(&self) -> Vec<GlobalPosition> {
        self.coordinates
            .iter()
            .filter_map(|coordinate| GlobalPosition::from_lon_lat(coordinate))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub ogc_fid: i64,
    #[serde(default)]
    pub bemerkunge: String,
    // Schemaless in the service output (string, number or null have all been observed).
    #[serde(default)]
    pub rechtsstat: serde_json::Value,
    #[serde(default)]
    pub hauptnut_1: String,
    #[serde(default)]
    pub publiziert: String,
    #[serde(default)]
    pub kanton: String,
    #[serde(default)]
    pub provider: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crs {
    pub r#type: String,
    pub properties: CrsProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrsProperties {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed-down capture of a live GetFeatureInfo response.
    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": "baulinien.402",
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[8.5402, 47.3781], [8.5411, 47.3779], [8.5423, 47.3775]]
                },
                "geometry_name": "wkb_geometry",
                "properties": {
                    "ogc_fid": 402,
                    "bemerkunge": "",
                    "rechtsstat": null,
                    "hauptnut_1": "Strasse",
                    "publiziert": "2016-03-12Z",
                    "kanton": "ZH",
                    "provider": "ARE"
                }
            }
        ],
        "totalFeatures": "unknown",
        "numberReturned": 1,
        "timeStamp": "2024-05-02T09:14:00.000Z",
        "crs": {"type": "name", "properties": {"name": "urn:ogc:def:crs:EPSG::4326"}}
    }"#;

    #[test]
    fn decodes_a_captured_response() {
        let info: FeatureInfo = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(info.features.len(), 1);

        let feature = &info.features[0];
        assert_eq!(feature.properties.ogc_fid, 402);
        assert_eq!(feature.properties.kanton, "ZH");
        assert_eq!(feature.properties.hauptnut_1, "Strasse");
        assert_eq!(feature.properties.publiziert, "2016-03-12Z");
        assert!(feature.properties.rechtsstat.is_null());
        assert_eq!(feature.geometry.r#type, "LineString");
        assert_eq!(feature.geometry.coordinates.len(), 3);
        assert_eq!(info.number_returned, Some(1));
    }

    #[test]
    fn decodes_an_empty_collection() {
        let info: FeatureInfo =
            serde_json::from_str(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert!(info.features.is_empty());
        assert!(info.crs.is_none());
    }

    #[test]
    fn positions_swap_into_latitude_first_order() {
        let info: FeatureInfo = serde_json::from_str(SAMPLE).unwrap();
        let positions = info.features[0].geometry.positions();
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[0].latitude, 47.3781);
        assert_eq!(positions[0].longitude, 8.5402);
    }

    #[test]
    fn positions_skip_truncated_coordinates() {
        let geometry = FeatureGeometry {
            r#type: "LineString".to_string(),
            coordinates: vec![vec![8.5, 47.3], vec![8.6], vec![8.7, 47.4, 412.0]],
        };
        let positions = geometry.positions();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[1].latitude, 47.4);
    }

    #[test]
    fn missing_properties_fall_back_to_empty_values() {
        let info: FeatureInfo = serde_json::from_str(
            r#"{
                "features": [{
                    "geometry": {"type": "LineString", "coordinates": [[8.5, 47.3]]},
                    "properties": {"ogc_fid": 7}
                }]
            }"#,
        )
        .unwrap();
        let properties = &info.features[0].properties;
        assert_eq!(properties.kanton, "");
        assert_eq!(properties.provider, "");
        assert!(properties.rechtsstat.is_null());
    }
}
