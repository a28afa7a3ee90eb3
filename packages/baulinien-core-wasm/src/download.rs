use serde_json::json;

use crate::position::GlobalPosition;

/// GeoJSON document for the "download as GeoJSON" action. Coordinates go out
/// the way they arrived from the service, [longitude, latitude] per entry,
/// regardless of the latitude-first representation used for drawing.
pub fn line_string_document(positions: &[GlobalPosition]) -> String {
    let coordinates: Vec<[f64; 2]> = positions
        .iter()
        .map(|position| position.to_lon_lat())
        .collect();

    json!({
        "type": "LineString",
        "coordinates": coordinates,
    })
    .to_string()
}

pub fn geojson_filename(feature_id: &str, timestamp_ms: f64) -> String {
    format!("{}-{}.geojson", feature_id, timestamp_ms as u64)
}
