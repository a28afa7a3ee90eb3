use serde::{Deserialize, Serialize};

// Plugin configuration supplied by the embedding application at init time.
// Every field has a default, so the host may pass an empty object (or nothing
// at all) and still get a working plugin against the cantonal Baulinien WMS.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfig {
    /// Base endpoint of the GetFeatureInfo service.
    pub api_base_url: String,
    /// WMS layer queried for construction lines (used for `layers` and `query_layers`).
    pub wms_layer_name: String,
    /// Half size, in degrees, of the bounding box centered on the clicked position.
    pub select_box_threshold: f64,
    /// Display name of the overlay layer added to the map.
    pub layer_display_name: String,
    pub line_color: String,
    pub line_thickness: f64,
    pub marker_color: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        PluginConfig {
            api_base_url: "https://wms.geodienste.ch/baulinien/deu".to_string(),
            wms_layer_name: "baulinien".to_string(),
            select_box_threshold: 0.0001,
            layer_display_name: "Baulinien".to_string(),
            line_color: "lightpink".to_string(),
            line_thickness: 3.0,
            marker_color: "antiquewhite".to_string(),
        }
    }
}

// Options for the host's WMS overlay layer, serialized across the JS boundary
// when the bootstrap creates the (initially hidden) layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WmsLayerOptions {
    pub name: String,
    pub url: String,
    pub layer: String,
    pub format: String,
    pub transparent: bool,
}

impl PluginConfig {
    pub fn wms_layer_options(&self) -> WmsLayerOptions {
        WmsLayerOptions {
            name: self.layer_display_name.clone(),
            url: self.api_base_url.clone(),
            layer: self.wms_layer_name.clone(),
            format: "image/png".to_string(),
            transparent: true,
        }
    }
}
