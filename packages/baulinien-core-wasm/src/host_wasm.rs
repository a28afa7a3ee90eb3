use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::feature_info::FeatureInfo;
use crate::host::{FileDownload, HostHandle, MapSurface, PanelUi};
use crate::position::GlobalPosition;
use crate::section::{LocalizedText, SectionSpec};
use crate::service::{decode_feature_info, FeatureInfoClient, ServiceError};

// Helper callbacks the embedding map application registers under
// `baulinienHost` before loading this module. They wrap the host's map.*,
// ui.* and web.* globals; object handles stay on the JS side and cross the
// boundary as plain ids.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = baulinienHost)]
    fn map_draw_line(positions: JsValue, color: &str, thickness: f64) -> u32;
    #[wasm_bindgen(js_namespace = baulinienHost)]
    fn map_remove_line(line: u32);
    #[wasm_bindgen(js_namespace = baulinienHost)]
    fn map_add_marker(latitude: f64, longitude: f64, color: &str) -> u32;
    #[wasm_bindgen(js_namespace = baulinienHost)]
    fn map_set_marker_visible(marker: u32, visible: bool);
    #[wasm_bindgen(js_namespace = baulinienHost)]
    fn map_remove_marker(marker: u32);
    #[wasm_bindgen(js_namespace = baulinienHost)]
    fn map_focus_line(line: u32);
    #[wasm_bindgen(js_namespace = baulinienHost)]
    fn map_promote_line(positions: JsValue, label: &str);

    #[wasm_bindgen(js_namespace = baulinienHost)]
    fn ui_insert_section(spec: JsValue) -> u32;
    #[wasm_bindgen(js_namespace = baulinienHost)]
    fn ui_remove_section(section: u32);
    #[wasm_bindgen(js_namespace = baulinienHost)]
    pub fn ui_add_paragraph(text: JsValue);

    #[wasm_bindgen(js_namespace = baulinienHost)]
    pub fn wms_layer_create(options: JsValue) -> u32;
    #[wasm_bindgen(js_namespace = baulinienHost)]
    pub fn wms_layer_set_visible(layer: u32, visible: bool);

    #[wasm_bindgen(js_namespace = baulinienHost)]
    fn download_file(filename: &str, content: &str);

    // JavaScript helper to GET a URL; the returned promise resolves with the
    // response body text.
    #[wasm_bindgen(js_namespace = baulinienHost, catch)]
    pub fn fetch(url: &str) -> Result<js_sys::Promise, JsValue>;
}

fn positions_to_js(positions: &[GlobalPosition]) -> JsValue {
    // Plain latitude/longitude objects; serializing f64 records cannot fail.
    serde_wasm_bindgen::to_value(positions).unwrap_or(JsValue::NULL)
}

pub fn paragraph_to_js(text: &LocalizedText) -> JsValue {
    serde_wasm_bindgen::to_value(text).unwrap_or(JsValue::NULL)
}

/// Host surface implementation backed by the `baulinienHost` helpers.
pub struct WasmHost;

impl WasmHost {
    pub fn new() -> Self {
        WasmHost
    }
}

impl Default for WasmHost {
    fn default() -> Self {
        WasmHost::new()
    }
}

impl MapSurface for WasmHost {
    fn draw_line(
        &mut self,
        positions: &[GlobalPosition],
        color: &str,
        thickness: f64,
    ) -> HostHandle {
        map_draw_line(positions_to_js(positions), color, thickness)
    }

    fn remove_line(&mut self, line: HostHandle) {
        map_remove_line(line);
    }

    fn add_marker(&mut self, position: GlobalPosition, color: &str) -> HostHandle {
        map_add_marker(position.latitude, position.longitude, color)
    }

    fn set_marker_visible(&mut self, marker: HostHandle, visible: bool) {
        map_set_marker_visible(marker, visible);
    }

    fn remove_marker(&mut self, marker: HostHandle) {
        map_remove_marker(marker);
    }

    fn focus_line(&mut self, line: HostHandle) {
        map_focus_line(line);
    }

    fn promote_line(&mut self, positions: &[GlobalPosition], label: &str) {
        map_promote_line(positions_to_js(positions), label);
    }
}

impl PanelUi for WasmHost {
    fn insert_section(&mut self, spec: &SectionSpec) -> HostHandle {
        let spec = serde_wasm_bindgen::to_value(spec).unwrap_or(JsValue::NULL);
        ui_insert_section(spec)
    }

    fn remove_section(&mut self, section: HostHandle) {
        ui_remove_section(section);
    }
}

impl FileDownload for WasmHost {
    fn download(&mut self, filename: &str, content: &str) {
        download_file(filename, content);
    }
}

/// Feature service client going through the host's fetch helper.
pub struct WasmFeatureClient;

impl FeatureInfoClient for WasmFeatureClient {
    async fn get_feature_info(&self, url: &str) -> Result<FeatureInfo, ServiceError> {
        let promise = fetch(url).map_err(|error| ServiceError::Transport(format!("{:?}", error)))?;
        let response = JsFuture::from(promise)
            .await
            .map_err(|error| ServiceError::Transport(format!("{:?}", error)))?;
        let body = response.as_string().ok_or_else(|| {
            ServiceError::Transport("fetch helper resolved with a non-string body".to_string())
        })?;
        decode_feature_info(&body)
    }
}
