use wasm_bindgen::prelude::*;

// Create a console module for logging
pub mod console;
// Plugin configuration supplied by the host
mod config;
// GeoJSON download artifact
mod download;
// Wire model of the GetFeatureInfo response
pub mod feature_info;
// Highlight lifecycle manager
mod handler;
// The highlight record itself
mod highlight;
// Capability traits over the host globals
mod host;
// wasm-bindgen implementations of the host capabilities
mod host_wasm;
// The (latitude, longitude) value type
pub mod position;
// GetFeatureInfo URL construction
mod query;
// Panel section description
mod section;
// Feature service client and errors
mod service;
// Shared plugin state
mod state;

use config::PluginConfig;
use position::GlobalPosition;
use query::build_feature_info_url;
use section::intro_paragraph;
use service::FeatureInfoClient;
use state::PluginState;

// Enable better panic messages in console during development
#[cfg(feature = "console_error_panic_hook")]
pub use console_error_panic_hook::set_once as set_panic_hook;

// Use the macro from our console module
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => (crate::console::log(&format!($($t)*)))
}

use std::sync::Once;
static INIT: Once = Once::new();

// This sets up the wasm_bindgen start functionality
#[wasm_bindgen(start)]
pub fn start() {
    INIT.call_once(|| {
        // Set the panic hook for better error messages
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        console_log!("Baulinien module initialized successfully");
    });
}

/// Wire the plugin into the host: apply the (optional) configuration object,
/// add the intro paragraph to the panel and create the initially hidden WMS
/// overlay layer.
#[wasm_bindgen]
pub fn init_plugin(config: JsValue) -> Result<(), JsValue> {
    let config: PluginConfig = if config.is_undefined() || config.is_null() {
        PluginConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|error| JsValue::from_str(&format!("Invalid plugin config: {}", error)))?
    };

    host_wasm::ui_add_paragraph(host_wasm::paragraph_to_js(&intro_paragraph()));

    let options = serde_wasm_bindgen::to_value(&config.wms_layer_options())?;
    let layer = host_wasm::wms_layer_create(options);
    host_wasm::wms_layer_set_visible(layer, false);

    PluginState::with_mut(|state| {
        state.handler =
            handler::ConstructionLineHandler::new(host_wasm::WasmHost::new(), config.clone());
        state.config = config;
        state.wms_layer = Some(layer);
    });

    console_log!("Baulinien plugin wired to the host");
    Ok(())
}

/// Map click entry point. Queries the WMS service for a construction line near
/// the position and, when one is found, adds a highlight for it.
///
/// Overlapping calls each proceed independently; the state lock is only taken
/// after the response has arrived.
#[wasm_bindgen]
pub async fn on_position_select(latitude: f64, longitude: f64) -> Result<(), JsValue> {
    let position = GlobalPosition::new(latitude, longitude);
    let config = PluginState::with(|state| state.config.clone());

    let url = build_feature_info_url(&config, &position);
    console_log!("GetFeatureInfo query: {}", url);

    let info = host_wasm::WasmFeatureClient
        .get_feature_info(&url)
        .await
        .map_err(|error| JsValue::from_str(&error.to_string()))?;

    PluginState::with_mut(|state| state.handler.add_highlight(&info));
    Ok(())
}

/// Panel opened: show the WMS overlay and rebuild every stored highlight.
#[wasm_bindgen]
pub fn on_panel_open() {
    PluginState::with_mut(|state| {
        if let Some(layer) = state.wms_layer {
            host_wasm::wms_layer_set_visible(layer, true);
        }
        state.handler.show_all();
    });
}

/// Panel closed: hide the WMS overlay, remove the line drawings and hide the
/// markers, keeping the highlight records for the next open.
#[wasm_bindgen]
pub fn on_panel_close() {
    PluginState::with_mut(|state| {
        if let Some(layer) = state.wms_layer {
            host_wasm::wms_layer_set_visible(layer, false);
        }
        state.handler.hide_all();
    });
}

/// "Show Point Markers" checkbox changed for a section.
#[wasm_bindgen]
pub fn on_marker_toggle(highlight_id: u32, checked: bool) {
    PluginState::with_mut(|state| state.handler.toggle_point_markers(highlight_id, checked));
}

/// Remove action fired for a section.
#[wasm_bindgen]
pub fn on_highlight_remove(highlight_id: u32) {
    PluginState::with_mut(|state| state.handler.remove_highlight(highlight_id));
}

/// Focus action fired for a section.
#[wasm_bindgen]
pub fn on_highlight_focus(highlight_id: u32) {
    PluginState::with_mut(|state| state.handler.focus_highlight(highlight_id));
}

/// Download action fired for a section.
#[wasm_bindgen]
pub fn on_download_geojson(highlight_id: u32) {
    let timestamp_ms = js_sys::Date::now();
    PluginState::with_mut(|state| state.handler.download_geojson(highlight_id, timestamp_ms));
}

/// Promote action fired for a section.
#[wasm_bindgen]
pub fn on_promote(highlight_id: u32) {
    PluginState::with_mut(|state| state.handler.promote_highlight(highlight_id));
}

/// Number of active highlights, exposed for the host's debugging overlay.
#[wasm_bindgen]
pub fn active_highlight_count() -> usize {
    PluginState::with(|state| state.handler.highlight_count())
}
