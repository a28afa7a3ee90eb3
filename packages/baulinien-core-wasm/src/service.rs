use thiserror::Error;

use crate::feature_info::FeatureInfo;

// The feature service is deliberately thin: one GET, one JSON decode, no
// retries and no timeout. Transport failures surface unchanged to the caller
// and the plugin defines no recovery for them.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("feature info request failed: {0}")]
    Transport(String),
    #[error("feature info response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Issues the GetFeatureInfo GET for an already-built URL.
///
/// The production implementation goes through the host's fetch helper
/// (`host_wasm::WasmFeatureClient`); tests substitute canned clients.
#[allow(async_fn_in_trait)] // single-threaded host runtime, no Send bound wanted
pub trait FeatureInfoClient {
    async fn get_feature_info(&self, url: &str) -> Result<FeatureInfo, ServiceError>;
}

/// Decode a GetFeatureInfo response body.
pub fn decode_feature_info(body: &str) -> Result<FeatureInfo, ServiceError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_feature_collection() {
        let info = decode_feature_info(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "geometry": {"type": "LineString", "coordinates": [[8.5, 47.3], [8.6, 47.4]]},
                    "properties": {"ogc_fid": 12, "kanton": "BE"}
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(info.features.len(), 1);
        assert_eq!(info.features[0].properties.kanton, "BE");
    }

    #[test]
    fn malformed_body_surfaces_as_a_decode_error() {
        let error = decode_feature_info("<ServiceExceptionReport/>").unwrap_err();
        assert!(matches!(error, ServiceError::Decode(_)));
        assert!(error.to_string().contains("not valid JSON"));
    }
}
