use crate::config::PluginConfig;
use crate::position::GlobalPosition;

/// Build the GetFeatureInfo URL for a clicked position.
///
/// The request asks for a 1x1 pixel image whose bounding box is a small square
/// centered on the position, so the service resolves the query at pixel (0, 0).
/// Values are concatenated without any escaping; the remote service expects
/// this exact byte layout.
pub fn build_feature_info_url(config: &PluginConfig, position: &GlobalPosition) -> String {
    let threshold = config.select_box_threshold;
    let bbox = format!(
        "{},{},{},{}",
        position.longitude - threshold,
        position.latitude - threshold,
        position.longitude + threshold,
        position.latitude + threshold
    );

    let parameters = [
        ("service", "WMS".to_string()),
        ("version", "1.1.1".to_string()),
        ("request", "GetFeatureInfo".to_string()),
        ("layers", config.wms_layer_name.clone()),
        ("width", "1".to_string()),
        ("height", "1".to_string()),
        ("srs", "EPSG:4326".to_string()),
        ("query_layers", config.wms_layer_name.clone()),
        ("info_format", "application/json".to_string()),
        ("x", "0".to_string()),
        ("y", "0".to_string()),
        ("bbox", bbox),
    ];

    let query = parameters
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", config.api_base_url, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> PluginConfig {
        PluginConfig {
            api_base_url: "https://example.test/wms".to_string(),
            wms_layer_name: "baulinien".to_string(),
            select_box_threshold: 0.0001,
            ..PluginConfig::default()
        }
    }

    #[test]
    fn bbox_is_centered_on_the_position() {
        let config = test_config();
        let position = GlobalPosition::new(47.5, 8.25);
        let url = build_feature_info_url(&config, &position);

        let expected = format!(
            "bbox={},{},{},{}",
            8.25 - 0.0001,
            47.5 - 0.0001,
            8.25 + 0.0001,
            47.5 + 0.0001
        );
        assert!(url.contains(&expected), "missing bbox in {}", url);
    }

    #[test]
    fn fixed_parameters_are_present_exactly_once() {
        let config = test_config();
        let url = build_feature_info_url(&config, &GlobalPosition::new(47.0, 8.0));
        let query = url.split_once('?').unwrap().1;
        let pairs: Vec<&str> = query.split('&').collect();

        for expected in [
            "service=WMS",
            "version=1.1.1",
            "request=GetFeatureInfo",
            "layers=baulinien",
            "width=1",
            "height=1",
            "srs=EPSG:4326",
            "query_layers=baulinien",
            "info_format=application/json",
            "x=0",
            "y=0",
        ] {
            let count = pairs.iter().filter(|pair| **pair == expected).count();
            assert_eq!(count, 1, "{} appears {} times in {}", expected, count, url);
        }
    }

    #[test]
    fn url_starts_with_the_base_endpoint() {
        let config = test_config();
        let url = build_feature_info_url(&config, &GlobalPosition::new(47.0, 8.0));
        assert!(url.starts_with("https://example.test/wms?service=WMS&"));
    }

    #[test]
    fn threshold_scales_the_box() {
        let mut config = test_config();
        config.select_box_threshold = 0.05;
        let url = build_feature_info_url(&config, &GlobalPosition::new(-10.0, -20.0));
        assert!(url.ends_with("bbox=-20.05,-10.05,-19.95,-9.95"), "got {}", url);
    }
}
