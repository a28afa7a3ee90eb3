use serde::{Deserialize, Serialize};

use crate::feature_info::FeatureProperties;
use crate::position::GlobalPosition;

// Declarative description of one highlight's panel section. The host renders
// the widgets and routes their events back into the exported entry points,
// keyed by the section's highlight id.

/// A display string with the host's secondary-language (German) label attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub text: String,
    pub german: String,
}

impl LocalizedText {
    pub fn new(text: &str, german: &str) -> Self {
        LocalizedText {
            text: text.to_string(),
            german: german.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: LocalizedText,
    pub value: String,
}

/// Actions rendered as section controls. The host calls the matching exported
/// entry point (`on_highlight_remove`, `on_highlight_focus`, ...) when one fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionActionKind {
    Remove,
    Focus,
    DownloadGeojson,
    Promote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionAction {
    pub kind: SectionActionKind,
    pub label: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub highlight_id: u32,
    /// The feature id doubles as the section title.
    pub title: String,
    pub values: Vec<LabeledValue>,
    pub coordinates_label: LocalizedText,
    /// One `latitude | longitude` line per point, rendered as a paragraph.
    pub coordinates: String,
    pub marker_checkbox_label: LocalizedText,
    pub markers_checked: bool,
    pub actions: Vec<SectionAction>,
}

/// Paragraph shown at the top of the plugin panel.
pub fn intro_paragraph() -> LocalizedText {
    LocalizedText::new(
        "Click on the map to view information about the selected construction line.",
        "Klicken auf die Karte, um Informationen über die ausgewählte Baulinie anzuzeigen.",
    )
}

/// Year of the `publiziert` date for display. Falls back to the raw value when
/// the date does not lead with a four-digit year.
pub fn publication_year(published: &str) -> String {
    let year: String = published
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if year.len() == 4 {
        year
    } else {
        published.to_string()
    }
}

pub fn build_section_spec(
    highlight_id: u32,
    properties: &FeatureProperties,
    positions: &[GlobalPosition],
) -> SectionSpec {
    let coordinates = positions
        .iter()
        .map(|position| format!("{} | {}", position.latitude, position.longitude))
        .collect::<Vec<_>>()
        .join("\n");

    SectionSpec {
        highlight_id,
        title: properties.ogc_fid.to_string(),
        values: vec![
            LabeledValue {
                label: LocalizedText::new("Canton", "Kanton"),
                value: properties.kanton.clone(),
            },
            LabeledValue {
                label: LocalizedText::new("Main Usage", "Hauptnutzung"),
                value: properties.hauptnut_1.clone(),
            },
            LabeledValue {
                label: LocalizedText::new("Published at", "Publiziert am"),
                value: publication_year(&properties.publiziert),
            },
        ],
        coordinates_label: LocalizedText::new("Coordinates", "Koordinaten"),
        coordinates,
        marker_checkbox_label: LocalizedText::new(
            "Show Point Markers",
            "Punktemarkierungen anzeigen",
        ),
        markers_checked: false,
        actions: vec![
            SectionAction {
                kind: SectionActionKind::Remove,
                label: LocalizedText::new("Remove", "Entfernen"),
            },
            SectionAction {
                kind: SectionActionKind::Focus,
                label: LocalizedText::new("Focus", "Fokussieren"),
            },
            SectionAction {
                kind: SectionActionKind::DownloadGeojson,
                label: LocalizedText::new("Download as GeoJSON", "Als GeoJSON herunterladen"),
            },
            SectionAction {
                kind: SectionActionKind::Promote,
                label: LocalizedText::new("Keep as Shape", "Als Form behalten"),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_properties() -> FeatureProperties {
        FeatureProperties {
            ogc_fid: 402,
            bemerkunge: String::new(),
            rechtsstat: serde_json::Value::Null,
            hauptnut_1: "Strasse".to_string(),
            publiziert: "2016-03-12Z".to_string(),
            kanton: "ZH".to_string(),
            provider: "ARE".to_string(),
        }
    }

    #[test]
    fn publication_year_takes_the_leading_year() {
        assert_eq!(publication_year("2016-03-12Z"), "2016");
        assert_eq!(publication_year("1999-12-31T00:00:00Z"), "1999");
    }

    #[test]
    fn publication_year_falls_back_to_the_raw_value() {
        assert_eq!(publication_year("unbekannt"), "unbekannt");
        assert_eq!(publication_year(""), "");
        assert_eq!(publication_year("12.03.2016"), "12.03.2016");
    }

    #[test]
    fn section_spec_carries_the_attribute_values() {
        let positions = [
            GlobalPosition::new(47.3781, 8.5402),
            GlobalPosition::new(47.3779, 8.5411),
        ];
        let spec = build_section_spec(3, &sample_properties(), &positions);

        assert_eq!(spec.highlight_id, 3);
        assert_eq!(spec.title, "402");
        assert_eq!(spec.values[0].label.german, "Kanton");
        assert_eq!(spec.values[0].value, "ZH");
        assert_eq!(spec.values[1].value, "Strasse");
        assert_eq!(spec.values[2].value, "2016");
        assert!(!spec.markers_checked);
    }

    #[test]
    fn section_spec_lists_coordinates_latitude_first() {
        let positions = [
            GlobalPosition::new(47.3781, 8.5402),
            GlobalPosition::new(47.3779, 8.5411),
        ];
        let spec = build_section_spec(0, &sample_properties(), &positions);
        assert_eq!(spec.coordinates, "47.3781 | 8.5402\n47.3779 | 8.5411");
        assert_eq!(spec.coordinates_label.german, "Koordinaten");
    }

    #[test]
    fn section_spec_offers_all_four_actions() {
        let spec = build_section_spec(0, &sample_properties(), &[]);
        let kinds: Vec<SectionActionKind> = spec.actions.iter().map(|action| action.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionActionKind::Remove,
                SectionActionKind::Focus,
                SectionActionKind::DownloadGeojson,
                SectionActionKind::Promote,
            ]
        );
    }
}
