use crate::config::PluginConfig;
use crate::console_log;
use crate::download;
use crate::feature_info::FeatureInfo;
use crate::highlight::Highlight;
use crate::host::HostSurface;
use crate::position::GlobalPosition;
use crate::query::build_feature_info_url;
use crate::section::build_section_spec;
use crate::service::{FeatureInfoClient, ServiceError};

/// Owns the active highlight collection and keeps every highlight's host-side
/// mirror (line drawing, point markers, panel section) in step with it.
///
/// Lifecycle per highlight: created from the first feature of a query result,
/// line removed and rebuilt as the panel closes and reopens, torn down
/// completely on the section's remove action. Removal is by id, never by
/// position in the list.
pub struct ConstructionLineHandler<H: HostSurface> {
    host: H,
    config: PluginConfig,
    highlights: Vec<Highlight>,
    next_id: u32,
}

impl<H: HostSurface> ConstructionLineHandler<H> {
    pub fn new(host: H, config: PluginConfig) -> Self {
        ConstructionLineHandler {
            host,
            config,
            highlights: Vec::new(),
            next_id: 0,
        }
    }

    /// Query the feature service for the clicked position and add a highlight
    /// for the first returned feature. An empty result is a normal outcome and
    /// leaves the collection untouched; transport and decode failures propagate
    /// to the caller unchanged.
    pub async fn select<C: FeatureInfoClient>(
        &mut self,
        client: &C,
        position: GlobalPosition,
    ) -> Result<Option<u32>, ServiceError> {
        let url = build_feature_info_url(&self.config, &position);
        let info = client.get_feature_info(&url).await?;
        Ok(self.add_highlight(&info))
    }

    /// Add a highlight for the first feature of a GetFeatureInfo result and
    /// return its id. Returns `None` (and changes nothing) when the result has
    /// no features.
    pub fn add_highlight(&mut self, info: &FeatureInfo) -> Option<u32> {
        let feature = match info.features.first() {
            Some(feature) => feature,
            None => {
                console_log!("No construction line at the selected position");
                return None;
            }
        };

        let positions = feature.geometry.positions();
        let line = self
            .host
            .draw_line(&positions, &self.config.line_color, self.config.line_thickness);

        // Markers start out hidden; the section checkbox drives them from here on.
        let markers: Vec<_> = positions
            .iter()
            .map(|position| {
                let marker = self.host.add_marker(*position, &self.config.marker_color);
                self.host.set_marker_visible(marker, false);
                marker
            })
            .collect();

        let id = self.next_id;
        self.next_id += 1;

        let spec = build_section_spec(id, &feature.properties, &positions);
        let section = self.host.insert_section(&spec);

        self.highlights.push(Highlight {
            id,
            feature_id: feature.properties.ogc_fid.to_string(),
            line: Some(line),
            markers,
            section,
            positions,
            show_markers: false,
        });

        console_log!("Added highlight {} for feature {}", id, feature.properties.ogc_fid);
        Some(id)
    }

    /// Rebuild every stored highlight's line drawing and reapply its marker
    /// visibility flag. Used when the containing panel reopens.
    pub fn show_all(&mut self) {
        let host = &mut self.host;
        for highlight in &mut self.highlights {
            if highlight.line.is_none() {
                highlight.line = Some(host.draw_line(
                    &highlight.positions,
                    &self.config.line_color,
                    self.config.line_thickness,
                ));
            }
            if highlight.show_markers {
                for &marker in &highlight.markers {
                    host.set_marker_visible(marker, true);
                }
            }
        }
    }

    /// Remove every highlight's line drawing and hide its markers without
    /// discarding the highlight records. Used when the panel closes.
    pub fn hide_all(&mut self) {
        let host = &mut self.host;
        for highlight in &mut self.highlights {
            if let Some(line) = highlight.line.take() {
                host.remove_line(line);
            }
            for &marker in &highlight.markers {
                host.set_marker_visible(marker, false);
            }
        }
    }

    /// Tear down the highlight with the given id: section detached, line and
    /// markers removed, record dropped from the collection. The target is
    /// located by id so that removing one of several otherwise identical
    /// sections always removes the one whose action fired.
    pub fn remove_highlight(&mut self, id: u32) -> bool {
        let index = match self.highlights.iter().position(|highlight| highlight.id == id) {
            Some(index) => index,
            None => return false,
        };

        let highlight = self.highlights.remove(index);
        self.host.remove_section(highlight.section);
        if let Some(line) = highlight.line {
            self.host.remove_line(line);
        }
        for marker in highlight.markers {
            self.host.remove_marker(marker);
        }

        console_log!("Removed highlight {}", id);
        true
    }

    /// Store the checkbox state and show or hide all of the highlight's
    /// markers accordingly. The line is not affected.
    pub fn toggle_point_markers(&mut self, id: u32, checked: bool) -> bool {
        let host = &mut self.host;
        match self.highlights.iter_mut().find(|highlight| highlight.id == id) {
            Some(highlight) => {
                highlight.show_markers = checked;
                for &marker in &highlight.markers {
                    host.set_marker_visible(marker, checked);
                }
                true
            }
            None => false,
        }
    }

    /// Center the map view on the highlight's line. A no-op while the panel is
    /// closed (there is no line drawing to focus then).
    pub fn focus_highlight(&mut self, id: u32) -> bool {
        let line = self
            .highlights
            .iter()
            .find(|highlight| highlight.id == id)
            .and_then(|highlight| highlight.line);
        match line {
            Some(line) => {
                self.host.focus_line(line);
                true
            }
            None => false,
        }
    }

    /// Hand the highlight's geometry to the host's download mechanism as a
    /// GeoJSON LineString named `<feature-id>-<timestamp>.geojson`.
    pub fn download_geojson(&mut self, id: u32, timestamp_ms: f64) -> bool {
        let (filename, content) = match self.highlights.iter().find(|highlight| highlight.id == id)
        {
            Some(highlight) => (
                download::geojson_filename(&highlight.feature_id, timestamp_ms),
                download::line_string_document(&highlight.positions),
            ),
            None => return false,
        };
        self.host.download(&filename, &content);
        true
    }

    /// Promote the highlight's geometry to a permanent host shape.
    pub fn promote_highlight(&mut self, id: u32) -> bool {
        let shape = match self.highlights.iter().find(|highlight| highlight.id == id) {
            Some(highlight) => (highlight.positions.clone(), highlight.feature_id.clone()),
            None => return false,
        };
        self.host.promote_line(&shape.0, &shape.1);
        true
    }

    pub fn highlight_count(&self) -> usize {
        self.highlights.len()
    }

    pub fn highlight_ids(&self) -> Vec<u32> {
        self.highlights.iter().map(|highlight| highlight.id).collect()
    }
}
