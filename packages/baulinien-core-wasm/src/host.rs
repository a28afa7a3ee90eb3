use crate::position::GlobalPosition;
use crate::section::SectionSpec;

// Capability traits over the host application's map.*, ui.* and web.* globals.
// The highlight handler only ever talks to these, so it runs unchanged against
// the wasm bindings in production and against recording fakes in tests.

/// Opaque id minted by the host for an object it keeps on its side of the
/// boundary (a line drawing, a marker, a panel section, a layer).
pub type HostHandle = u32;

pub trait MapSurface {
    fn draw_line(&mut self, positions: &[GlobalPosition], color: &str, thickness: f64)
        -> HostHandle;
    fn remove_line(&mut self, line: HostHandle);
    fn add_marker(&mut self, position: GlobalPosition, color: &str) -> HostHandle;
    fn set_marker_visible(&mut self, marker: HostHandle, visible: bool);
    fn remove_marker(&mut self, marker: HostHandle);
    /// Center the map view on an existing line drawing.
    fn focus_line(&mut self, line: HostHandle);
    /// Hand the geometry over to the host as a permanent shape that outlives
    /// this plugin's highlight lifecycle.
    fn promote_line(&mut self, positions: &[GlobalPosition], label: &str);
}

pub trait PanelUi {
    /// Insert a highlight section immediately after the panel's anchor
    /// separator. Repeated selections therefore keep a stable position
    /// relative to the panel's static content instead of trailing it.
    fn insert_section(&mut self, spec: &SectionSpec) -> HostHandle;
    fn remove_section(&mut self, section: HostHandle);
}

pub trait FileDownload {
    fn download(&mut self, filename: &str, content: &str);
}

/// Everything the highlight handler needs from the host runtime.
pub trait HostSurface: MapSurface + PanelUi + FileDownload {}

impl<T: MapSurface + PanelUi + FileDownload> HostSurface for T {}
