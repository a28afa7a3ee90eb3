use crate::host::HostHandle;
use crate::position::GlobalPosition;

/// One active construction-line selection together with the host-side objects
/// mirroring it. Owned exclusively by the handler's active list; everything
/// else refers to a highlight by its id.
#[derive(Debug)]
pub struct Highlight {
    pub id: u32,
    /// The feature's `ogc_fid`, kept for download filenames and shape labels.
    pub feature_id: String,
    /// Present while the panel is open. Hiding removes the drawing entirely;
    /// showing rebuilds it from the stored positions.
    pub line: Option<HostHandle>,
    /// One marker per stored position, shown and hidden as a group.
    pub markers: Vec<HostHandle>,
    pub section: HostHandle,
    pub positions: Vec<GlobalPosition>,
    /// Sticky visibility choice, reapplied whenever the panel reopens.
    pub show_markers: bool,
}
