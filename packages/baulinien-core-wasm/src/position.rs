use serde::{Deserialize, Serialize};

// A WGS84 coordinate the way the map host hands it over: latitude first.
// GeoJSON documents store the opposite order, so the two conversion helpers
// below are the only places where the axis swap happens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GlobalPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GlobalPosition {
            latitude,
            longitude,
        }
    }

    /// Build a position from a GeoJSON coordinate entry ([longitude, latitude, ...]).
    /// Returns `None` when the entry has fewer than two components.
    pub fn from_lon_lat(coordinate: &[f64]) -> Option<Self> {
        if coordinate.len() >= 2 {
            Some(GlobalPosition {
                latitude: coordinate[1],
                longitude: coordinate[0],
            })
        } else {
            None
        }
    }

    /// GeoJSON ordering, [longitude, latitude].
    pub fn to_lon_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lon_lat_swaps_axis_order() {
        let position = GlobalPosition::from_lon_lat(&[8.5417, 47.3769]).unwrap();
        assert_eq!(position.latitude, 47.3769);
        assert_eq!(position.longitude, 8.5417);
    }

    #[test]
    fn from_lon_lat_rejects_short_entries() {
        assert!(GlobalPosition::from_lon_lat(&[8.5417]).is_none());
        assert!(GlobalPosition::from_lon_lat(&[]).is_none());
    }

    #[test]
    fn to_lon_lat_round_trips() {
        let coordinate = [8.5417, 47.3769];
        let position = GlobalPosition::from_lon_lat(&coordinate).unwrap();
        assert_eq!(position.to_lon_lat(), coordinate);
    }
}
