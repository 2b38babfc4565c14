use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both coordinates are finite and within geodetic bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A point drawn on the client's map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
    pub color: String,
    pub size: u32,
}

impl Marker {
    pub fn new(position: LatLng, label: impl Into<String>, color: &str, size: u32) -> Self {
        Self {
            lat: position.lat,
            lng: position.lng,
            label: label.into(),
            color: color.to_string(),
            size,
        }
    }
}
