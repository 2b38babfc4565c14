use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};

/// A CSV row that passed validation but hasn't been scored yet.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticipantRow {
    pub name: String,
    pub raw_coordinates: String,
    pub position: LatLng,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub name: String,
    pub raw_coordinates: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
}

impl Participant {
    pub fn new(row: ParticipantRow, distance_km: f64) -> Self {
        Self {
            name: row.name,
            raw_coordinates: row.raw_coordinates,
            latitude: row.position.lat,
            longitude: row.position.lng,
            distance_km,
        }
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Winner {
    /// Position of the winner in the uploaded file, starting at zero.
    pub index: usize,
    pub participant: Participant,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub distance_km: f64,
    pub distance_label: String,
}
