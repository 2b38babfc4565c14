use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayResponse {
    pub error: bool,
    pub location: LatLng,
    pub leaderboard_size: usize,
}
