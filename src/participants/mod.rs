use crate::map::cache::DistanceCache;
use crate::map::models::LatLng;
use errors::IngestError;
use ingest::parse_participants;
use models::{Participant, ParticipantRow};
use std::io;

pub mod consts;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod ranking;

/// Attaches the distance to the giveaway location to every row, preserving order.
pub fn score(
    rows: Vec<ParticipantRow>,
    giveaway: LatLng,
    distances: &DistanceCache,
) -> Vec<Participant> {
    rows.into_iter()
        .map(|row| {
            let distance_km = distances.distance_km(giveaway, row.position);
            Participant::new(row, distance_km)
        })
        .collect()
}

pub fn load<R: io::Read>(
    reader: R,
    giveaway: LatLng,
    distances: &DistanceCache,
) -> Result<Vec<Participant>, IngestError> {
    let rows = parse_participants(reader)?;
    Ok(score(rows, giveaway, distances))
}
