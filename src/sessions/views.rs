use crate::map::consts::{
    GIVEAWAY_MARKER_COLOR, GIVEAWAY_MARKER_LABEL, GIVEAWAY_MARKER_SIZE, MAP_ZOOM,
    PARTICIPANT_MARKER_COLOR, PARTICIPANT_MARKER_SIZE, WINNER_MARKER_COLOR, WINNER_MARKER_SIZE,
};
use crate::map::models::{LatLng, Marker};
use crate::participants::errors::EmptyInputError;
use crate::participants::models::{LeaderboardEntry, Participant, Winner};
use crate::participants::ranking::{distance_label, leaderboard};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub giveaway: LatLng,
    pub zoom: u8,
    pub participants_count: usize,
    pub markers: Vec<Marker>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerBanner {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerView {
    pub giveaway: LatLng,
    pub zoom: u8,
    pub winner: Winner,
    pub banner: WinnerBanner,
    pub markers: Vec<Marker>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// The giveaway location first, then every participant in upload order.
pub fn map_view(giveaway: LatLng, participants: &[Participant]) -> MapView {
    MapView {
        giveaway,
        zoom: MAP_ZOOM,
        participants_count: participants.len(),
        markers: markers(giveaway, participants),
    }
}

pub fn winner_view(
    giveaway: LatLng,
    participants: &[Participant],
    winner: Winner,
    leaderboard_size: usize,
) -> Result<WinnerView, EmptyInputError> {
    let leaderboard = leaderboard(participants, leaderboard_size)?;
    let mut markers = markers(giveaway, participants);
    markers.push(Marker::new(
        winner.participant.position(),
        format!("Winner: {}", winner.participant.name),
        WINNER_MARKER_COLOR,
        WINNER_MARKER_SIZE,
    ));
    let banner = WinnerBanner {
        title: format!("Winner: {}", winner.participant.name.to_uppercase()),
        subtitle: format!(
            "{} from prize",
            distance_label(winner.participant.distance_km)
        ),
    };
    Ok(WinnerView {
        giveaway,
        zoom: MAP_ZOOM,
        winner,
        banner,
        markers,
        leaderboard,
    })
}

fn markers(giveaway: LatLng, participants: &[Participant]) -> Vec<Marker> {
    let mut markers = Vec::with_capacity(participants.len() + 2);
    markers.push(Marker::new(
        giveaway,
        GIVEAWAY_MARKER_LABEL,
        GIVEAWAY_MARKER_COLOR,
        GIVEAWAY_MARKER_SIZE,
    ));
    markers.extend(participants.iter().map(|participant| {
        Marker::new(
            participant.position(),
            participant.name.clone(),
            PARTICIPANT_MARKER_COLOR,
            PARTICIPANT_MARKER_SIZE,
        )
    }));
    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(name: &str, lat: f64, lng: f64, distance_km: f64) -> Participant {
        Participant {
            name: name.to_string(),
            raw_coordinates: format!("{lat},{lng}"),
            latitude: lat,
            longitude: lng,
            distance_km,
        }
    }

    #[test]
    fn map_view_starts_with_giveaway_marker() {
        let giveaway = LatLng::new(-33.86, 151.05);
        let participants = vec![participant("Ada", 1.0, 2.0, 10.0)];

        let view = map_view(giveaway, &participants);

        assert_eq!(view.participants_count, 1);
        assert_eq!(view.zoom, MAP_ZOOM);
        assert_eq!(view.markers.len(), 2);
        assert_eq!(view.markers[0].label, GIVEAWAY_MARKER_LABEL);
        assert_eq!(view.markers[0].color, GIVEAWAY_MARKER_COLOR);
        assert_eq!(view.markers[1].label, "Ada");
        assert_eq!((view.markers[1].lat, view.markers[1].lng), (1.0, 2.0));
    }

    #[test]
    fn map_view_of_empty_upload_has_only_giveaway() {
        let view = map_view(LatLng::new(0.0, 0.0), &[]);
        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.participants_count, 0);
    }

    #[test]
    fn winner_view_highlights_winner() {
        let giveaway = LatLng::new(0.0, 0.0);
        let participants = vec![
            participant("far", 5.0, 5.0, 786.0),
            participant("near one", 0.1, 0.1, 15.724),
        ];
        let winner = Winner {
            index: 1,
            participant: participants[1].clone(),
        };

        let view = winner_view(giveaway, &participants, winner, 10).expect("non-empty input");

        assert_eq!(view.banner.title, "Winner: NEAR ONE");
        assert_eq!(view.banner.subtitle, "15.72 km from prize");
        assert_eq!(view.markers.len(), 4);
        let winner_marker = view.markers.last().expect("winner marker");
        assert_eq!(winner_marker.label, "Winner: near one");
        assert_eq!(winner_marker.color, WINNER_MARKER_COLOR);
        assert_eq!(winner_marker.size, WINNER_MARKER_SIZE);
        assert_eq!(view.leaderboard[0].name, "near one");
        assert_eq!(view.leaderboard[1].name, "far");
    }
}
