use crate::participants::errors::EmptyInputError;
use crate::participants::models::{LeaderboardEntry, Participant};

/// Picks the participant closest to the giveaway location. The earliest one wins ties.
pub fn select_winner(participants: &[Participant]) -> Result<(usize, &Participant), EmptyInputError> {
    let mut participants = participants.iter().enumerate();
    let mut closest = participants.next().ok_or(EmptyInputError)?;
    for (index, participant) in participants {
        if participant.distance_km < closest.1.distance_km {
            closest = (index, participant);
        }
    }
    Ok(closest)
}

/// Participants ordered by ascending distance, truncated to `limit` entries.
///
/// The sort is stable, so participants at the same distance keep their upload order.
pub fn leaderboard(
    participants: &[Participant],
    limit: usize,
) -> Result<Vec<LeaderboardEntry>, EmptyInputError> {
    if participants.is_empty() {
        return Err(EmptyInputError);
    }
    let mut ranked = participants.iter().collect::<Vec<_>>();
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    Ok(ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(position, participant)| LeaderboardEntry {
            rank: position + 1,
            name: participant.name.clone(),
            distance_km: participant.distance_km,
            distance_label: distance_label(participant.distance_km),
        })
        .collect())
}

pub fn distance_label(distance_km: f64) -> String {
    format!("{distance_km:.2} km")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(name: &str, distance_km: f64) -> Participant {
        Participant {
            name: name.to_string(),
            raw_coordinates: String::from("0,0"),
            latitude: 0.0,
            longitude: 0.0,
            distance_km,
        }
    }

    #[test]
    fn winner_is_first_of_tied_minimums() {
        let participants = vec![
            participant("A", 5.0),
            participant("B", 3.0),
            participant("C", 3.0),
            participant("D", 7.0),
        ];

        let (index, winner) = select_winner(&participants).expect("non-empty input");

        assert_eq!(index, 1);
        assert_eq!(winner.name, "B");
    }

    #[test]
    fn winner_of_single_participant() {
        let participants = vec![participant("Solo", 1234.5)];
        assert_eq!(select_winner(&participants).map(|(index, _)| index), Ok(0));
    }

    #[test]
    fn winner_requires_participants() {
        assert_eq!(select_winner(&[]), Err(EmptyInputError));
    }

    #[test]
    fn selecting_winner_leaves_input_untouched() {
        let participants = vec![participant("A", 2.0), participant("B", 1.0)];
        let before = participants.clone();
        let _ = select_winner(&participants);
        let _ = leaderboard(&participants, 10);
        assert_eq!(participants, before);
    }

    #[test]
    fn leaderboard_is_stable() {
        let participants = vec![
            participant("A", 3.0),
            participant("B", 1.0),
            participant("C", 1.0),
            participant("D", 2.0),
        ];

        let entries = leaderboard(&participants, 10).expect("non-empty input");

        let names = entries.iter().map(|entry| entry.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["B", "C", "D", "A"]);
        let ranks = entries.iter().map(|entry| entry.rank).collect::<Vec<_>>();
        assert_eq!(ranks, [1, 2, 3, 4]);
    }

    #[test]
    fn leaderboard_is_truncated() {
        let participants = (0..15)
            .rev()
            .map(|i| participant(&format!("P{i}"), i as f64))
            .collect::<Vec<_>>();

        let entries = leaderboard(&participants, 10).expect("non-empty input");

        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].name, "P0");
        assert_eq!(entries[9].name, "P9");
    }

    #[test]
    fn leaderboard_requires_participants() {
        assert_eq!(leaderboard(&[], 10), Err(EmptyInputError));
    }

    #[test]
    fn distance_is_labelled_with_two_decimals() {
        assert_eq!(distance_label(14.0), "14.00 km");
        assert_eq!(distance_label(0.126), "0.13 km");
    }
}
