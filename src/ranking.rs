use serde::Serialize;

use crate::error::NotFoundError;
use crate::roster::{Participant, Snapshot};

/// One participant's place on the leaderboard.
///
/// JSON field names follow the cohort site's rank endpoint.
#[derive(Debug, Serialize)]
pub struct Standing<'a> {
    pub participant: &'a Participant,
    /// 1-based position on the leaderboard.
    pub rank: usize,
    #[serde(rename = "totalParticipants")]
    pub total: usize,
}

/// The full roster ordered by points, highest first.
///
/// Ordering is deterministic for a given snapshot: points decide, and equal
/// points fall back to source order. Zero-point participants rank too, after
/// everyone with points.
pub fn leaderboard(snapshot: &Snapshot) -> Vec<&Participant> {
    let mut board: Vec<&Participant> = snapshot.participants().iter().collect();
    // sort_by is stable, so ties keep their source order.
    board.sort_by(|a, b| b.points.cmp(&a.points));
    board
}

/// Find a participant by profile URL and report their standing.
///
/// The key must match a stored profile exactly; no trimming, case folding
/// or other normalization is applied on either side. An empty key never
/// matches, even when a roster row has an empty profile. When several rows
/// share a profile, the record comes from the first such row in source
/// order and the rank from the best-placed one on the board.
pub fn rank_of<'a>(snapshot: &'a Snapshot, profile: &str) -> Result<Standing<'a>, NotFoundError> {
    let not_found = || NotFoundError {
        profile: profile.to_string(),
    };

    if profile.is_empty() {
        return Err(not_found());
    }

    let participant = snapshot
        .participants()
        .iter()
        .find(|p| p.profile == profile)
        .ok_or_else(not_found)?;

    let board = leaderboard(snapshot);
    let position = board
        .iter()
        .position(|p| p.profile == profile)
        // The board is a permutation of the snapshot, so the profile found
        // above is present here too.
        .ok_or_else(not_found)?;

    Ok(Standing {
        participant,
        rank: position + 1,
        total: board.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_participant(name: &str, profile: &str, games: u32) -> Participant {
        Participant {
            name: name.to_string(),
            profile: profile.to_string(),
            milestone: String::new(),
            games,
            points: u64::from(games) * 100,
        }
    }

    fn sample_snapshot(rows: &[(&str, &str, u32)]) -> Snapshot {
        Snapshot::new(
            rows.iter()
                .map(|(name, profile, games)| sample_participant(name, profile, *games))
                .collect(),
        )
    }

    #[test]
    fn test_leaderboard_orders_by_points_desc() {
        let snapshot = sample_snapshot(&[("Alice", "A", 3), ("Bob", "B", 5), ("Cara", "C", 5)]);
        let board = leaderboard(&snapshot);

        let names: Vec<&str> = board.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Cara", "Alice"]);
    }

    #[test]
    fn test_ties_keep_source_order() {
        let snapshot = sample_snapshot(&[("Cara", "C", 5), ("Bob", "B", 5), ("Alice", "A", 5)]);
        let board = leaderboard(&snapshot);

        let names: Vec<&str> = board.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Cara", "Bob", "Alice"]);
    }

    #[test]
    fn test_leaderboard_is_permutation() {
        let snapshot = sample_snapshot(&[("A", "1", 0), ("B", "2", 9), ("C", "3", 4)]);
        let board = leaderboard(&snapshot);

        assert_eq!(board.len(), snapshot.participants().len());
        for participant in snapshot.participants() {
            assert!(board.iter().any(|p| p.profile == participant.profile));
        }
    }

    #[test]
    fn test_rank_of_each_participant() {
        let snapshot = sample_snapshot(&[("Alice", "A", 3), ("Bob", "B", 5), ("Cara", "C", 5)]);

        let bob = rank_of(&snapshot, "B").unwrap();
        assert_eq!(bob.rank, 1);
        assert_eq!(bob.total, 3);

        let cara = rank_of(&snapshot, "C").unwrap();
        assert_eq!(cara.rank, 2);

        let alice = rank_of(&snapshot, "A").unwrap();
        assert_eq!(alice.rank, 3);
        assert_eq!(alice.participant.points, 300);
    }

    #[test]
    fn test_unknown_profile_not_found() {
        let snapshot = sample_snapshot(&[("Alice", "A", 3)]);
        let err = rank_of(&snapshot, "Z").unwrap_err();
        assert_eq!(err.profile, "Z");
    }

    #[test]
    fn test_empty_profile_never_matches() {
        // A roster row with an empty profile exists, and still must not
        // match an empty lookup key.
        let snapshot = sample_snapshot(&[("Alice", "A", 3), ("Ghost", "", 9)]);
        assert!(rank_of(&snapshot, "").is_err());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let snapshot = sample_snapshot(&[("Alice", "https://example.com/A", 3)]);
        assert!(rank_of(&snapshot, "https://example.com/a").is_err());
        assert!(rank_of(&snapshot, "https://example.com/A").is_ok());
    }

    #[test]
    fn test_duplicate_profile_record_and_rank() {
        // Record comes from the first duplicate in source order, rank from
        // the best-placed duplicate on the board.
        let snapshot = sample_snapshot(&[("Dup early", "D", 1), ("Other", "O", 5), ("Dup late", "D", 9)]);

        let standing = rank_of(&snapshot, "D").unwrap();
        assert_eq!(standing.participant.name, "Dup early");
        assert_eq!(standing.participant.games, 1);
        assert_eq!(standing.rank, 1);
        assert_eq!(standing.total, 3);
    }

    #[test]
    fn test_zero_game_participants_count_in_total() {
        let snapshot = sample_snapshot(&[("Alice", "A", 0), ("Bob", "B", 2)]);
        let standing = rank_of(&snapshot, "A").unwrap();
        assert_eq!(standing.rank, 2);
        assert_eq!(standing.total, 2);
    }

    #[test]
    fn test_standing_json_field_names() {
        let snapshot = sample_snapshot(&[("Alice", "A", 3)]);
        let standing = rank_of(&snapshot, "A").unwrap();

        let json = serde_json::to_value(&standing).unwrap();
        assert_eq!(json["rank"], 1);
        assert_eq!(json["totalParticipants"], 1);
        assert_eq!(json["participant"]["name"], "Alice");
        assert_eq!(json["participant"]["profileUrl"], "A");
        assert_eq!(json["participant"]["arcadeGames"], 3);
    }
}
