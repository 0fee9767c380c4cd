use crate::config::{Facilitator, ProgramInfo};
use crate::roster::{Participant, Snapshot};
use crate::search::Outcome;

/// One step of the resolution chain.
///
/// A stage either claims the query with an outcome or passes to the next
/// stage with `None`. Queries arrive already lowercased.
pub trait Stage: Send + Sync {
    fn evaluate<'a>(&'a self, query: &str, snapshot: &'a Snapshot) -> Option<Outcome<'a>>;
}

/// Matches participants whose name contains the query.
///
/// Claims the empty query too, returning the whole roster, so "show me
/// everyone" needs no special casing downstream.
pub struct ParticipantStage;

impl Stage for ParticipantStage {
    fn evaluate<'a>(&'a self, query: &str, snapshot: &'a Snapshot) -> Option<Outcome<'a>> {
        if query.is_empty() {
            return Some(Outcome::Participants(
                snapshot.participants().iter().collect(),
            ));
        }

        let matches: Vec<&Participant> = snapshot
            .participants()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(query))
            .collect();

        if matches.is_empty() {
            None
        } else {
            Some(Outcome::Participants(matches))
        }
    }
}

/// Answers "who runs this" questions when the query mentions a trigger word.
pub struct FacilitatorStage {
    triggers: Vec<String>,
    facilitators: Vec<Facilitator>,
}

impl FacilitatorStage {
    pub fn new(triggers: Vec<String>, facilitators: Vec<Facilitator>) -> Self {
        // Queries are matched lowercased, so hold the triggers lowercased.
        Self {
            triggers: triggers.into_iter().map(|t| t.to_lowercase()).collect(),
            facilitators,
        }
    }
}

impl Stage for FacilitatorStage {
    fn evaluate<'a>(&'a self, query: &str, _snapshot: &'a Snapshot) -> Option<Outcome<'a>> {
        if self.triggers.iter().any(|t| query.contains(t.as_str())) {
            Some(Outcome::Facilitators(&self.facilitators))
        } else {
            None
        }
    }
}

/// Describes the program itself when the query mentions a keyword.
pub struct ProgramStage {
    keywords: Vec<String>,
    program: ProgramInfo,
}

impl ProgramStage {
    pub fn new(keywords: Vec<String>, program: ProgramInfo) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
            program,
        }
    }
}

impl Stage for ProgramStage {
    fn evaluate<'a>(&'a self, query: &str, _snapshot: &'a Snapshot) -> Option<Outcome<'a>> {
        if self.keywords.iter().any(|k| query.contains(k.as_str())) {
            Some(Outcome::Program(&self.program))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_participant(name: &str) -> Participant {
        Participant {
            name: name.to_string(),
            profile: format!("https://example.com/{name}"),
            milestone: String::new(),
            games: 1,
            points: 100,
        }
    }

    fn sample_snapshot(names: &[&str]) -> Snapshot {
        Snapshot::new(names.iter().map(|n| sample_participant(n)).collect())
    }

    fn sample_facilitator(name: &str) -> Facilitator {
        Facilitator {
            name: name.to_string(),
            role: "Facilitator".to_string(),
            linkedin: String::new(),
            bio: String::new(),
        }
    }

    #[test]
    fn test_participant_stage_empty_query_returns_all() {
        let snapshot = sample_snapshot(&["Alice", "Bob"]);
        match ParticipantStage.evaluate("", &snapshot) {
            Some(Outcome::Participants(matches)) => assert_eq!(matches.len(), 2),
            other => panic!("expected participants, got {other:?}"),
        }
    }

    #[test]
    fn test_participant_stage_matches_substring_case_insensitively() {
        let snapshot = sample_snapshot(&["ALICE Johnson", "Bob"]);
        match ParticipantStage.evaluate("alice", &snapshot) {
            Some(Outcome::Participants(matches)) => {
                assert_eq!(matches.len(), 1);
                assert_eq!(matches[0].name, "ALICE Johnson");
            }
            other => panic!("expected participants, got {other:?}"),
        }
    }

    #[test]
    fn test_participant_stage_preserves_source_order() {
        let snapshot = sample_snapshot(&["Cara Lin", "Alice Lin", "Bob"]);
        match ParticipantStage.evaluate("lin", &snapshot) {
            Some(Outcome::Participants(matches)) => {
                let names: Vec<&str> = matches.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names, vec!["Cara Lin", "Alice Lin"]);
            }
            other => panic!("expected participants, got {other:?}"),
        }
    }

    #[test]
    fn test_participant_stage_passes_when_nothing_matches() {
        let snapshot = sample_snapshot(&["Alice"]);
        assert!(ParticipantStage.evaluate("zzz", &snapshot).is_none());
    }

    #[test]
    fn test_facilitator_stage_matches_trigger_substring() {
        let stage = FacilitatorStage::new(
            vec!["facilitator".to_string()],
            vec![sample_facilitator("Rin")],
        );
        let snapshot = sample_snapshot(&[]);

        match stage.evaluate("who is the facilitator here", &snapshot) {
            Some(Outcome::Facilitators(facilitators)) => {
                assert_eq!(facilitators[0].name, "Rin");
            }
            other => panic!("expected facilitators, got {other:?}"),
        }
    }

    #[test]
    fn test_facilitator_stage_lowercases_triggers_at_build() {
        let stage = FacilitatorStage::new(vec!["WHO".to_string()], vec![sample_facilitator("Rin")]);
        let snapshot = sample_snapshot(&[]);

        assert!(stage.evaluate("who runs this", &snapshot).is_some());
    }

    #[test]
    fn test_facilitator_stage_passes_without_trigger() {
        let stage = FacilitatorStage::new(
            vec!["facilitator".to_string()],
            vec![sample_facilitator("Rin")],
        );
        let snapshot = sample_snapshot(&[]);

        assert!(stage.evaluate("leaderboard please", &snapshot).is_none());
    }

    #[test]
    fn test_program_stage_matches_keyword() {
        let stage = ProgramStage::new(vec!["arcade".to_string()], ProgramInfo::default());
        let snapshot = sample_snapshot(&[]);

        match stage.evaluate("tell me about the arcade", &snapshot) {
            Some(Outcome::Program(program)) => assert!(!program.name.is_empty()),
            other => panic!("expected program, got {other:?}"),
        }
    }

    #[test]
    fn test_program_stage_passes_without_keyword() {
        let stage = ProgramStage::new(vec!["arcade".to_string()], ProgramInfo::default());
        let snapshot = sample_snapshot(&[]);

        assert!(stage.evaluate("hello", &snapshot).is_none());
    }
}
