pub mod stages;

pub use stages::{FacilitatorStage, ParticipantStage, ProgramStage, Stage};

use crate::config::{Config, Facilitator, ProgramInfo, SearchConfig};
use crate::roster::{Participant, Snapshot};

/// What a query resolved to.
///
/// Exactly one of these comes back per query; a query never produces a
/// mixed answer.
#[derive(Debug, PartialEq)]
pub enum Outcome<'a> {
    /// Roster rows whose name matched, in source order.
    Participants(Vec<&'a Participant>),
    Facilitators(&'a [Facilitator]),
    Program(&'a ProgramInfo),
    NoMatch,
}

/// Resolves free-text queries by running them through a fixed stage chain.
///
/// Precedence is participants, then facilitators, then the program
/// description; the first stage that claims the query answers it. The
/// query is lowercased once here and never trimmed, so leading or
/// trailing whitespace takes part in matching.
pub struct Resolver {
    stages: Vec<Box<dyn Stage>>,
}

impl Resolver {
    pub fn new(
        vocabulary: SearchConfig,
        facilitators: Vec<Facilitator>,
        program: ProgramInfo,
    ) -> Self {
        Self {
            stages: vec![
                Box::new(ParticipantStage),
                Box::new(FacilitatorStage::new(
                    vocabulary.facilitator_triggers,
                    facilitators,
                )),
                Box::new(ProgramStage::new(vocabulary.program_keywords, program)),
            ],
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.search.clone(),
            config.facilitators.clone(),
            config.program.clone(),
        )
    }

    pub fn resolve<'a>(&'a self, query: &str, snapshot: &'a Snapshot) -> Outcome<'a> {
        let query = query.to_lowercase();
        for stage in &self.stages {
            if let Some(outcome) = stage.evaluate(&query, snapshot) {
                return outcome;
            }
        }
        Outcome::NoMatch
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
            games: 2,
            points: 200,
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

    fn sample_resolver() -> Resolver {
        Resolver::new(
            SearchConfig::default(),
            vec![sample_facilitator("Rin")],
            ProgramInfo::default(),
        )
    }

    fn matched_names(outcome: &Outcome) -> Vec<String> {
        match outcome {
            Outcome::Participants(matches) => {
                matches.iter().map(|p| p.name.clone()).collect()
            }
            other => panic!("expected participants, got {other:?}"),
        }
    }

    #[test]
    fn test_participants_take_precedence_over_triggers() {
        let resolver = sample_resolver();
        // "facilitator" is a trigger word, but a name matches it first.
        let snapshot = sample_snapshot(&["Facilitator Fan Club", "Bob"]);

        let outcome = resolver.resolve("facilitator", &snapshot);
        assert_eq!(matched_names(&outcome), vec!["Facilitator Fan Club"]);
    }

    #[test]
    fn test_facilitator_trigger_when_no_name_matches() {
        let resolver = sample_resolver();
        let snapshot = sample_snapshot(&["Alice", "Bob"]);

        match resolver.resolve("who is in charge", &snapshot) {
            Outcome::Facilitators(facilitators) => assert_eq!(facilitators[0].name, "Rin"),
            other => panic!("expected facilitators, got {other:?}"),
        }
    }

    #[test]
    fn test_facilitators_take_precedence_over_keywords() {
        let resolver = sample_resolver();
        let snapshot = sample_snapshot(&["Alice"]);

        // Contains both a trigger ("who") and a keyword ("arcade").
        match resolver.resolve("who runs the arcade", &snapshot) {
            Outcome::Facilitators(_) => {}
            other => panic!("expected facilitators, got {other:?}"),
        }
    }

    #[test]
    fn test_program_keyword_fallthrough() {
        let resolver = sample_resolver();
        let snapshot = sample_snapshot(&["Alice"]);

        match resolver.resolve("how do points work", &snapshot) {
            Outcome::Program(program) => assert!(program.name.contains("Arcade")),
            other => panic!("expected program, got {other:?}"),
        }
    }

    #[test]
    fn test_no_stage_claims_gibberish() {
        let resolver = sample_resolver();
        let snapshot = sample_snapshot(&["Alice"]);

        assert_eq!(resolver.resolve("xyzzy", &snapshot), Outcome::NoMatch);
    }

    #[test]
    fn test_empty_query_lists_everyone() {
        let resolver = sample_resolver();
        let snapshot = sample_snapshot(&["Alice", "Bob", "Cara"]);

        let outcome = resolver.resolve("", &snapshot);
        assert_eq!(matched_names(&outcome), vec!["Alice", "Bob", "Cara"]);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let resolver = sample_resolver();
        let snapshot = sample_snapshot(&["Ada Lovelace", "Bob"]);

        // A lone space is a real query and matches names containing one.
        let outcome = resolver.resolve(" ", &snapshot);
        assert_eq!(matched_names(&outcome), vec!["Ada Lovelace"]);
    }

    #[test]
    fn test_untrimmed_query_still_reaches_keywords() {
        let resolver = sample_resolver();
        let snapshot = sample_snapshot(&["Alice"]);

        match resolver.resolve("  arcade  ", &snapshot) {
            Outcome::Program(_) => {}
            other => panic!("expected program, got {other:?}"),
        }
    }

    #[test]
    fn test_query_lowercased_before_stages() {
        let resolver = sample_resolver();
        let snapshot = sample_snapshot(&["Alice"]);

        match resolver.resolve("FACILITATOR?", &snapshot) {
            Outcome::Facilitators(_) => {}
            other => panic!("expected facilitators, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_vocabulary_replaces_defaults() {
        let vocabulary = SearchConfig {
            facilitator_triggers: vec!["mentor".to_string()],
            program_keywords: vec!["quest".to_string()],
        };
        let resolver = Resolver::new(
            vocabulary,
            vec![sample_facilitator("Rin")],
            ProgramInfo::default(),
        );
        let snapshot = sample_snapshot(&["Alice"]);

        assert!(matches!(
            resolver.resolve("my mentor", &snapshot),
            Outcome::Facilitators(_)
        ));
        assert!(matches!(
            resolver.resolve("the quest", &snapshot),
            Outcome::Program(_)
        ));
        // The stock trigger no longer does anything.
        assert_eq!(resolver.resolve("facilitator", &snapshot), Outcome::NoMatch);
    }
}
