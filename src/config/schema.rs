use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

/// Complete configuration tree.
///
/// Every section has a working default, so an empty file (or none at all)
/// yields a usable setup pointed at `data/participants.csv`.
///
/// Example YAML:
/// ```yaml
/// roster:
///   path: data/participants.csv
///   max_age: 30s
/// scoring:
///   points_per_game: 100
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default = "default_facilitators")]
    pub facilitators: Vec<Facilitator>,
    #[serde(default)]
    pub program: ProgramInfo,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: RosterConfig::default(),
            scoring: ScoringConfig::default(),
            search: SearchConfig::default(),
            facilitators: default_facilitators(),
            program: ProgramInfo::default(),
        }
    }
}

/// Where the roster CSV lives and how its columns are named.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RosterConfig {
    /// Path to the roster CSV (default: data/participants.csv)
    #[serde(default = "default_roster_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub columns: ColumnsConfig,
    /// How long a loaded roster may be served before re-reading, as a
    /// humantime string like "30s" or "5m". Unset means every command
    /// reads the file fresh.
    #[serde(default)]
    pub max_age: Option<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            path: default_roster_path(),
            columns: ColumnsConfig::default(),
            max_age: None,
        }
    }
}

impl RosterConfig {
    /// The staleness bound as a duration. A string that does not parse
    /// counts as unset here; `validate_config` rejects it up front.
    pub fn parsed_max_age(&self) -> Option<Duration> {
        self.max_age
            .as_deref()
            .and_then(|s| humantime::parse_duration(s).ok())
    }
}

fn default_roster_path() -> PathBuf {
    PathBuf::from("data/participants.csv")
}

/// Header names used to locate fields in the roster CSV.
///
/// Defaults match the export produced by the Arcade progress sheet. Column
/// order in the file never matters; only these names do.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ColumnsConfig {
    #[serde(default = "default_name_column")]
    pub name: String,
    #[serde(default = "default_profile_column")]
    pub profile: String,
    #[serde(default = "default_milestone_column")]
    pub milestone: String,
    #[serde(default = "default_games_column")]
    pub games: String,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            name: default_name_column(),
            profile: default_profile_column(),
            milestone: default_milestone_column(),
            games: default_games_column(),
        }
    }
}

fn default_name_column() -> String {
    "User Name".to_string()
}

fn default_profile_column() -> String {
    "Google Cloud Skills Boost Profile URL".to_string()
}

fn default_milestone_column() -> String {
    "Milestone Earned".to_string()
}

fn default_games_column() -> String {
    "# of Arcade Games Completed".to_string()
}

/// Vocabulary for the search resolver.
///
/// Triggers route a query to the facilitator answer, keywords to the
/// program description. Matching is by substring against the lowercased
/// query, so multi-word entries like "google cloud" work.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default = "default_facilitator_triggers")]
    pub facilitator_triggers: Vec<String>,
    #[serde(default = "default_program_keywords")]
    pub program_keywords: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            facilitator_triggers: default_facilitator_triggers(),
            program_keywords: default_program_keywords(),
        }
    }
}

fn default_facilitator_triggers() -> Vec<String> {
    vec![
        "facilitator".to_string(),
        "cohort".to_string(),
        "who".to_string(),
    ]
}

fn default_program_keywords() -> Vec<String> {
    vec![
        "arcade".to_string(),
        "program".to_string(),
        "google cloud".to_string(),
        "points".to_string(),
        "badges".to_string(),
        "milestone".to_string(),
    ]
}

/// A cohort facilitator, shown when a query asks who runs the program.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Facilitator {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub bio: String,
}

pub fn default_facilitators() -> Vec<Facilitator> {
    vec![
        Facilitator {
            name: "Rinesh Patil".to_string(),
            role: "Google Cloud Arcade Facilitator".to_string(),
            linkedin: "https://www.linkedin.com/in/rineshpatil/".to_string(),
            bio: "Rinesh Patil is a dedicated Google Cloud Arcade Facilitator helping \
                  participants navigate their cloud learning journey."
                .to_string(),
        },
        Facilitator {
            name: "Aishwary Gathe".to_string(),
            role: "Google Cloud Arcade Facilitator".to_string(),
            linkedin: "https://www.linkedin.com/in/aishwarygathe/".to_string(),
            bio: "Aishwary Gathe is an experienced Google Cloud Arcade Facilitator supporting \
                  participants in mastering cloud technologies."
                .to_string(),
        },
    ]
}

/// Program description, shown when a query asks about the program itself.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProgramInfo {
    #[serde(default = "default_program_name")]
    pub name: String,
    #[serde(default = "default_program_description")]
    pub description: String,
    #[serde(default = "default_program_duration")]
    pub duration: String,
    #[serde(default = "default_program_benefits")]
    pub benefits: Vec<String>,
}

impl Default for ProgramInfo {
    fn default() -> Self {
        Self {
            name: default_program_name(),
            description: default_program_description(),
            duration: default_program_duration(),
            benefits: default_program_benefits(),
        }
    }
}

fn default_program_name() -> String {
    "Google Cloud Arcade Facilitator Program 2025".to_string()
}

fn default_program_description() -> String {
    "The Arcade Facilitator Program is an always-on, no-cost gaming campaign where \
     technical practitioners of all levels can learn new cloud skills like computing, \
     application development, big data & AI/ML and earn digital badges & points to use \
     towards claiming swag prizes and Google Cloud goodies."
        .to_string()
}

fn default_program_duration() -> String {
    "April 1, 2025 - June 2, 2025".to_string()
}

fn default_program_benefits() -> Vec<String> {
    vec![
        "Earn digital badges for your professional profile".to_string(),
        "Gain hands-on experience with cloud technologies".to_string(),
        "Earn points redeemable for Google Cloud merchandise".to_string(),
        "Join a community of technical practitioners".to_string(),
    ]
}
