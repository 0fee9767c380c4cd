use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of the cohort roster.
///
/// JSON field names follow the cohort site's API, so `--json` output can be
/// consumed by anything that already talks to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub name: String,
    /// Skills Boost profile URL; the canonical lookup key. Not guaranteed
    /// unique or present. An empty value never matches a lookup.
    #[serde(rename = "profileUrl")]
    pub profile: String,
    /// Free-text milestone label, may be empty.
    pub milestone: String,
    /// Completed arcade games. Unparseable source values arrive here as 0.
    #[serde(rename = "arcadeGames")]
    pub games: u32,
    /// Derived at load time from `games`; see `scoring::points`.
    pub points: u64,
}

/// An immutable, self-consistent view of the roster.
#[derive(Debug)]
pub struct Snapshot {
    participants: Vec<Participant>,
    loaded_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self {
            participants,
            loaded_at: Utc::now(),
        }
    }

    /// All records in source order. Source order is the leaderboard
    /// tie-breaker, so this slice is never reordered.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// How long ago this snapshot was loaded.
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.loaded_at
    }
}
