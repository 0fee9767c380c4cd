use serde::{Deserialize, Serialize};

/// Points awarded per completed arcade game.
pub const POINTS_PER_GAME: u64 = 100;

/// Scoring configuration.
///
/// One knob: how many points a completed game is worth. Leaderboard order,
/// rank lookup and the JSON output all derive from this single multiplier.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   points_per_game: 100
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points per completed game (default: 100)
    #[serde(default = "default_points_per_game")]
    pub points_per_game: u64,
}

fn default_points_per_game() -> u64 {
    POINTS_PER_GAME
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_game: POINTS_PER_GAME,
        }
    }
}

/// Compute the points for a completed-game count.
///
/// Pure and total: equal inputs always yield equal outputs, within a request
/// and across requests against the same snapshot. The loader normalizes
/// malformed counts to 0 before this is called, so 0 games is the floor, and
/// `validate_scoring` caps the multiplier at `u32::MAX`, so the widened
/// product cannot overflow.
pub fn points(games: u32, config: &ScoringConfig) -> u64 {
    u64::from(games) * config.points_per_game
}

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.points_per_game == 0 {
        errors.push(
            "scoring.points_per_game: must be positive (0 ties every participant)".to_string(),
        );
    }

    // games is u32; capping the multiplier at u32::MAX keeps the product in u64.
    if config.points_per_game > u64::from(u32::MAX) {
        errors.push(format!(
            "scoring.points_per_game: must be at most {} (larger multipliers overflow the score)",
            u32::MAX
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
