use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde_json::{json, Value};
use terminal_size::{terminal_size, Width};

use crate::config::{Facilitator, ProgramInfo};
use crate::ranking::Standing;
use crate::roster::Participant;
use crate::search::Outcome;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn display_milestone(milestone: &str) -> String {
    if milestone.is_empty() {
        "-".to_string()
    } else {
        milestone.to_string()
    }
}

/// Format the board as a ranked table with columns: Rank, Points, Games, Name, Milestone
/// No headers (minimal format)
/// Rank column: 3 chars (fits "99."), right-aligned
/// Points column is right-aligned, 6 chars wide (fits "999900")
pub fn format_leaderboard(board: &[&Participant], use_colors: bool) -> String {
    if board.is_empty() {
        return "No participants found.".to_string();
    }

    let term_width = get_terminal_width();

    // Rank column: 3 chars + 1 space = 4
    // Points column: 6 chars + 2 spaces = 8
    // Games column: 3 chars + 2 spaces = 5
    // Leave rest for the name
    let rank_width = 3;
    let points_width = 6;
    let games_width = 3;
    let separator = "  ";

    board
        .iter()
        .enumerate()
        .map(|(idx, participant)| {
            // 1-based rank, right-aligned with trailing dot
            let rank_str = format!("{:>2}.", idx + 1);
            let points_padded = format!("{:>width$}", participant.points, width = points_width);
            let games_padded = format!("{:>width$}", participant.games, width = games_width);
            let milestone = display_milestone(&participant.milestone);

            // Calculate available name width (accounting for rank column)
            let fixed_width = rank_width
                + 1
                + points_width
                + games_width
                + separator.len() * 3
                + milestone.chars().count();

            let name = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_name(&participant.name, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_name(&participant.name, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                participant.name.clone()
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    rank_str.dimmed(),
                    points_padded.bold(),
                    separator,
                    games_padded,
                    separator,
                    name,
                    separator,
                    milestone.cyan()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    rank_str,
                    points_padded,
                    separator,
                    games_padded,
                    separator,
                    name,
                    separator,
                    milestone
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one participant's standing with detailed multi-line output
pub fn format_standing(standing: &Standing, use_colors: bool) -> String {
    let participant = standing.participant;
    let milestone = display_milestone(&participant.milestone);

    if use_colors {
        format!(
            "{}\n  Rank: {} of {}\n  Points: {}\n  Games completed: {}\n  Milestone: {}\n  Profile: {}",
            participant.name.bold(),
            standing.rank,
            standing.total,
            participant.points.bold(),
            participant.games,
            milestone.cyan(),
            participant.profile.underline()
        )
    } else {
        format!(
            "{}\n  Rank: {} of {}\n  Points: {}\n  Games completed: {}\n  Milestone: {}\n  Profile: {}",
            participant.name,
            standing.rank,
            standing.total,
            participant.points,
            participant.games,
            milestone,
            participant.profile
        )
    }
}

/// Format a query result for the terminal
pub fn format_outcome(outcome: &Outcome, use_colors: bool) -> String {
    match outcome {
        Outcome::Participants(matches) => format_participant_list(matches, use_colors),
        Outcome::Facilitators(facilitators) => format_facilitators(facilitators, use_colors),
        Outcome::Program(program) => format_program(program, use_colors),
        Outcome::NoMatch => "No results.".to_string(),
    }
}

/// Format matched participants as one line each
/// Format: "{name} | {milestone} | {points} pts | {profile}"
fn format_participant_list(participants: &[&Participant], use_colors: bool) -> String {
    if participants.is_empty() {
        return "No participants found.".to_string();
    }

    participants
        .iter()
        .map(|p| format_participant_line(p, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_participant_line(participant: &Participant, use_colors: bool) -> String {
    let milestone = display_milestone(&participant.milestone);
    if use_colors {
        format!(
            "{} | {} | {} pts | {}",
            participant.name.bold(),
            milestone.cyan(),
            participant.points,
            participant.profile.underline()
        )
    } else {
        format!(
            "{} | {} | {} pts | {}",
            participant.name, milestone, participant.points, participant.profile
        )
    }
}

fn format_facilitators(facilitators: &[Facilitator], use_colors: bool) -> String {
    if facilitators.is_empty() {
        return "No facilitators configured.".to_string();
    }

    facilitators
        .iter()
        .map(|f| {
            if use_colors {
                format!(
                    "{} ({})\n  {}\n  {}",
                    f.name.bold(),
                    f.role.cyan(),
                    f.bio,
                    f.linkedin.underline()
                )
            } else {
                format!("{} ({})\n  {}\n  {}", f.name, f.role, f.bio, f.linkedin)
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_program(program: &ProgramInfo, use_colors: bool) -> String {
    let mut out = if use_colors {
        format!(
            "{} ({})\n{}",
            program.name.bold(),
            program.duration,
            program.description
        )
    } else {
        format!("{} ({})\n{}", program.name, program.duration, program.description)
    };

    if !program.benefits.is_empty() {
        out.push_str("\nBenefits:");
        for benefit in &program.benefits {
            out.push_str(&format!("\n  - {}", benefit));
        }
    }
    out
}

/// The board as a JSON payload: `{"participants": [...]}`
pub fn leaderboard_json(board: &[&Participant]) -> Value {
    json!({ "participants": board })
}

/// A standing as a JSON payload with `participant`, `rank` and
/// `totalParticipants` fields.
pub fn standing_json(standing: &Standing) -> Value {
    json!(standing)
}

/// A query result as a JSON payload.
///
/// Carries all sections with the unclaimed ones null, plus the query
/// echoed back. The empty query is the browse-all case and answers with
/// the bare participant list instead.
pub fn outcome_json(query: &str, outcome: &Outcome) -> Value {
    if query.is_empty() {
        if let Outcome::Participants(matches) = outcome {
            return json!({ "participants": matches });
        }
    }

    match outcome {
        Outcome::Participants(matches) => json!({
            "participants": matches,
            "programInfo": null,
            "facilitatorInfo": null,
            "query": query,
        }),
        Outcome::Facilitators(facilitators) => json!({
            "participants": [],
            "programInfo": null,
            "facilitatorInfo": { "facilitators": facilitators },
            "query": query,
        }),
        Outcome::Program(program) => json!({
            "participants": [],
            "programInfo": program,
            "facilitatorInfo": null,
            "query": query,
        }),
        Outcome::NoMatch => json!({
            "participants": [],
            "programInfo": null,
            "facilitatorInfo": null,
            "query": query,
        }),
    }
}

/// Render a JSON payload for stdout.
pub fn render_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).expect("JSON value always serializes")
}
