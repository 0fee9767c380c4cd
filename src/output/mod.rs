pub mod formatter;

pub use formatter::{
    format_leaderboard, format_outcome, format_standing, leaderboard_json, outcome_json,
    render_json, should_use_colors, standing_json,
};
