//! Know where your cohort stands.
//!
//! Loads a Google Cloud Arcade roster CSV, scores each participant from
//! their completed games, and answers leaderboard, rank and free-text
//! queries over one immutable snapshot at a time.

pub mod browser;
pub mod config;
pub mod error;
pub mod output;
pub mod ranking;
pub mod roster;
pub mod scoring;
pub mod search;
