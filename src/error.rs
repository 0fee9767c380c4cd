use std::path::PathBuf;

use thiserror::Error;

/// Hard failures while building a roster snapshot.
///
/// Any of these aborts the whole load; a partial participant set is never
/// published. Per-row problems that degrade to a default value (a blank
/// name, a non-numeric games count) are not errors.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read roster at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Roster source has no header row")]
    NoHeader,

    #[error("Column {name:?} not found in header (columns present: {found:?})")]
    MissingColumn { name: String, found: Vec<String> },

    #[error("Malformed roster data: {source}")]
    Malformed {
        #[source]
        source: csv::Error,
    },
}

/// A well-formed lookup key that matched no participant.
///
/// Recoverable at the caller boundary: the rank view presents this as
/// "not found", never as a system fault.
#[derive(Debug, Error)]
#[error("No participant with profile URL {profile:?}")]
pub struct NotFoundError {
    /// The key that was looked up, exactly as supplied.
    pub profile: String,
}
