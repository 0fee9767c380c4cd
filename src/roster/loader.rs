use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use log::{debug, warn};

use crate::config::ColumnsConfig;
use crate::error::LoadError;
use crate::roster::types::Participant;
use crate::scoring::{self, ScoringConfig};

/// Read a CSV roster into participants, in source order.
///
/// All-or-nothing: any structural failure (unreadable data, missing column)
/// aborts the load and no partial set is returned. Per-field degradation is
/// allowed instead: a missing or short cell becomes an empty string, an
/// unparseable games count becomes 0. Rows are never dropped for missing
/// identifying fields.
///
/// Columns are found by header name, so their order in the file does not
/// matter. Values are stored exactly as they appear; lookups later match
/// them verbatim.
pub fn read_roster<R: Read>(
    reader: R,
    columns: &ColumnsConfig,
    scoring: &ScoringConfig,
) -> Result<Vec<Participant>, LoadError> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| LoadError::Malformed { source })?
        .clone();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::NoHeader);
    }

    let idx = resolve_columns(&headers, columns)?;

    let mut participants = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|source| LoadError::Malformed { source })?;

        // The parser drops fully blank lines itself; a whitespace-only line
        // still arrives as a single whitespace cell and is skipped here.
        if record.len() == 1 && record.get(0).is_some_and(|cell| cell.trim().is_empty()) {
            continue;
        }

        let field = |i: usize| record.get(i).unwrap_or("").to_string();
        let games = parse_games(record.get(idx.games).unwrap_or(""));

        participants.push(Participant {
            name: field(idx.name),
            profile: field(idx.profile),
            milestone: field(idx.milestone),
            games,
            points: scoring::points(games, scoring),
        });
    }

    debug!("Loaded {} participants from roster", participants.len());
    Ok(participants)
}

/// Read a roster from a file on disk.
pub fn load_file(
    path: &Path,
    columns: &ColumnsConfig,
    scoring: &ScoringConfig,
) -> Result<Vec<Participant>, LoadError> {
    debug!("Reading roster from {}", path.display());
    let file = File::open(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_roster(file, columns, scoring)
}

struct ColumnIndices {
    name: usize,
    profile: usize,
    milestone: usize,
    games: usize,
}

fn resolve_columns(
    headers: &csv::StringRecord,
    columns: &ColumnsConfig,
) -> Result<ColumnIndices, LoadError> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| LoadError::MissingColumn {
                name: name.to_string(),
                found: headers.iter().map(str::to_string).collect(),
            })
    };

    Ok(ColumnIndices {
        name: find(&columns.name)?,
        profile: find(&columns.profile)?,
        milestone: find(&columns.milestone)?,
        games: find(&columns.games)?,
    })
}

/// Parse a completed-games cell. Anything that is not a non-negative
/// integer counts as 0; the row itself is kept.
fn parse_games(cell: &str) -> u32 {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<u32>() {
        Ok(games) => games,
        Err(_) => {
            warn!("Unparseable games count {cell:?}, treating as 0");
            0
        }
    }
}
