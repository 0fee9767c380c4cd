use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use log::debug;

use crate::config::{ColumnsConfig, Config};
use crate::error::LoadError;
use crate::roster::loader;
use crate::roster::types::Snapshot;
use crate::scoring::ScoringConfig;

/// Where the roster lives and how to interpret it.
#[derive(Debug, Clone)]
pub struct RosterSource {
    pub path: PathBuf,
    pub columns: ColumnsConfig,
    pub scoring: ScoringConfig,
}

impl RosterSource {
    pub fn from_config(config: &Config) -> Self {
        Self {
            path: config.roster.path.clone(),
            columns: config.roster.columns.clone(),
            scoring: config.scoring.clone(),
        }
    }

    fn load(&self) -> Result<Snapshot, LoadError> {
        loader::load_file(&self.path, &self.columns, &self.scoring).map(Snapshot::new)
    }
}

/// Publishes roster snapshots to concurrent readers.
///
/// A reader gets an `Arc` to one immutable snapshot and keeps it for the
/// whole request; a refresh builds the replacement off to the side and swaps
/// it in atomically, so nobody ever observes a half-loaded roster. Readers
/// holding the old `Arc` finish against the data they started with.
///
/// Without a `max_age` every call reloads from the source. With one, a
/// snapshot younger than the bound is served as-is, so results can lag the
/// file by at most that duration.
pub struct SnapshotStore {
    source: RosterSource,
    max_age: Option<Duration>,
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl SnapshotStore {
    pub fn new(source: RosterSource, max_age: Option<Duration>) -> Self {
        Self {
            source,
            max_age,
            current: RwLock::new(None),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(RosterSource::from_config(config), config.roster.parsed_max_age())
    }

    /// A snapshot no staler than the configured bound, loading if needed.
    pub fn snapshot(&self) -> Result<Arc<Snapshot>, LoadError> {
        if let Some(snapshot) = self.reusable() {
            debug!("Reusing roster snapshot loaded {}s ago", snapshot.age().num_seconds());
            return Ok(snapshot);
        }
        self.refresh()
    }

    /// Reload from the source and publish the result. Concurrent refreshes
    /// are safe; whichever finishes last wins.
    pub fn refresh(&self) -> Result<Arc<Snapshot>, LoadError> {
        // Load outside the lock so readers keep the old snapshot available
        // throughout, and a failed load leaves it in place.
        let snapshot = Arc::new(self.source.load()?);

        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *current = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    fn reusable(&self) -> Option<Arc<Snapshot>> {
        let max_age = self.max_age?;
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        current
            .as_ref()
            .filter(|snapshot| {
                // A negative age means the clock went backwards; reload.
                snapshot
                    .age()
                    .to_std()
                    .map_or(false, |age| age <= max_age)
            })
            .map(Arc::clone)
    }
}
