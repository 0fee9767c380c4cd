pub mod loader;
pub mod store;
pub mod types;

pub use loader::{load_file, read_roster};
pub use store::{RosterSource, SnapshotStore};
pub use types::{Participant, Snapshot};
