//! Where the roster lives between runs.
//!
//! The engine only ever hands over or asks for the full list of snapshots;
//! there are no partial writes.

mod json_file;
mod memory;

pub use json_file::{default_roster_path, JsonFileStore, ROSTER_PATH_ENV};
pub use memory::MemoryStore;

use std::path::PathBuf;

use thiserror::Error;

use crate::model::snapshot::MemberSnapshot;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed roster data in {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub trait RosterStore {
    /// Every stored member, possibly none.
    fn load(&self) -> Result<Vec<MemberSnapshot>, StoreError>;

    /// Replaces the stored roster with `members`.
    fn save(&mut self, members: &[MemberSnapshot]) -> Result<(), StoreError>;
}
