use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::model::snapshot::MemberSnapshot;
use crate::storage::{RosterStore, StoreError};

/// Overrides every other roster location when set.
pub const ROSTER_PATH_ENV: &str = "EXECUTIVE_ATTENDANCE_ROSTER";

/// `members.json` under the platform data dir, or the working dir without one.
pub fn default_roster_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("executive_attendance");
    path.push("members.json");
    path
}

/// Roster stored as a pretty-printed JSON array of member snapshots.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RosterStore for JsonFileStore {
    fn load(&self) -> Result<Vec<MemberSnapshot>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no roster at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&text).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, members: &[MemberSnapshot]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(members).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        log::debug!("saved {} members to {}", members.len(), self.path.display());
        Ok(())
    }
}
