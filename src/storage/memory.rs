use crate::model::snapshot::MemberSnapshot;
use crate::storage::{RosterStore, StoreError};

/// Keeps the roster in memory. Counts writes and can be told to fail them.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    members: Vec<MemberSnapshot>,
    saves: usize,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<MemberSnapshot>) -> Self {
        Self {
            members,
            ..Self::default()
        }
    }

    /// Last saved (or seeded) roster.
    pub fn members(&self) -> &[MemberSnapshot] {
        &self.members
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }
}

impl RosterStore for MemoryStore {
    fn load(&self) -> Result<Vec<MemberSnapshot>, StoreError> {
        Ok(self.members.clone())
    }

    fn save(&mut self, members: &[MemberSnapshot]) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Unavailable("memory store is read-only".into()));
        }
        self.members = members.to_vec();
        self.saves += 1;
        Ok(())
    }
}
