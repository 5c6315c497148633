use thiserror::Error;

use crate::storage::StoreError;

/// Conditions an operation reports instead of mutating the roster.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("{name} is already a member")]
    DuplicateMember { name: String },

    #[error("{name} is not a member")]
    NotAMember { name: String },

    #[error("{name} is already a member, choose a different name")]
    NameCollision { name: String },

    #[error("{name} is blacklisted, reset the blacklist before recording attendance")]
    BlacklistedAttendanceBlocked { name: String },

    #[error("{field} must not be empty")]
    BlankField { field: &'static str },

    #[error("failed to persist roster: {0}")]
    Storage(#[from] StoreError),
}

impl RosterError {
    /// The member name the condition is about, when there is one.
    pub fn offending_name(&self) -> Option<&str> {
        match self {
            RosterError::DuplicateMember { name }
            | RosterError::NotAMember { name }
            | RosterError::NameCollision { name }
            | RosterError::BlacklistedAttendanceBlocked { name } => Some(name),
            RosterError::BlankField { .. } | RosterError::Storage(_) => None,
        }
    }
}

/// Per-member results of one attendance batch.
#[derive(Debug, Default)]
pub struct AttendanceReport {
    pub marked_present: Vec<String>,
    pub marked_absent: Vec<String>,
    /// Members whose absence in this batch put them on the blacklist.
    pub newly_blacklisted: Vec<String>,
    /// Presence refused because the member is blacklisted.
    pub blocked: Vec<RosterError>,
    /// Selected names with no matching member.
    pub skipped: Vec<String>,
}
