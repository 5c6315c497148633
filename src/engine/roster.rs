use std::collections::{HashMap, HashSet};

use crate::model::member::{display_order, ExecutiveMember};
use crate::model::outcome::{AttendanceReport, RosterError};
use crate::model::snapshot::MemberSnapshot;
use crate::storage::{RosterStore, StoreError};

type Members = HashMap<String, ExecutiveMember>;

/// Owns the roster and applies every membership and attendance change.
///
/// Each mutation runs on a working copy that only replaces the live roster
/// once the store has accepted it, so a failed write changes nothing.
pub struct RosterEngine<S: RosterStore> {
    members: Members,
    store: S,
}

impl<S: RosterStore> RosterEngine<S> {
    /// Loads whatever the store holds and builds the roster from it.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let snapshots = store.load()?;
        let mut members = HashMap::with_capacity(snapshots.len());

        for snapshot in snapshots {
            let member = ExecutiveMember::from(snapshot);
            if members.contains_key(member.name()) {
                log::warn!("duplicate stored member '{}', keeping the later record", member.name());
            }
            members.insert(member.name().to_string(), member);
        }

        log::info!("roster opened with {} members", members.len());
        Ok(Self { members, store })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ExecutiveMember> {
        self.members.get(name)
    }

    pub fn add(&mut self, name: &str, post: &str) -> Result<(), RosterError> {
        require("name", name)?;
        require("post", post)?;

        if self.members.contains_key(name) {
            return Err(RosterError::DuplicateMember { name: name.to_string() });
        }

        let mut next = self.members.clone();
        next.insert(name.to_string(), ExecutiveMember::new(name, post));
        self.commit(next)?;

        log::info!("added member '{}' ({})", name, post);
        Ok(())
    }

    /// Marks every selected member present or absent, then saves once.
    ///
    /// Unknown names are skipped. Presence for a blacklisted member is
    /// refused and reported without touching that member's counters; the
    /// rest of the batch still applies.
    pub fn record_attendance<I, N>(
        &mut self,
        selected: I,
        is_present: bool,
    ) -> Result<AttendanceReport, RosterError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut next = self.members.clone();
        let mut report = AttendanceReport::default();
        let mut seen = HashSet::new();

        for name in selected {
            let name = name.as_ref();
            if !seen.insert(name.to_string()) {
                continue;
            }

            let Some(member) = next.get_mut(name) else {
                log::debug!("attendance skipped unknown name '{}'", name);
                report.skipped.push(name.to_string());
                continue;
            };

            if is_present {
                if member.is_blacklisted() {
                    log::warn!("presence refused for blacklisted member '{}'", name);
                    report
                        .blocked
                        .push(RosterError::BlacklistedAttendanceBlocked { name: name.to_string() });
                    continue;
                }
                member.record_presence();
                log::debug!("'{}' present ({} days)", name, member.total_present_days());
                report.marked_present.push(name.to_string());
            } else {
                member.record_absence();
                log::debug!(
                    "'{}' absent ({} in a row)",
                    name,
                    member.consecutive_absent_days()
                );
                report.marked_absent.push(name.to_string());

                if member.escalate_if_due() {
                    log::info!("'{}' blacklisted after {} consecutive absences", name, member.consecutive_absent_days());
                    report.newly_blacklisted.push(name.to_string());
                }
            }
        }

        self.commit(next)?;
        Ok(report)
    }

    pub fn reset_blacklist(&mut self, name: &str) -> Result<(), RosterError> {
        let mut next = self.members.clone();
        let Some(member) = next.get_mut(name) else {
            return Err(not_a_member(name));
        };

        member.lift_blacklist();
        self.commit(next)?;

        log::info!("blacklist reset for '{}'", name);
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> Result<(), RosterError> {
        if !self.members.contains_key(name) {
            return Err(not_a_member(name));
        }

        let mut next = self.members.clone();
        next.remove(name);
        self.commit(next)?;

        log::info!("removed member '{}'", name);
        Ok(())
    }

    /// Renames and/or re-posts a member, keeping every counter and the
    /// blacklist flag. `old_name == new_name` is a post-only edit.
    pub fn edit(&mut self, old_name: &str, new_name: &str, new_post: &str) -> Result<(), RosterError> {
        if !self.members.contains_key(old_name) {
            return Err(not_a_member(old_name));
        }
        require("name", new_name)?;
        require("post", new_post)?;

        if old_name != new_name && self.members.contains_key(new_name) {
            return Err(RosterError::NameCollision { name: new_name.to_string() });
        }

        let mut next = self.members.clone();
        let Some(mut member) = next.remove(old_name) else {
            return Err(not_a_member(old_name));
        };
        member.rename(new_name.to_string(), new_post.to_string());
        next.insert(new_name.to_string(), member);
        self.commit(next)?;

        log::info!("member '{}' updated to '{}' ({})", old_name, new_name, new_post);
        Ok(())
    }

    /// All members in display order.
    pub fn all(&self) -> Vec<ExecutiveMember> {
        let mut list: Vec<ExecutiveMember> = self.members.values().cloned().collect();
        list.sort_by(|a, b| display_order(a.name(), b.name()));
        list
    }

    pub fn blacklisted(&self) -> Vec<ExecutiveMember> {
        self.all().into_iter().filter(|m| m.is_blacklisted()).collect()
    }

    /// Members whose name contains `needle`, case-sensitively.
    /// An empty needle matches everyone.
    pub fn search(&self, needle: &str) -> Vec<ExecutiveMember> {
        self.all()
            .into_iter()
            .filter(|m| m.name().contains(needle))
            .collect()
    }

    /// The roster as the store sees it, in display order.
    pub fn snapshots(&self) -> Vec<MemberSnapshot> {
        snapshots_of(&self.members)
    }

    fn commit(&mut self, next: Members) -> Result<(), RosterError> {
        if let Err(e) = self.store.save(&snapshots_of(&next)) {
            log::error!("roster save failed, change discarded: {}", e);
            return Err(e.into());
        }
        self.members = next;
        Ok(())
    }
}

fn snapshots_of(members: &Members) -> Vec<MemberSnapshot> {
    let mut list: Vec<&ExecutiveMember> = members.values().collect();
    list.sort_by(|a, b| display_order(a.name(), b.name()));
    list.into_iter().map(MemberSnapshot::from).collect()
}

fn require(field: &'static str, value: &str) -> Result<(), RosterError> {
    if value.trim().is_empty() {
        return Err(RosterError::BlankField { field });
    }
    Ok(())
}

fn not_a_member(name: &str) -> RosterError {
    RosterError::NotAMember { name: name.to_string() }
}
