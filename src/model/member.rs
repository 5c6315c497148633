use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::Collator;

/// Consecutive absences that put a member on the blacklist.
pub const BLACKLIST_THRESHOLD: u32 = 3;

/// A tracked executive: identity plus running attendance counters.
///
/// Counters only move through the mutators below, which the roster engine
/// calls. Everyone else sees clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutiveMember {
    name: String,
    post: String,
    total_present_days: u32,
    total_absent_days: u32,
    /// Mirrors `total_absent_days`; kept because the stored format carries both.
    absent_count: u32,
    consecutive_absent_days: u32,
    is_blacklisted: bool,
}

impl ExecutiveMember {
    pub fn new(name: impl Into<String>, post: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            post: post.into(),
            total_present_days: 0,
            total_absent_days: 0,
            absent_count: 0,
            consecutive_absent_days: 0,
            is_blacklisted: false,
        }
    }

    pub(crate) fn from_parts(
        name: String,
        post: String,
        total_present_days: u32,
        total_absent_days: u32,
        absent_count: u32,
        consecutive_absent_days: u32,
        is_blacklisted: bool,
    ) -> Self {
        Self {
            name,
            post,
            total_present_days,
            total_absent_days,
            absent_count,
            consecutive_absent_days,
            is_blacklisted,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn post(&self) -> &str {
        &self.post
    }

    pub fn total_present_days(&self) -> u32 {
        self.total_present_days
    }

    pub fn total_absent_days(&self) -> u32 {
        self.total_absent_days
    }

    pub fn absent_count(&self) -> u32 {
        self.absent_count
    }

    pub fn consecutive_absent_days(&self) -> u32 {
        self.consecutive_absent_days
    }

    pub fn is_blacklisted(&self) -> bool {
        self.is_blacklisted
    }

    pub(crate) fn record_absence(&mut self) {
        self.absent_count = self.absent_count.saturating_add(1);
        self.total_absent_days = self.total_absent_days.saturating_add(1);
        self.consecutive_absent_days = self.consecutive_absent_days.saturating_add(1);
    }

    pub(crate) fn record_presence(&mut self) {
        self.total_present_days = self.total_present_days.saturating_add(1);
        self.clear_consecutive_streak();
    }

    pub(crate) fn clear_consecutive_streak(&mut self) {
        self.consecutive_absent_days = 0;
    }

    /// Sets the flag once the streak reaches the threshold. Never clears it.
    /// Returns true only when the flag flipped on this call.
    pub(crate) fn escalate_if_due(&mut self) -> bool {
        if self.is_blacklisted || self.consecutive_absent_days < BLACKLIST_THRESHOLD {
            return false;
        }
        self.is_blacklisted = true;
        true
    }

    pub(crate) fn lift_blacklist(&mut self) {
        self.is_blacklisted = false;
        self.clear_consecutive_streak();
    }

    pub(crate) fn rename(&mut self, name: String, post: String) {
        self.name = name;
        self.post = post;
    }
}

thread_local! {
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// Ordering used for every member listing.
///
/// Unicode collation (CLDR root) first, so accented names sit next to their
/// base letters. Lowercase ahead of uppercase on ties, raw comparison last so
/// distinct names never compare equal.
pub fn display_order(a: &str, b: &str) -> Ordering {
    let collated = COLLATOR.with(|c| c.borrow_mut().collate(a, b));

    collated
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => x.cmp(&y),
                })
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}
